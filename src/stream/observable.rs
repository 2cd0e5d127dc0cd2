//! A cold, lazy, fallible sequence: the reference [`Comonad`].
//!
//! An [`Observable`] is a recipe for a stream. Nothing runs when it is built
//! or extended; every subscription starts a fresh stream from the beginning.
//!
//! | Operation | Meaning |
//! |-----------|---------|
//! | [`Observable::just`] | one element, then completion |
//! | [`Observable::empty`] | immediate completion |
//! | [`Observable::fail`] | immediate failure |
//! | [`Observable::many_select`] | `extend`: apply `f` to every suffix |
//! | [`Observable::first`] | `extract`: first element, or `EmptySource` |
//! | [`Observable::to_vec`] | drain everything, or the terminal failure |

use super::drain::{First, Materialize, block_on};
use super::many_select::ManySelect;
use super::replay::replay;
use super::{BoxStream, Materialized, Stream};
use crate::comonad::{Comonad, Element};
use crate::error::{Error, Result};
use std::fmt;
use std::rc::Rc;

/// A cold observable sequence of `T`.
pub struct Observable<T> {
    subscribe: Rc<dyn Fn() -> BoxStream<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe: Rc::clone(&self.subscribe),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

impl<T: Element> Observable<T> {
    /// Builds an observable from a stream factory, called once per subscription.
    pub fn defer<S, F>(factory: F) -> Self
    where
        S: Stream<Item = Result<T>> + 'static,
        F: Fn() -> S + 'static,
    {
        Self {
            subscribe: Rc::new(move || -> BoxStream<T> { Box::pin(factory()) }),
        }
    }

    /// Replays a recorded run on every subscription.
    #[must_use]
    pub fn from_materialized(run: Materialized<T>) -> Self {
        Self::defer(move || replay(run.clone()))
    }

    /// Produces `values` in order, then completes.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self::from_materialized(Materialized::completed(values.into_iter().collect()))
    }

    /// Produces exactly one element, then completes.
    #[must_use]
    pub fn just(value: T) -> Self {
        Self::from_values([value])
    }

    /// Completes without producing anything.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_materialized(Materialized::completed(Vec::new()))
    }

    /// Fails immediately with `error`.
    #[must_use]
    pub fn fail(error: Error) -> Self {
        Self::from_materialized(Materialized::failed(Vec::new(), error))
    }

    /// Starts a fresh stream.
    #[must_use]
    pub fn subscribe(&self) -> BoxStream<T> {
        (self.subscribe)()
    }

    /// Drains a fresh subscription, keeping elements and terminal event.
    #[must_use]
    pub fn materialize(&self) -> Materialized<T> {
        block_on(Materialize::new(self.subscribe()))
    }

    /// Drains a fresh subscription into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the terminal failure if the sequence fails.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.materialize().into_result()
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// Fails with `EmptySource` when the sequence completes without an
    /// element, or with the sequence's own failure if it fails first.
    pub fn first(&self) -> Result<T> {
        block_on(First::new(self.subscribe())).unwrap_or_else(|| Err(Error::empty_source()))
    }

    /// The first element, or `T::default()` when the sequence is empty.
    ///
    /// # Errors
    ///
    /// Fails when the sequence fails before producing an element.
    pub fn first_or_default(&self) -> Result<T>
    where
        T: Default,
    {
        block_on(First::new(self.subscribe())).unwrap_or_else(|| Ok(T::default()))
    }

    /// Applies `f` to every suffix of this sequence.
    ///
    /// See [`ManySelect`] for the exact semantics.
    #[must_use]
    pub fn many_select<U, F>(&self, f: F) -> Observable<U>
    where
        U: Element,
        F: Fn(Observable<T>) -> Result<U> + 'static,
    {
        let source = self.clone();
        let f = Rc::new(f);
        Observable::defer(move || ManySelect::new(source.subscribe(), Rc::clone(&f)))
    }
}

impl<T: Element> Comonad for Observable<T> {
    type Item = T;
    type Of<U: Element> = Observable<U>;

    fn extend<U, F>(&self, f: F) -> Observable<U>
    where
        U: Element,
        F: Fn(Self) -> Result<U> + 'static,
    {
        self.many_select(f)
    }

    fn extract(&self) -> Result<T> {
        self.first()
    }

    fn to_ordered_vec(&self) -> Result<Vec<T>> {
        self.to_vec()
    }

    fn first_or_default(&self) -> Result<T>
    where
        T: Default,
    {
        Observable::first_or_default(self)
    }
}
