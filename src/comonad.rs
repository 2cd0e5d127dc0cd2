//! The capability a container must provide to be checked.
//!
//! The law engine and the oracle only ever see a container through
//! [`Comonad`]. Any lazy or asynchronous container can be verified as long as
//! it can:
//!
//! - `extend` a whole-container function into a new container of results
//! - `extract` a representative element, failing when there is none
//! - materialize itself into a finite, ordered `Vec`
//! - produce its first element or a default
//!
//! The free functions below mirror the trait methods with the container as
//! the *last* argument, so they can be partially applied with
//! [`curry1`](crate::combinator::curry1) and chained with
//! [`compose`](crate::combinator::compose).

use crate::error::Result;

/// Element types a container may carry.
pub trait Element: Clone + 'static {}

impl<T: Clone + 'static> Element for T {}

/// A container with comonadic `extend`/`extract`.
///
/// `Of<U>` is the same container family carrying `U` instead of `Item`, which
/// is what `extend` produces.
///
/// Implementations must be cold and cheap to clone: cloning a container and
/// materializing both clones must observe the same sequence.
pub trait Comonad: Clone + 'static {
    /// The element type.
    type Item: Element;

    /// This container family over another element type.
    type Of<U: Element>: Comonad<Item = U>;

    /// Applies `f` contextually, producing one result per position.
    ///
    /// Nothing runs until the result is materialized or extracted.
    fn extend<U, F>(&self, f: F) -> Self::Of<U>
    where
        U: Element,
        F: Fn(Self) -> Result<U> + 'static;

    /// Returns the representative element.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::EmptySource`](crate::error::ErrorKind::EmptySource)
    /// when no element is available, or with whatever failure the container
    /// carries.
    fn extract(&self) -> Result<Self::Item>;

    /// Drains the container into an ordered sequence.
    ///
    /// # Errors
    ///
    /// Fails with the first failure the container raises.
    fn to_ordered_vec(&self) -> Result<Vec<Self::Item>>;

    /// Returns the first element, or `Item::default()` when the container
    /// completes without one.
    ///
    /// # Errors
    ///
    /// Fails when the container raises before producing an element.
    fn first_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default;
}

/// `extend(f, w)`.
pub fn extend<W, U, F>(f: F, w: W) -> W::Of<U>
where
    W: Comonad,
    U: Element,
    F: Fn(W) -> Result<U> + 'static,
{
    w.extend(f)
}

/// `extract(w)`.
///
/// # Errors
///
/// See [`Comonad::extract`].
pub fn extract<W: Comonad>(w: W) -> Result<W::Item> {
    w.extract()
}

/// `to_ordered_vec(w)`.
///
/// # Errors
///
/// See [`Comonad::to_ordered_vec`].
pub fn to_ordered_vec<W: Comonad>(w: W) -> Result<Vec<W::Item>> {
    w.to_ordered_vec()
}

/// `first_or_default(w)`.
///
/// # Errors
///
/// See [`Comonad::first_or_default`].
pub fn first_or_default<W>(w: W) -> Result<W::Item>
where
    W: Comonad,
    W::Item: Default,
{
    w.first_or_default()
}
