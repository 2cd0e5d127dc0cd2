//! Deferred law sides.

use crate::error::Result;
use std::fmt;

use super::Law;

/// A deferred computation: runs at most once, on [`Thunk::force`].
pub struct Thunk<T> {
    run: Box<dyn FnOnce() -> Result<T>>,
}

impl<T: 'static> Thunk<T> {
    /// Wraps a computation without running it.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T> + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Runs the computation.
    ///
    /// # Errors
    ///
    /// Whatever the computation raises.
    pub fn force(self) -> Result<T> {
        (self.run)()
    }
}

impl<T> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// Equality used to compare the two sides of a law.
pub type Equivalence<R> = Box<dyn Fn(&R, &R) -> bool>;

/// One law instantiated on one fixture: two unevaluated sides and the
/// equality that must hold between their values.
pub struct LawCase<R> {
    law: Law,
    left: Thunk<R>,
    right: Thunk<R>,
    eq: Equivalence<R>,
}

impl<R: 'static> LawCase<R> {
    /// Builds a case. Neither side runs.
    pub fn new<L, Rt, E>(law: Law, left: L, right: Rt, eq: E) -> Self
    where
        L: FnOnce() -> Result<R> + 'static,
        Rt: FnOnce() -> Result<R> + 'static,
        E: Fn(&R, &R) -> bool + 'static,
    {
        Self {
            law,
            left: Thunk::new(left),
            right: Thunk::new(right),
            eq: Box::new(eq),
        }
    }

    /// The law this case instantiates.
    #[must_use]
    pub fn law(&self) -> Law {
        self.law
    }

    /// Splits into `(left, right, eq)`.
    #[must_use]
    pub fn into_parts(self) -> (Thunk<R>, Thunk<R>, Equivalence<R>) {
        (self.left, self.right, self.eq)
    }
}

impl<R> fmt::Debug for LawCase<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LawCase").field("law", &self.law).finish_non_exhaustive()
    }
}
