//! Function-transformation combinators.
//!
//! These are the building blocks the law engine uses to state each comonad
//! law as two computations over the same container:
//!
//! - [`curry1`]: Fix the first argument of a two-argument function
//! - [`curry0`]: Fix the only argument of a one-argument function, deferring the call
//! - [`compose`]: `a -> outer(inner(a))`
//!
//! All combinators are pure and know nothing about containers. Every returned
//! closure is `Clone`, so it can itself be curried or composed again.
//!
//! # Algebraic Laws
//!
//! - Composition is associative: `compose(h, compose(g, f)) ≃ compose(compose(h, g), f)`
//! - Currying then applying is application: `curry1(f, a)(b) = f(a, b)`

pub mod compose;
pub mod curry;

pub use compose::compose;
pub use curry::{curry0, curry1};
