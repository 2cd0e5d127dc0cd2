//! The reference container: a cold, fallible stream with `extend`/`extract`.
//!
//! # Core Traits
//!
//! - [`Stream`]: The async equivalent of [`Iterator`], producing values over time
//!
//! # Building Blocks
//!
//! - [`Observable`]: Cold lazy sequence implementing [`Comonad`](crate::comonad::Comonad)
//! - [`ManySelect`]: The stream behind `Observable::many_select`
//! - [`Materialized`]: A drained run (elements plus terminal event)
//! - [`Replay`]: A recorded run replayed as a stream
//! - [`Materialize`], [`First`], [`block_on`]: Synchronous draining
//!
//! # Examples
//!
//! ```
//! use comonad_laws::stream::Observable;
//!
//! let w = Observable::from_values(vec![1, 2, 3]);
//! let tails = w.many_select(|s: Observable<i32>| s.to_vec().map(|v| v.len()));
//! assert_eq!(tails.to_vec().unwrap(), vec![3, 2, 1]);
//! ```

mod drain;
mod many_select;
mod materialized;
mod observable;
mod replay;
mod stream;

use crate::error::Result;
use std::pin::Pin;

pub use drain::{First, Materialize, block_on, noop_waker};
pub use many_select::ManySelect;
pub use materialized::Materialized;
pub use observable::Observable;
pub use replay::{Replay, replay};
pub use stream::Stream;

/// A type-erased stream of fallible elements.
pub type BoxStream<T> = Pin<Box<dyn Stream<Item = Result<T>>>>;
