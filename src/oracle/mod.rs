//! The equivalence oracle: the only place a law is judged.
//!
//! The oracle runs two deferred computations, left then right, captures what
//! each one returned or raised, and decides whether they agree:
//!
//! | left | right | verdict |
//! |------|-------|---------|
//! | `Ok(a)` | `Ok(b)` | pass iff `eq(a, b)` |
//! | `Err(x)` | `Err(y)` | pass iff same kind and same message |
//! | `Ok(_)` | `Err(_)` | asymmetric failure |
//! | `Err(_)` | `Ok(_)` | asymmetric failure |
//!
//! Wrapped sources and backtraces never take part in the comparison.
//!
//! # Usage
//!
//! ```
//! use comonad_laws::error::Error;
//! use comonad_laws::oracle::{EquivalenceOracle, ViolationKind};
//!
//! let mut oracle = EquivalenceOracle::new();
//! oracle
//!     .compare(|| Ok(2 + 2), || Ok(4), |a: &i32, b: &i32| a == b)
//!     .unwrap();
//!
//! let verdict = oracle.compare(
//!     || Err::<i32, _>(Error::user("left")),
//!     || Err(Error::user("right")),
//!     |a: &i32, b: &i32| a == b,
//! );
//! assert_eq!(verdict.unwrap_err().kind, ViolationKind::ErrorMismatch);
//! assert!(oracle.check().is_err());
//! ```

mod equivalence;
mod violation;

pub use equivalence::{DEFAULT_PREVIEW_LIMIT, EquivalenceOracle, compare, judge};
pub use violation::{LawViolation, Observation, Side, ViolationKind};
