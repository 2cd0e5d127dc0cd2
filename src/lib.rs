//! Mechanical verification of the comonad laws.
//!
//! Given a container that can `extend`, `extract` and materialize itself
//! (the [`Comonad`](comonad::Comonad) capability), this crate checks
//!
//! 1. left identity: `extend(extract, w) ≃ w`
//! 2. right identity: `extract(extend(f, w)) ≃ f(w)`
//! 3. associativity: `extend(g, extend(f, w)) ≃ extend(g ∘ extend(f), w)`
//!
//! over fixtures that carry a value, a null, nothing, or a failure. Two sides
//! are `≃` when they return equal values or raise the same failure.
//!
//! # Layout
//!
//! - [`combinator`]: `curry0`, `curry1`, `compose`
//! - [`comonad`]: the capability trait and its free-function forms
//! - [`laws`]: the law sheet; builds each law as a deferred [`LawCase`](laws::LawCase)
//! - [`oracle`]: runs both sides and judges them
//! - [`harness`]: fixtures, the driver, reports and the standard suite
//! - [`stream`]: [`Observable`](stream::Observable), the reference container
//! - [`config`]: [`HarnessConfig`](config::HarnessConfig) and env overrides
//! - [`error`]: the failure type containers raise
//!
//! # Example
//!
//! ```
//! use comonad_laws::config::HarnessConfig;
//! use comonad_laws::harness::standard::run_standard_suite;
//! use comonad_laws::laws::Law;
//!
//! let report = run_standard_suite(HarnessConfig::new().laws([Law::LeftIdentity])).unwrap();
//! assert!(report.passed());
//! assert_eq!(report.counts().passed, 4);
//! ```

#![forbid(unsafe_code)]

pub mod combinator;
pub mod comonad;
pub mod config;
pub mod error;
pub mod harness;
pub mod laws;
pub mod oracle;
pub mod stream;

pub use comonad::{Comonad, Element};
pub use config::{ConfigError, HarnessConfig};
pub use error::{Error, ErrorKind, Result};
pub use harness::{LawHarness, LawReport};
pub use laws::Law;
pub use oracle::{EquivalenceOracle, LawViolation};
