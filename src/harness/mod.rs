//! The fixture driver: runs every selected law on every selected fixture.
//!
//! ```
//! use comonad_laws::config::HarnessConfig;
//! use comonad_laws::harness::{CaseStatus, Fixture, FixtureKind, FixtureSet, LawHarness};
//! use comonad_laws::stream::Observable;
//!
//! let fixtures = FixtureSet::new()
//!     .with(Fixture::new("one two", FixtureKind::Value, || {
//!         Observable::from_values([1, 2])
//!     }))
//!     .with(Fixture::new("empty", FixtureKind::Empty, Observable::<i32>::empty));
//!
//! let mut harness = LawHarness::new(HarnessConfig::default()).unwrap();
//! harness.check_left_identity(&fixtures);
//! harness.check_right_identity("first", &fixtures, |w: Observable<i32>| w.first());
//!
//! let report = harness.into_report();
//! assert!(report.passed());
//! assert_eq!(report.counts().passed, 4);
//! ```

mod driver;
mod fixture;
mod report;
pub mod standard;

pub use driver::LawHarness;
pub use fixture::{Fixture, FixtureKind, FixtureSet, UnknownFixtureKind};
pub use report::{CaseOutcome, CaseStatus, LawReport, ReportCounts};
