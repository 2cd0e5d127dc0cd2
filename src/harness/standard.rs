//! The standard suite: string fixtures and the probe functions run over them.
//!
//! Fixtures are `Observable<Option<String>>`, where `None` stands for a null
//! element:
//!
//! | Fixture | Kind | Elements |
//! |---------|------|----------|
//! | `"42"` | value | `Some("42")` |
//! | `null` | null | `None` |
//! | `empty` | empty | nothing |
//! | `error` | error | raises `InvalidOperation` |
//!
//! Probes:
//!
//! - [`first_or_default`]: the first element, or `None`
//! - [`parse_first_int`]: the first element parsed as `i32`; raises on an
//!   empty or null source
//! - [`parse_first_or_default_int`]: like `parse_first_int`, but an empty
//!   source yields a null, which then fails to parse
//! - [`first_or_default_as_f64`]: the first `i32` widened to `f64`, or `0.0`

use super::{Fixture, FixtureKind, FixtureSet, LawHarness, LawReport};
use crate::config::{ConfigError, HarnessConfig};
use crate::error::{Error, Result, ResultExt};
use crate::stream::Observable;

/// The container every standard fixture builds.
pub type StringSource = Observable<Option<String>>;

/// Message carried by the error fixture.
pub const INJECTED_FAILURE: &str = "injected failure";

/// The four standard fixtures, in run order.
#[must_use]
pub fn standard_fixtures() -> FixtureSet<StringSource> {
    FixtureSet::new()
        .with(Fixture::new("\"42\"", FixtureKind::Value, || {
            Observable::just(Some("42".to_string()))
        }))
        .with(Fixture::new("null", FixtureKind::Null, || Observable::just(None)))
        .with(Fixture::new("empty", FixtureKind::Empty, Observable::empty))
        .with(Fixture::new("error", FixtureKind::Error, || {
            Observable::fail(Error::invalid_operation(INJECTED_FAILURE))
        }))
}

/// The first element, or `None` when the source is empty.
///
/// # Errors
///
/// Propagates a failure raised before the first element.
pub fn first_or_default(w: StringSource) -> Result<Option<String>> {
    w.first_or_default()
}

/// The first element parsed as `i32`.
///
/// # Errors
///
/// `EmptySource` on an empty source, `NullValue` on a null element, `Parse`
/// when the element is not an integer, or the source's own failure.
pub fn parse_first_int(w: StringSource) -> Result<i32> {
    parse_int(w.first()?)
}

/// The first element parsed as `i32`, where an empty source counts as null.
///
/// # Errors
///
/// `NullValue` on an empty source or a null element, `Parse` when the
/// element is not an integer, or the source's own failure.
pub fn parse_first_or_default_int(w: StringSource) -> Result<i32> {
    parse_int(w.first_or_default()?)
}

/// The first element widened to `f64`, or `0.0` when the source is empty.
///
/// # Errors
///
/// Propagates a failure raised before the first element.
pub fn first_or_default_as_f64(w: Observable<i32>) -> Result<f64> {
    w.first_or_default().map(f64::from)
}

fn parse_int(element: Option<String>) -> Result<i32> {
    let text = element.ok_or_else(|| Error::null_value("s"))?;
    text.trim()
        .parse::<i32>()
        .with_context(|| format!("input string '{text}' was not in a correct format"))
}

/// Runs the standard suite under `config`:
///
/// - Law1 on every fixture
/// - Law2 with [`first_or_default`], then with [`parse_first_int`]
/// - Law3 with [`parse_first_or_default_int`] then [`first_or_default_as_f64`]
///
/// The only expected violation is Law2 with `first_or_default` on the empty
/// fixture: `f(w)` yields `None` while `extract(extend(f, w))` has nothing
/// to extract.
///
/// # Errors
///
/// Rejects a configuration that does not validate.
pub fn run_standard_suite(config: HarnessConfig) -> core::result::Result<LawReport, ConfigError> {
    let mut harness = LawHarness::new(config)?;
    let fixtures = standard_fixtures();

    tracing::info!(fixtures = fixtures.len(), "running standard comonad law suite");
    harness.check_left_identity(&fixtures);
    harness.check_right_identity("first_or_default", &fixtures, first_or_default);
    harness.check_right_identity("parse_first_int", &fixtures, parse_first_int);
    harness.check_associativity(
        "parse_first_or_default_int ; first_or_default_as_f64",
        &fixtures,
        parse_first_or_default_int,
        first_or_default_as_f64,
    );

    let report = harness.into_report();
    let counts = report.counts();
    tracing::info!(
        passed = counts.passed,
        violated = counts.violated,
        skipped = counts.skipped,
        "standard suite finished"
    );
    Ok(report)
}
