//! End-to-end law checks over the standard fixtures.
//!
//! Run with: `cargo test --test comonad_laws`

#[macro_use]
mod common;
use common::*;

use comonad_laws::config::{ConfigError, HarnessConfig};
use comonad_laws::error::{Error, ErrorKind};
use comonad_laws::harness::standard::{
    StringSource, first_or_default, first_or_default_as_f64, parse_first_int,
    parse_first_or_default_int, run_standard_suite, standard_fixtures,
};
use comonad_laws::harness::{CaseStatus, FixtureKind, LawHarness, LawReport};
use comonad_laws::laws::{Law, associativity, left_identity, right_identity};
use comonad_laws::oracle::{Observation, Side, ViolationKind, compare};
use comonad_laws::stream::Observable;

fn init_test(name: &str) {
    init_test_logging();
    test_phase!(name);
}

fn run_case<R: std::fmt::Debug + 'static>(
    case: comonad_laws::laws::LawCase<R>,
) -> Result<(), comonad_laws::oracle::LawViolation> {
    let (left, right, eq) = case.into_parts();
    compare(move || left.force(), move || right.force(), |a: &R, b: &R| eq(a, b))
}

#[test]
fn left_identity_holds_on_every_standard_fixture() {
    init_test("left_identity_holds_on_every_standard_fixture");

    for fixture in &standard_fixtures() {
        let verdict = run_case(left_identity(fixture.build()));
        assert_with_log!(verdict.is_ok(), fixture.name(), "pass", verdict);
    }

    test_complete!("left_identity_holds_on_every_standard_fixture");
}

#[test]
fn right_identity_with_parse_first_int() {
    init_test("right_identity_with_parse_first_int");

    let value = Observable::just(Some("42".to_string()));
    let (left, right, _) = right_identity(parse_first_int, value).into_parts();
    let (left, right) = (left.force(), right.force());
    assert_eq!(left.as_ref().ok(), Some(&42));
    assert_eq!(right.as_ref().ok(), Some(&42));

    let (left, right, _) = right_identity(parse_first_int, StringSource::empty()).into_parts();
    let (left, right) = (
        left.force().expect_err("left raises"),
        right.force().expect_err("right raises"),
    );
    assert_eq!(left.kind(), ErrorKind::EmptySource);
    assert!(left.same_failure(&right), "{left} vs {right}");

    for fixture in &standard_fixtures() {
        let verdict = run_case(right_identity(parse_first_int, fixture.build()));
        assert_with_log!(verdict.is_ok(), fixture.name(), "pass", verdict);
    }

    test_complete!("right_identity_with_parse_first_int");
}

#[test]
fn associativity_holds_on_every_standard_fixture() {
    init_test("associativity_holds_on_every_standard_fixture");

    for fixture in &standard_fixtures() {
        let verdict = run_case(associativity(
            parse_first_or_default_int,
            first_or_default_as_f64,
            fixture.build(),
        ));
        assert_with_log!(verdict.is_ok(), fixture.name(), "pass", verdict);
    }

    let (left, _, _) = associativity(
        parse_first_or_default_int,
        first_or_default_as_f64,
        Observable::just(Some("42".to_string())),
    )
    .into_parts();
    assert_eq!(left.force().expect("value"), vec![42.0]);

    test_complete!("associativity_holds_on_every_standard_fixture");
}

#[test]
fn empty_container_end_to_end() {
    init_test("empty_container_end_to_end");

    let config = HarnessConfig::new().fixture_kinds([FixtureKind::Empty]);
    let mut harness = LawHarness::new(config).expect("valid config");
    let fixtures = standard_fixtures();
    harness.check_left_identity(&fixtures);
    harness.check_right_identity("parse_first_int", &fixtures, parse_first_int);
    harness.check_associativity(
        "parse_first_or_default_int ; first_or_default_as_f64",
        &fixtures,
        parse_first_or_default_int,
        first_or_default_as_f64,
    );

    let report = harness.into_report();
    assert_with_log!(report.passed(), "empty fixture", "all pass", report.to_text());
    assert_eq!(report.counts().passed, 3);

    test_complete!("empty_container_end_to_end", cases = report.cases().len());
}

#[test]
fn first_or_default_violates_right_identity_on_empty() {
    init_test("first_or_default_violates_right_identity_on_empty");

    let violation = run_case(right_identity(first_or_default, StringSource::empty()))
        .expect_err("violation");
    assert_eq!(
        violation.kind,
        ViolationKind::AsymmetricFailure {
            raised: Side::Right
        }
    );
    assert_eq!(
        violation.left,
        Observation::Returned {
            value: "None".to_string()
        }
    );
    assert_eq!(violation.right, Observation::raised(&Error::empty_source()));

    test_complete!("first_or_default_violates_right_identity_on_empty");
}

#[test]
fn standard_suite_reports_the_single_known_violation() {
    init_test("standard_suite_reports_the_single_known_violation");

    let report = run_standard_suite(HarnessConfig::default()).expect("valid config");
    let counts = report.counts();
    assert_with_log!(counts.passed == 15, "passed", 15, counts.passed);
    assert_eq!(counts.violated, 1);
    assert_eq!(counts.skipped, 0);

    let failure = report.failures().next().expect("one failure");
    assert_eq!(failure.law, Law::RightIdentity);
    assert_eq!(failure.probe, "first_or_default");
    assert_eq!(failure.kind, FixtureKind::Empty);
    assert!(matches!(
        failure.status,
        CaseStatus::Violated(ref v)
            if v.kind == ViolationKind::AsymmetricFailure { raised: Side::Right }
    ));

    test_complete!("standard_suite_reports_the_single_known_violation", passed = counts.passed);
}

#[test]
fn fail_fast_stops_after_first_violation() {
    init_test("fail_fast_stops_after_first_violation");

    let report = run_standard_suite(HarnessConfig::new().fail_fast(true)).expect("valid config");
    let counts = report.counts();
    assert_eq!(counts.violated, 1);
    assert_eq!(counts.total(), 16);

    let position = report
        .cases()
        .iter()
        .position(|case| matches!(case.status, CaseStatus::Violated(_)))
        .expect("violation present");
    assert!(
        report.cases()[position + 1..]
            .iter()
            .all(|case| case.status == CaseStatus::Skipped)
    );
    assert_eq!(counts.skipped, 16 - position - 1);

    test_complete!("fail_fast_stops_after_first_violation", skipped = counts.skipped);
}

#[test]
fn report_renders_text_and_json() {
    init_test("report_renders_text_and_json");

    let report = run_standard_suite(HarnessConfig::new().laws([Law::RightIdentity]))
        .expect("valid config");
    let text = report.to_text();
    assert!(text.starts_with("comonad laws: 7 passed, 1 violated, 0 skipped\n"), "{text}");
    assert!(text.contains("FAIL Law2 (right_identity) first_or_default [empty: empty]"));

    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().expect("serialize")).expect("parse");
    assert_eq!(json["passed"], false);
    let cases = json["cases"].as_array().expect("cases");
    assert_eq!(cases.len(), 8);
    assert!(cases.iter().all(|case| case["law"] == "right_identity"));
    assert_eq!(cases[2]["fixture"], "empty");
    assert_eq!(cases[2]["status"], "violated");
    assert_eq!(cases[2]["violation"]["kind"]["raised"], "right");

    test_complete!("report_renders_text_and_json");
}

#[test]
fn error_fixture_raises_identically_on_both_sides() {
    init_test("error_fixture_raises_identically_on_both_sides");

    let fixtures = standard_fixtures();
    let error = fixtures
        .iter()
        .find(|fixture| fixture.kind() == FixtureKind::Error)
        .expect("error fixture");

    let (left, right, _) = right_identity(first_or_default, error.build()).into_parts();
    let (left, right) = (
        left.force().expect_err("left"),
        right.force().expect_err("right"),
    );
    assert_eq!(left.kind(), ErrorKind::InvalidOperation);
    assert!(left.same_failure(&right));

    test_complete!("error_fixture_raises_identically_on_both_sides");
}

#[test]
fn nothing_selected_never_reports_success() {
    init_test("nothing_selected_never_reports_success");

    let no_laws = run_standard_suite(HarnessConfig::new().laws([]));
    assert_with_log!(
        no_laws.is_err(),
        "empty law selection",
        "Err(NoLaws)",
        no_laws.as_ref().map(LawReport::passed)
    );
    assert_eq!(no_laws.unwrap_err(), ConfigError::NoLaws);

    let no_fixtures = LawHarness::new(HarnessConfig::new().fixture_kinds([]));
    assert_eq!(no_fixtures.unwrap_err(), ConfigError::NoFixtures);

    test_complete!("nothing_selected_never_reports_success");
}
