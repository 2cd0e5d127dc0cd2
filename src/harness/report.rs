//! Per-case outcomes and the run summary.

use super::FixtureKind;
use crate::laws::Law;
use crate::oracle::LawViolation;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::Write as _;

/// What happened to one (law, fixture) case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    /// Both sides agreed.
    Passed,
    /// The sides diverged.
    Violated(LawViolation),
    /// Not run because an earlier case failed under `fail_fast`.
    Skipped,
}

impl CaseStatus {
    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Violated(_) => "violated",
            Self::Skipped => "skipped",
        }
    }

    /// The violation, when there is one.
    #[must_use]
    pub const fn violation(&self) -> Option<&LawViolation> {
        match self {
            Self::Violated(violation) => Some(violation),
            _ => None,
        }
    }
}

/// The outcome of one law on one fixture.
///
/// Serializes flat: `law`, `probe`, `fixture`, `fixture_kind`, `status`, and
/// `violation` (null unless violated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// The law checked.
    pub law: Law,
    /// Names the user functions the law was instantiated with.
    pub probe: String,
    /// Fixture name.
    pub fixture: String,
    /// Fixture kind.
    pub kind: FixtureKind,
    /// Verdict.
    pub status: CaseStatus,
}

impl Serialize for CaseOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CaseOutcome", 6)?;
        state.serialize_field("law", &self.law)?;
        state.serialize_field("probe", &self.probe)?;
        state.serialize_field("fixture", &self.fixture)?;
        state.serialize_field("fixture_kind", &self.kind)?;
        state.serialize_field("status", self.status.as_str())?;
        state.serialize_field("violation", &self.status.violation())?;
        state.end()
    }
}

/// Case totals by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReportCounts {
    /// Cases that passed.
    pub passed: usize,
    /// Cases that diverged.
    pub violated: usize,
    /// Cases skipped under `fail_fast`.
    pub skipped: usize,
}

impl ReportCounts {
    /// Total number of cases.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.violated + self.skipped
    }
}

/// Every case outcome of a run, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct LawReport {
    cases: Vec<CaseOutcome>,
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    passed: bool,
    counts: ReportCounts,
    cases: &'a [CaseOutcome],
}

impl LawReport {
    /// Builds a report from outcomes in run order.
    #[must_use]
    pub fn new(cases: Vec<CaseOutcome>) -> Self {
        Self { cases }
    }

    /// All outcomes.
    #[must_use]
    pub fn cases(&self) -> &[CaseOutcome] {
        &self.cases
    }

    /// True when no case was violated.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Violated cases, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.cases
            .iter()
            .filter(|case| matches!(case.status, CaseStatus::Violated(_)))
    }

    /// Totals by status.
    #[must_use]
    pub fn counts(&self) -> ReportCounts {
        let mut counts = ReportCounts::default();
        for case in &self.cases {
            match case.status {
                CaseStatus::Passed => counts.passed += 1,
                CaseStatus::Violated(_) => counts.violated += 1,
                CaseStatus::Skipped => counts.skipped += 1,
            }
        }
        counts
    }

    /// Human-readable summary, one line per case.
    #[must_use]
    pub fn to_text(&self) -> String {
        let counts = self.counts();
        let mut out = format!(
            "comonad laws: {} passed, {} violated, {} skipped\n",
            counts.passed, counts.violated, counts.skipped
        );
        for case in &self.cases {
            let tag = match case.status {
                CaseStatus::Passed => "PASS",
                CaseStatus::Violated(_) => "FAIL",
                CaseStatus::Skipped => "SKIP",
            };
            let _ = write!(
                out,
                "  {tag} {} {} [{}: {}]",
                case.law, case.probe, case.kind, case.fixture
            );
            if let CaseStatus::Violated(violation) = &case.status {
                let _ = write!(out, ": {violation}");
            }
            out.push('\n');
        }
        out
    }

    /// JSON rendering with totals and every case.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            passed: self.passed(),
            counts: self.counts(),
            cases: &self.cases,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::oracle::{Observation, Side, ViolationKind};

    fn outcome(law: Law, kind: FixtureKind, status: CaseStatus) -> CaseOutcome {
        CaseOutcome {
            law,
            probe: "first_or_default".to_string(),
            fixture: kind.as_str().to_string(),
            kind,
            status,
        }
    }

    fn asymmetric() -> LawViolation {
        LawViolation {
            kind: ViolationKind::AsymmetricFailure { raised: Side::Right },
            left: Observation::Returned {
                value: "None".to_string(),
            },
            right: Observation::raised(&Error::empty_source()),
        }
    }

    fn sample() -> LawReport {
        LawReport::new(vec![
            outcome(Law::RightIdentity, FixtureKind::Value, CaseStatus::Passed),
            outcome(
                Law::RightIdentity,
                FixtureKind::Empty,
                CaseStatus::Violated(asymmetric()),
            ),
            outcome(Law::RightIdentity, FixtureKind::Error, CaseStatus::Skipped),
        ])
    }

    #[test]
    fn counts_and_failures() {
        let report = sample();
        assert!(!report.passed());
        assert_eq!(
            report.counts(),
            ReportCounts {
                passed: 1,
                violated: 1,
                skipped: 1
            }
        );
        assert_eq!(report.counts().total(), 3);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].kind, FixtureKind::Empty);
        assert!(failures[0].status.violation().is_some());
    }

    #[test]
    fn empty_report_passes() {
        assert!(LawReport::default().passed());
    }

    #[test]
    fn text_lists_every_case() {
        let text = sample().to_text();
        assert!(text.starts_with("comonad laws: 1 passed, 1 violated, 1 skipped\n"));
        assert!(text.contains("  PASS Law2 (right_identity) first_or_default [value: value]"));
        assert!(text.contains("  FAIL Law2 (right_identity) first_or_default [empty: empty]: asymmetric failure"));
        assert!(text.contains("  SKIP "));
    }

    #[test]
    fn json_carries_codes_names_and_statuses() {
        let json: serde_json::Value =
            serde_json::from_str(&sample().to_json().expect("serialize")).expect("valid json");
        assert_eq!(json["passed"], false);
        assert_eq!(json["counts"]["violated"], 1);
        let cases = json["cases"].as_array().expect("cases array");
        assert_eq!(cases[0]["law"], "right_identity");
        assert_eq!(cases[0]["status"], "passed");
        assert!(cases[0]["violation"].is_null());
        assert_eq!(cases[1]["fixture"], "empty");
        assert_eq!(cases[1]["fixture_kind"], "empty");
        assert_eq!(cases[1]["status"], "violated");
        let violation = &cases[1]["violation"];
        assert_eq!(violation["kind"]["divergence"], "asymmetric_failure");
        assert_eq!(violation["kind"]["raised"], "right");
        assert_eq!(violation["right"]["kind"], "empty_source");
        assert_eq!(cases[2]["status"], "skipped");
    }
}
