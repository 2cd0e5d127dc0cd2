//! Runs law cases through the oracle and records their outcomes.

use super::{CaseOutcome, CaseStatus, FixtureSet, LawReport};
use crate::comonad::{Comonad, Element};
use crate::config::{ConfigError, HarnessConfig};
use crate::error::Result;
use crate::laws::{Law, LawCase, associativity, left_identity, right_identity};
use crate::oracle::EquivalenceOracle;
use std::fmt::Debug;

/// Drives law checks over fixture sets.
///
/// Each `check_*` call instantiates one law on every selected fixture, in
/// fixture order, and appends one [`CaseOutcome`] per fixture. Laws or
/// fixture kinds deselected in the [`HarnessConfig`] produce no outcome.
#[derive(Debug)]
pub struct LawHarness {
    config: HarnessConfig,
    oracle: EquivalenceOracle,
    outcomes: Vec<CaseOutcome>,
    halted: bool,
}

impl LawHarness {
    /// Creates a harness for `config`.
    ///
    /// # Errors
    ///
    /// Rejects a configuration that does not validate, so a run can never
    /// pass by checking nothing.
    pub fn new(config: HarnessConfig) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        let oracle = EquivalenceOracle::with_preview_limit(config.value_preview_limit);
        Ok(Self {
            config,
            oracle,
            outcomes: Vec::new(),
            halted: false,
        })
    }

    /// The configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The oracle that judged every case so far.
    #[must_use]
    pub const fn oracle(&self) -> &EquivalenceOracle {
        &self.oracle
    }

    /// True once a violation stopped the run under `fail_fast`.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Law1 on every fixture.
    pub fn check_left_identity<W>(&mut self, fixtures: &FixtureSet<W>)
    where
        W: Comonad,
        W::Item: PartialEq + Debug,
    {
        self.run(Law::LeftIdentity, "extract", fixtures, left_identity);
    }

    /// Law2 with `f` on every fixture. `probe` names `f` in the report.
    pub fn check_right_identity<W, U, F>(&mut self, probe: &str, fixtures: &FixtureSet<W>, f: F)
    where
        W: Comonad,
        U: Element + PartialEq + Debug,
        F: Fn(W) -> Result<U> + Clone + 'static,
    {
        self.run(Law::RightIdentity, probe, fixtures, |w| {
            right_identity(f.clone(), w)
        });
    }

    /// Law3 with `f` then `g` on every fixture. `probe` names the pair in
    /// the report.
    pub fn check_associativity<W, U, V, F, G>(
        &mut self,
        probe: &str,
        fixtures: &FixtureSet<W>,
        f: F,
        g: G,
    ) where
        W: Comonad,
        U: Element,
        V: Element + PartialEq + Debug,
        F: Fn(W) -> Result<U> + Clone + 'static,
        G: Fn(W::Of<U>) -> Result<V> + Clone + 'static,
    {
        self.run(Law::Associativity, probe, fixtures, |w| {
            associativity(f.clone(), g.clone(), w)
        });
    }

    fn run<W, R, B>(&mut self, law: Law, probe: &str, fixtures: &FixtureSet<W>, build: B)
    where
        R: Debug + 'static,
        B: Fn(W) -> LawCase<R>,
    {
        for fixture in fixtures {
            if !self.config.runs(law, fixture.kind()) {
                continue;
            }

            let status = if self.halted {
                tracing::debug!(
                    law = law.code(),
                    fixture = fixture.name(),
                    "skipped after earlier violation"
                );
                CaseStatus::Skipped
            } else {
                let (left, right, eq) = build(fixture.build()).into_parts();
                match self.oracle.compare(
                    move || left.force(),
                    move || right.force(),
                    |a: &R, b: &R| eq(a, b),
                ) {
                    Ok(()) => CaseStatus::Passed,
                    Err(violation) => {
                        tracing::warn!(
                            law = law.code(),
                            probe,
                            fixture = fixture.name(),
                            violation = %violation,
                            "law violated"
                        );
                        if self.config.fail_fast {
                            self.halted = true;
                        }
                        CaseStatus::Violated(violation)
                    }
                }
            };

            tracing::info!(
                law = law.code(),
                probe,
                fixture = fixture.name(),
                status = status.as_str(),
                "law case checked"
            );
            self.outcomes.push(CaseOutcome {
                law,
                probe: probe.to_string(),
                fixture: fixture.name().to_string(),
                kind: fixture.kind(),
                status,
            });
        }
    }

    /// Snapshot of all outcomes so far.
    #[must_use]
    pub fn report(&self) -> LawReport {
        LawReport::new(self.outcomes.clone())
    }

    /// Consumes the harness into its report.
    #[must_use]
    pub fn into_report(self) -> LawReport {
        LawReport::new(self.outcomes)
    }
}
