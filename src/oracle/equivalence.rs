//! Running both sides of a law and judging the outcome.

use super::violation::{LawViolation, Observation, Side, ViolationKind};
use crate::error::Result;
use std::fmt;

/// Default number of characters kept when rendering a value for diagnostics.
pub const DEFAULT_PREVIEW_LIMIT: usize = 256;

/// Judges two already-computed outcomes.
///
/// # Errors
///
/// Returns the [`LawViolation`] describing how `left` and `right` diverge.
pub fn judge<R, E>(
    left: &Result<R>,
    right: &Result<R>,
    eq: E,
    preview_limit: usize,
) -> core::result::Result<(), LawViolation>
where
    R: fmt::Debug,
    E: Fn(&R, &R) -> bool,
{
    let kind = match (left, right) {
        (Ok(a), Ok(b)) if eq(a, b) => return Ok(()),
        (Ok(_), Ok(_)) => ViolationKind::ValueMismatch,
        (Err(x), Err(y)) if x.same_failure(y) => return Ok(()),
        (Err(_), Err(_)) => ViolationKind::ErrorMismatch,
        (Err(_), Ok(_)) => ViolationKind::AsymmetricFailure { raised: Side::Left },
        (Ok(_), Err(_)) => ViolationKind::AsymmetricFailure {
            raised: Side::Right,
        },
    };
    Err(LawViolation {
        kind,
        left: Observation::capture(left, preview_limit),
        right: Observation::capture(right, preview_limit),
    })
}

/// Runs `left`, then `right`, and judges the outcomes.
///
/// Both sides always run, even when the left one raises.
///
/// # Errors
///
/// Returns the [`LawViolation`] describing how the sides diverge.
pub fn compare<R, L, Rt, E>(left: L, right: Rt, eq: E) -> core::result::Result<(), LawViolation>
where
    R: fmt::Debug,
    L: FnOnce() -> Result<R>,
    Rt: FnOnce() -> Result<R>,
    E: Fn(&R, &R) -> bool,
{
    let left = left();
    let right = right();
    judge(&left, &right, eq, DEFAULT_PREVIEW_LIMIT)
}

/// Records every comparison it judges.
///
/// Mirrors the other oracles' shape: feed it comparisons, then call
/// [`check`](Self::check) to surface the first violation.
#[derive(Debug)]
pub struct EquivalenceOracle {
    preview_limit: usize,
    comparisons: usize,
    violations: Vec<LawViolation>,
}

impl Default for EquivalenceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl EquivalenceOracle {
    /// Creates an oracle with the default preview limit.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_preview_limit(DEFAULT_PREVIEW_LIMIT)
    }

    /// Creates an oracle that truncates value renderings to `limit` chars.
    #[must_use]
    pub const fn with_preview_limit(limit: usize) -> Self {
        Self {
            preview_limit: limit,
            comparisons: 0,
            violations: Vec::new(),
        }
    }

    /// Runs both sides and judges them, recording any violation.
    ///
    /// # Errors
    ///
    /// Returns the violation for this comparison, if any.
    pub fn compare<R, L, Rt, E>(
        &mut self,
        left: L,
        right: Rt,
        eq: E,
    ) -> core::result::Result<(), LawViolation>
    where
        R: fmt::Debug,
        L: FnOnce() -> Result<R>,
        Rt: FnOnce() -> Result<R>,
        E: Fn(&R, &R) -> bool,
    {
        let left = left();
        let right = right();
        self.comparisons += 1;
        let verdict = judge(&left, &right, eq, self.preview_limit);
        tracing::debug!(
            comparison = self.comparisons,
            verdict = if verdict.is_ok() { "agree" } else { "diverge" },
            left = %Observation::capture(&left, self.preview_limit),
            right = %Observation::capture(&right, self.preview_limit),
            "compared law sides"
        );
        if let Err(violation) = &verdict {
            self.violations.push(violation.clone());
        }
        verdict
    }

    /// Number of comparisons judged so far.
    #[must_use]
    pub const fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// All recorded violations, in order.
    #[must_use]
    pub fn violations(&self) -> &[LawViolation] {
        &self.violations
    }

    /// Returns the preview limit in effect.
    #[must_use]
    pub const fn preview_limit(&self) -> usize {
        self.preview_limit
    }

    /// Checks that no comparison diverged.
    ///
    /// # Errors
    ///
    /// Returns the first recorded violation.
    pub fn check(&self) -> core::result::Result<(), LawViolation> {
        match self.violations.first() {
            Some(violation) => Err(violation.clone()),
            None => Ok(()),
        }
    }

    /// Clears all recorded state.
    pub fn reset(&mut self) {
        self.comparisons = 0;
        self.violations.clear();
    }
}
