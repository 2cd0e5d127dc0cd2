//! What the oracle reports when two sides disagree.

use crate::error::{Error, ErrorKind, Result};
use serde::Serialize;
use std::fmt;

/// One side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The first computation run.
    Left,
    /// The second computation run.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// What one side did, captured for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Observation {
    /// The side returned normally; `value` is its `Debug` rendering.
    Returned {
        /// Possibly truncated `Debug` rendering of the value.
        value: String,
    },
    /// The side raised.
    Raised {
        /// Kind of the raised error.
        kind: ErrorKind,
        /// Message of the raised error.
        message: Option<String>,
    },
}

impl Observation {
    /// Captures a result, truncating value renderings to `preview_limit` chars.
    #[must_use]
    pub fn capture<R: fmt::Debug>(result: &Result<R>, preview_limit: usize) -> Self {
        match result {
            Ok(value) => Self::Returned {
                value: preview(value, preview_limit),
            },
            Err(error) => Self::raised(error),
        }
    }

    /// Captures a raised error.
    #[must_use]
    pub fn raised(error: &Error) -> Self {
        Self::Raised {
            kind: error.kind(),
            message: error.message().map(str::to_owned),
        }
    }

    /// True when the side raised.
    #[must_use]
    pub const fn is_raised(&self) -> bool {
        matches!(self, Self::Raised { .. })
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Returned { value } => write!(f, "returned {value}"),
            Self::Raised {
                kind,
                message: Some(message),
            } => write!(f, "raised {kind:?}: {message}"),
            Self::Raised {
                kind,
                message: None,
            } => write!(f, "raised {kind:?}"),
        }
    }
}

fn preview<R: fmt::Debug>(value: &R, limit: usize) -> String {
    let rendered = format!("{value:?}");
    match rendered.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}…", &rendered[..cut]),
        None => rendered,
    }
}

/// How the two sides diverged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "divergence", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Exactly one side raised.
    AsymmetricFailure {
        /// The side that raised.
        raised: Side,
    },
    /// Both sides raised, with a different kind or message.
    ErrorMismatch,
    /// Both sides returned, and the values are not equal.
    ValueMismatch,
}

/// Two sides of a law that do not agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawViolation {
    /// How they diverged.
    pub kind: ViolationKind,
    /// What the left side did.
    pub left: Observation,
    /// What the right side did.
    pub right: Observation,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::AsymmetricFailure { raised } => {
                write!(f, "asymmetric failure: only the {raised} side raised")?;
            }
            ViolationKind::ErrorMismatch => write!(f, "both sides raised different errors")?,
            ViolationKind::ValueMismatch => write!(f, "values differ")?,
        }
        write!(f, " (left {}, right {})", self.left, self.right)
    }
}

impl std::error::Error for LawViolation {}
