//! The comonad law sheet and the law engine.
//!
//! Each law is stated as two computations over the same fixture plus the
//! equality used to compare their results. Building a [`LawCase`] runs
//! nothing; the [`oracle`](crate::oracle) runs both sides and judges them.
//!
//! # Law Sheet
//!
//! | Law | Code | Statement | User functions |
//! |-----|------|-----------|----------------|
//! | Law1 | `left_identity` | `extend(extract, w) ≃ w` | none |
//! | Law2 | `right_identity` | `extract(extend(f, w)) ≃ f(w)` | `f: W<T> -> U` |
//! | Law3 | `associativity` | `extend(g, extend(f, w)) ≃ extend(g ∘ extend(f), w)` | `f: W<T> -> U`, `g: W<U> -> V` |
//!
//! `≃` is the oracle's relation: both sides return equal values, or both
//! raise the same failure (same kind, same message).
//!
//! Laws 1 and 3 compare containers through their ordered materialization;
//! Law 2 compares plain values.

mod associativity;
mod case;
mod identity;

pub use associativity::associativity;
pub use case::{LawCase, Thunk};
pub use identity::{left_identity, right_identity};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every law the harness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    /// Law1: `extend(extract, w) ≃ w`.
    LeftIdentity,
    /// Law2: `extract(extend(f, w)) ≃ f(w)`.
    RightIdentity,
    /// Law3: `extend(g, extend(f, w)) ≃ extend(g ∘ extend(f), w)`.
    Associativity,
}

impl Law {
    /// All laws, in sheet order.
    pub const ALL: [Self; 3] = [Self::LeftIdentity, Self::RightIdentity, Self::Associativity];

    /// Stable snake_case code, as used in reports and configuration.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LeftIdentity => "left_identity",
            Self::RightIdentity => "right_identity",
            Self::Associativity => "associativity",
        }
    }

    /// Position on the sheet (1-based), i.e. the `N` of `LawN`.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::LeftIdentity => 1,
            Self::RightIdentity => 2,
            Self::Associativity => 3,
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Law{} ({})", self.number(), self.code())
    }
}

/// Error returned when a law name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLaw(pub String);

impl fmt::Display for UnknownLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown law: {}", self.0)
    }
}

impl std::error::Error for UnknownLaw {}

impl FromStr for Law {
    type Err = UnknownLaw;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left_identity" | "law1" | "1" => Ok(Self::LeftIdentity),
            "right_identity" | "law2" | "2" => Ok(Self::RightIdentity),
            "associativity" | "law3" | "3" => Ok(Self::Associativity),
            other => Err(UnknownLaw(other.to_string())),
        }
    }
}

/// A single entry in the law sheet.
#[derive(Debug, Clone)]
pub struct LawEntry {
    /// The law identifier.
    pub law: Law,
    /// Human-readable statement of the law.
    pub statement: &'static str,
    /// How many user-supplied functions the law needs.
    pub arity: usize,
}

/// The complete law sheet.
#[must_use]
pub fn law_sheet() -> Vec<LawEntry> {
    vec![
        LawEntry {
            law: Law::LeftIdentity,
            statement: "extend(extract, w) ~= w",
            arity: 0,
        },
        LawEntry {
            law: Law::RightIdentity,
            statement: "extract(extend(f, w)) ~= f(w)",
            arity: 1,
        },
        LawEntry {
            law: Law::Associativity,
            statement: "extend(g, extend(f, w)) ~= extend(g . extend(f), w)",
            arity: 2,
        },
    ]
}
