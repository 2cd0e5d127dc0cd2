//! Fixtures: named, rebuildable containers to check the laws on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// The shape of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKind {
    /// Yields an ordinary element.
    Value,
    /// Yields a null (absent) element.
    Null,
    /// Completes without an element.
    Empty,
    /// Raises an injected failure.
    Error,
}

impl FixtureKind {
    /// All kinds, in run order.
    pub const ALL: [Self; 4] = [Self::Value, Self::Null, Self::Empty, Self::Error];

    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Null => "null",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a fixture kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFixtureKind(pub String);

impl fmt::Display for UnknownFixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fixture kind: {}", self.0)
    }
}

impl std::error::Error for UnknownFixtureKind {}

impl FromStr for FixtureKind {
    type Err = UnknownFixtureKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" => Ok(Self::Value),
            "null" => Ok(Self::Null),
            "empty" => Ok(Self::Empty),
            "error" => Ok(Self::Error),
            other => Err(UnknownFixtureKind(other.to_string())),
        }
    }
}

/// A named container factory.
///
/// Every law case gets a freshly built container, so no state leaks between
/// cases.
pub struct Fixture<W> {
    name: String,
    kind: FixtureKind,
    build: Rc<dyn Fn() -> W>,
}

impl<W> Clone for Fixture<W> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            build: Rc::clone(&self.build),
        }
    }
}

impl<W> fmt::Debug for Fixture<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<W> Fixture<W> {
    /// Creates a fixture from a factory.
    pub fn new<F>(name: impl Into<String>, kind: FixtureKind, build: F) -> Self
    where
        F: Fn() -> W + 'static,
    {
        Self {
            name: name.into(),
            kind,
            build: Rc::new(build),
        }
    }

    /// The fixture's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixture's kind.
    #[must_use]
    pub const fn kind(&self) -> FixtureKind {
        self.kind
    }

    /// Builds a fresh container.
    #[must_use]
    pub fn build(&self) -> W {
        (self.build)()
    }
}

/// An ordered set of fixtures.
pub struct FixtureSet<W> {
    fixtures: Vec<Fixture<W>>,
}

impl<W> Default for FixtureSet<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for FixtureSet<W> {
    fn clone(&self) -> Self {
        Self {
            fixtures: self.fixtures.clone(),
        }
    }
}

impl<W> fmt::Debug for FixtureSet<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fixtures).finish()
    }
}

impl<W> FixtureSet<W> {
    /// An empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fixtures: Vec::new(),
        }
    }

    /// Adds a fixture.
    #[must_use]
    pub fn with(mut self, fixture: Fixture<W>) -> Self {
        self.fixtures.push(fixture);
        self
    }

    /// Adds a fixture in place.
    pub fn push(&mut self, fixture: Fixture<W>) {
        self.fixtures.push(fixture);
    }

    /// Iterates fixtures in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fixture<W>> {
        self.fixtures.iter()
    }

    /// Number of fixtures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// True when there are no fixtures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

impl<'a, W> IntoIterator for &'a FixtureSet<W> {
    type Item = &'a Fixture<W>;
    type IntoIter = std::slice::Iter<'a, Fixture<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
