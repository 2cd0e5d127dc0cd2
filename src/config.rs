//! Harness configuration: which laws run, on which fixtures, and how.
//!
//! [`HarnessConfig`] uses a move-based builder:
//!
//! ```
//! use comonad_laws::config::HarnessConfig;
//! use comonad_laws::harness::FixtureKind;
//! use comonad_laws::laws::Law;
//!
//! let config = HarnessConfig::new()
//!     .laws([Law::RightIdentity])
//!     .fixture_kinds([FixtureKind::Empty, FixtureKind::Error])
//!     .fail_fast(true);
//! assert!(config.validate().is_ok());
//! assert!(config.runs(Law::RightIdentity, FixtureKind::Empty));
//! assert!(!config.runs(Law::LeftIdentity, FixtureKind::Empty));
//! ```
//!
//! # Environment overrides
//!
//! [`HarnessConfig::from_env`] layers these variables over the defaults:
//!
//! | Variable | Field | Format |
//! |----------|-------|--------|
//! | `COMONAD_LAWS_LAWS` | `laws` | comma list of `left_identity`, `law2`, `3`, ... |
//! | `COMONAD_LAWS_FIXTURES` | `fixture_kinds` | comma list of `value,null,empty,error` |
//! | `COMONAD_LAWS_FAIL_FAST` | `fail_fast` | `true/false/1/0/yes/no` |
//! | `COMONAD_LAWS_VALUE_PREVIEW_LIMIT` | `value_preview_limit` | integer >= 8 |

use crate::harness::FixtureKind;
use crate::laws::Law;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "COMONAD_LAWS_";

/// Smallest accepted `value_preview_limit`.
pub const MIN_VALUE_PREVIEW_LIMIT: usize = 8;

/// Configuration for a law harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Laws to check, in run order.
    pub laws: Vec<Law>,
    /// Fixture kinds to check each law on.
    pub fixture_kinds: Vec<FixtureKind>,
    /// Stop checking after the first violation.
    pub fail_fast: bool,
    /// Characters kept when rendering a value into a diagnostic.
    pub value_preview_limit: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessConfig {
    /// Every law on every fixture kind, without `fail_fast`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            laws: Law::ALL.to_vec(),
            fixture_kinds: FixtureKind::ALL.to_vec(),
            fail_fast: false,
            value_preview_limit: crate::oracle::DEFAULT_PREVIEW_LIMIT,
        }
    }

    /// Restricts the run to `laws`.
    #[must_use]
    pub fn laws(mut self, laws: impl IntoIterator<Item = Law>) -> Self {
        self.laws = laws.into_iter().collect();
        self
    }

    /// Restricts the run to fixtures of the given kinds.
    #[must_use]
    pub fn fixture_kinds(mut self, kinds: impl IntoIterator<Item = FixtureKind>) -> Self {
        self.fixture_kinds = kinds.into_iter().collect();
        self
    }

    /// Sets whether to stop after the first violation.
    #[must_use]
    pub const fn fail_fast(mut self, value: bool) -> Self {
        self.fail_fast = value;
        self
    }

    /// Sets how many characters of a value a diagnostic keeps.
    #[must_use]
    pub const fn value_preview_limit(mut self, limit: usize) -> Self {
        self.value_preview_limit = limit;
        self
    }

    /// True when `law` is checked on fixtures of `kind`.
    #[must_use]
    pub fn runs(&self, law: Law, kind: FixtureKind) -> bool {
        self.laws.contains(&law) && self.fixture_kinds.contains(&kind)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Rejects an empty law or fixture selection and a preview limit below
    /// [`MIN_VALUE_PREVIEW_LIMIT`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.laws.is_empty() {
            return Err(ConfigError::NoLaws);
        }
        if self.fixture_kinds.is_empty() {
            return Err(ConfigError::NoFixtures);
        }
        if self.value_preview_limit < MIN_VALUE_PREVIEW_LIMIT {
            return Err(ConfigError::PreviewLimitTooSmall(self.value_preview_limit));
        }
        Ok(())
    }

    /// Defaults layered with `COMONAD_LAWS_*` environment variables, then
    /// validated.
    ///
    /// # Errors
    ///
    /// Fails on an unknown `COMONAD_LAWS_*` variable, an unparsable value, or
    /// a configuration that does not validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let overrides: BTreeMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect();
        let mut config = Self::new();
        config.apply_overrides(&overrides)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `COMONAD_LAWS_*` style overrides.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown key or unparsable value; overrides applied
    /// before it are kept.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) -> Result<(), ConfigError> {
        for (key, value) in overrides {
            self.apply_override(key, value)?;
            tracing::debug!(key = %key, value = %value, "applied config override");
        }
        Ok(())
    }

    fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "COMONAD_LAWS_LAWS" => self.laws = parse_list(value, key)?,
            "COMONAD_LAWS_FIXTURES" => self.fixture_kinds = parse_list(value, key)?,
            "COMONAD_LAWS_FAIL_FAST" => self.fail_fast = parse_bool(value, key)?,
            "COMONAD_LAWS_VALUE_PREVIEW_LIMIT" => {
                self.value_preview_limit = parse_usize(value, key)?;
            }
            _ => return Err(ConfigError::InvalidOverride(key.to_string())),
        }
        Ok(())
    }
}

/// Errors from loading or validating a [`HarnessConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A value could not be parsed for its key.
    #[error("config parse error: {key}={value:?}: {reason}")]
    Parse {
        /// The override key.
        key: String,
        /// The offending value.
        value: String,
        /// What was wrong with it.
        reason: String,
    },
    /// The override key is not recognized.
    #[error("invalid override: {0}")]
    InvalidOverride(String),
    /// No law selected.
    #[error("at least one law must be selected")]
    NoLaws,
    /// No fixture kind selected.
    #[error("at least one fixture kind must be selected")]
    NoFixtures,
    /// Preview limit below the minimum.
    #[error("value_preview_limit must be >= {min}, got {0}", min = MIN_VALUE_PREVIEW_LIMIT)]
    PreviewLimitTooSmall(usize),
}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        Self::config(e.to_string()).with_source(e)
    }
}

fn parse_error(key: &str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Parse {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_list<T>(value: &str, key: &str) -> Result<Vec<T>, ConfigError>
where
    T: FromStr + PartialEq,
    T::Err: ToString,
{
    let mut items = Vec::new();
    for part in value.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let item = part.parse::<T>().map_err(|e| parse_error(key, value, e))?;
        if !items.contains(&item) {
            items.push(item);
        }
    }
    Ok(items)
}

fn parse_bool(value: &str, key: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(parse_error(key, value, "expected true/false/1/0/yes/no")),
    }
}

fn parse_usize(value: &str, key: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| parse_error(key, value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_cover_everything() {
        let config = HarnessConfig::default();
        assert_eq!(config.laws, Law::ALL.to_vec());
        assert_eq!(config.fixture_kinds, FixtureKind::ALL.to_vec());
        assert!(!config.fail_fast);
        assert_eq!(config.value_preview_limit, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_parse_each_field() {
        let mut config = HarnessConfig::new();
        config
            .apply_overrides(&overrides(&[
                ("COMONAD_LAWS_LAWS", "law3, left_identity,law3"),
                ("COMONAD_LAWS_FIXTURES", "empty,error"),
                ("COMONAD_LAWS_FAIL_FAST", "yes"),
                ("COMONAD_LAWS_VALUE_PREVIEW_LIMIT", "32"),
            ]))
            .expect("overrides apply");
        assert_eq!(config.laws, vec![Law::Associativity, Law::LeftIdentity]);
        assert_eq!(
            config.fixture_kinds,
            vec![FixtureKind::Empty, FixtureKind::Error]
        );
        assert!(config.fail_fast);
        assert_eq!(config.value_preview_limit, 32);
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut config = HarnessConfig::new();
        let err = config
            .apply_overrides(&overrides(&[("COMONAD_LAWS_FAIL_FAST", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref key, .. } if key == "COMONAD_LAWS_FAIL_FAST"));

        let err = config
            .apply_overrides(&overrides(&[("COMONAD_LAWS_LAWS", "law4")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = config
            .apply_overrides(&overrides(&[("COMONAD_LAWS_VALUE_PREVIEW_LIMIT", "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = HarnessConfig::new();
        let err = config
            .apply_overrides(&overrides(&[("COMONAD_LAWS_SEED", "1")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidOverride("COMONAD_LAWS_SEED".to_string()));
    }

    #[test]
    fn validation_rejects_empty_selections() {
        assert_eq!(
            HarnessConfig::new().laws([]).validate(),
            Err(ConfigError::NoLaws)
        );
        assert_eq!(
            HarnessConfig::new().fixture_kinds([]).validate(),
            Err(ConfigError::NoFixtures)
        );
        assert_eq!(
            HarnessConfig::new().value_preview_limit(4).validate(),
            Err(ConfigError::PreviewLimitTooSmall(4))
        );
    }

    #[test]
    fn empty_list_override_fails_validation() {
        let mut config = HarnessConfig::new();
        config
            .apply_overrides(&overrides(&[("COMONAD_LAWS_FIXTURES", " , ")]))
            .expect("parses");
        assert_eq!(config.validate(), Err(ConfigError::NoFixtures));
    }

    #[test]
    fn converts_into_crate_error() {
        let err: crate::error::Error = ConfigError::NoLaws.into();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
        assert_eq!(err.message(), Some("at least one law must be selected"));
    }
}
