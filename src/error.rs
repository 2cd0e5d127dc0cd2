//! Error types for containers and the law harness.
//!
//! Every failure a container can raise while being extended, extracted or
//! materialized is an [`Error`]: a typed [`ErrorKind`], an optional
//! human-readable message, and an optional wrapped source.
//!
//! # Failure identity
//!
//! The equivalence oracle treats two failures as the same failure when their
//! kind and message match exactly. The wrapped source is diagnostic only and
//! never takes part in that comparison; see [`Error::same_failure`].
//!
//! # Error Categories
//!
//! - **Source**: raised by a container or by a user function applied to one
//!   (no element, null element, bad parse, injected failures)
//! - **Harness**: configuration problems
//! - **User**: caller-defined failures

use core::fmt;
use std::num::ParseIntError;
use std::sync::Arc;

use serde::Serialize;

/// The kind of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    // === Source ===
    /// The container holds no element to extract.
    EmptySource,
    /// An element was present but null.
    NullValue,
    /// An element could not be parsed into the requested type.
    Parse,
    /// The operation is not valid in the container's current state.
    InvalidOperation,
    /// The operation is not supported by this container.
    NotSupported,

    // === Harness ===
    /// Configuration error (invalid env var, empty selection, ...).
    Config,

    // === User ===
    /// User-provided error.
    User,
}

impl ErrorKind {
    /// Returns the error category for this kind.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySource
            | Self::NullValue
            | Self::Parse
            | Self::InvalidOperation
            | Self::NotSupported => ErrorCategory::Source,
            Self::Config => ErrorCategory::Harness,
            Self::User => ErrorCategory::User,
        }
    }

    /// Stable snake_case name, as used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptySource => "empty_source",
            Self::NullValue => "null_value",
            Self::Parse => "parse",
            Self::InvalidOperation => "invalid_operation",
            Self::NotSupported => "not_supported",
            Self::Config => "config",
            Self::User => "user",
        }
    }
}

/// High-level error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Raised by a container or a function over one.
    Source,
    /// Raised by the harness itself.
    Harness,
    /// User-originated errors.
    User,
}

/// The main error type for container operations.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Adds a message description to the error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Adds a source error to the chain.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns true when `other` is the same failure: same kind and same
    /// message. Sources are ignored.
    #[must_use]
    pub fn same_failure(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }

    /// Creates the error raised when a container has no element to extract.
    #[must_use]
    pub fn empty_source() -> Self {
        Self::new(ErrorKind::EmptySource).with_message("sequence contains no elements")
    }

    /// Creates the error raised when a null element is consumed.
    #[must_use]
    pub fn null_value(parameter: &str) -> Self {
        Self::new(ErrorKind::NullValue)
            .with_message(format!("value cannot be null (parameter '{parameter}')"))
    }

    /// Creates an invalid operation error.
    #[must_use]
    pub fn invalid_operation(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOperation).with_message(detail)
    }

    /// Creates a not supported error.
    #[must_use]
    pub fn not_supported(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotSupported).with_message(detail)
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config).with_message(detail)
    }

    /// Creates a user error.
    #[must_use]
    pub fn user(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::User).with_message(detail)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(msg) = &self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Self {
        Self::new(ErrorKind::Parse)
            .with_message(e.to_string())
            .with_source(e)
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Attach a context message on error.
    fn context(self, msg: impl Into<String>) -> Result<T>;
    /// Attach context message computed lazily on error.
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_message(msg))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| e.into().with_message(f()))
    }
}

/// A specialized Result type for container operations.
pub type Result<T> = core::result::Result<T, Error>;
