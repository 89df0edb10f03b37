use thiserror::Error;

use crate::interface::{ConsoleReporter, FatalReporter};
use crate::model::FlagKind;
use crate::value::{BooleanValue, IntegerValue, InvalidValue, StringValue, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A failure to construct a [`Flag`].
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FlagError {
    /// The key is empty, or still carries a leading `-`.
    #[error("flag key '{key}' must be non-empty and must not begin with '-'.")]
    InvalidKey { key: String },
    /// The value token cannot convert to the flag's kind.
    #[error("flag {key:?}: {source}")]
    InvalidValue {
        key: String,
        value: String,
        #[source]
        source: InvalidValue,
    },
}

/// A key paired with a typed value.
///
/// Flags are only built through the validating constructors, and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag {
    key: String,
    value: Value,
}

impl Flag {
    /// Create a flag of `kind` by parsing `token`.
    pub fn new(kind: FlagKind, key: impl Into<String>, token: &str) -> Result<Self, FlagError> {
        let key = key.into();

        match kind {
            FlagKind::Integer => Self::build::<IntegerValue>(key, token),
            FlagKind::Boolean => Self::build::<BooleanValue>(key, token),
            FlagKind::String => Self::build::<StringValue>(key, token),
        }
    }

    /// Create an integer flag.
    pub fn integer(key: impl Into<String>, token: &str) -> Result<Self, FlagError> {
        Self::new(FlagKind::Integer, key, token)
    }

    /// Create a boolean flag.
    pub fn boolean(key: impl Into<String>, token: &str) -> Result<Self, FlagError> {
        Self::new(FlagKind::Boolean, key, token)
    }

    /// Create a string flag.
    pub fn string(key: impl Into<String>, token: &str) -> Result<Self, FlagError> {
        Self::new(FlagKind::String, key, token)
    }

    fn build<V>(key: String, token: &str) -> Result<Self, FlagError>
    where
        V: crate::value::FlagValue + Default + Into<Value>,
    {
        if key.is_empty() || key.starts_with('-') {
            return Err(FlagError::InvalidKey { key });
        }

        match Value::from_token::<V>(token) {
            Ok(value) => Ok(Self { key, value }),
            Err(source) => Err(FlagError::InvalidValue {
                key,
                value: token.to_string(),
                source,
            }),
        }
    }

    /// Create a flag of `kind`, or report to `reporter` and terminate.
    ///
    /// The diagnostic takes the form `key "<key>", value "<token>": <error>`.
    /// Only use this for trusted inputs (ex: literals in fixtures), where a failure is a programming error.
    pub fn must(
        kind: FlagKind,
        key: impl Into<String>,
        token: &str,
        reporter: &(impl FatalReporter + ?Sized),
    ) -> Self {
        let key = key.into();

        match Self::new(kind, key.clone(), token) {
            Ok(flag) => flag,
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Must-succeed {kind} flag '{key}' failed: {error}");
                }

                reporter.report(format!("key {key:?}, value {token:?}: {error}"));
                reporter.terminate(1)
            }
        }
    }

    /// Create an integer flag, or print the error and exit the process.
    pub fn must_integer(key: impl Into<String>, token: &str) -> Self {
        Self::must(FlagKind::Integer, key, token, &ConsoleReporter::default())
    }

    /// Create a boolean flag, or print the error and exit the process.
    pub fn must_boolean(key: impl Into<String>, token: &str) -> Self {
        Self::must(FlagKind::Boolean, key, token, &ConsoleReporter::default())
    }

    /// Create a string flag, or print the error and exit the process.
    pub fn must_string(key: impl Into<String>, token: &str) -> Self {
        Self::must(FlagKind::String, key, token, &ConsoleReporter::default())
    }

    /// Create an integer flag, or report to `reporter` and terminate.
    pub fn must_integer_with(
        key: impl Into<String>,
        token: &str,
        reporter: &(impl FatalReporter + ?Sized),
    ) -> Self {
        Self::must(FlagKind::Integer, key, token, reporter)
    }

    /// Create a boolean flag, or report to `reporter` and terminate.
    pub fn must_boolean_with(
        key: impl Into<String>,
        token: &str,
        reporter: &(impl FatalReporter + ?Sized),
    ) -> Self {
        Self::must(FlagKind::Boolean, key, token, reporter)
    }

    /// Create a string flag, or report to `reporter` and terminate.
    pub fn must_string_with(
        key: impl Into<String>,
        token: &str,
        reporter: &(impl FatalReporter + ?Sized),
    ) -> Self {
        Self::must(FlagKind::String, key, token, reporter)
    }

    /// The key (without leading dashes).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The typed value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The kind of the value.
    pub fn kind(&self) -> FlagKind {
        self.value.kind()
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
