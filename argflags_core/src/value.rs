use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

use crate::model::FlagKind;

/// Behaviour of a typed flag value: render to text (via [`std::fmt::Display`]) and update from text.
///
/// A value always reflects the last token it successfully `set`.
/// When `set` fails the value must be discarded; the flag constructors never hand out such a value.
pub trait FlagValue: std::fmt::Display {
    /// Parse `token` into this value.
    fn set(&mut self, token: &str) -> Result<(), InvalidValue>;

    /// The kind of this value.
    fn kind(&self) -> FlagKind;
}

/// A token that cannot be parsed into a [`FlagValue`].
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum InvalidValue {
    /// The token is not a base-10 signed integer.
    #[error("cannot convert '{token}' to integer.")]
    Integer {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// The token is not a boolean literal.
    #[error("cannot convert '{token}' to boolean.")]
    Boolean { token: String },
}

/// A base-10 signed integer flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntegerValue(i64);

impl IntegerValue {
    /// The integer held by this value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FlagValue for IntegerValue {
    fn set(&mut self, token: &str) -> Result<(), InvalidValue> {
        let value = i64::from_str(token).map_err(|source| InvalidValue::Integer {
            token: token.to_string(),
            source,
        })?;
        self.0 = value;
        Ok(())
    }

    fn kind(&self) -> FlagKind {
        FlagKind::Integer
    }
}

impl std::fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A boolean flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanValue(bool);

impl BooleanValue {
    /// The boolean held by this value.
    pub fn get(&self) -> bool {
        self.0
    }
}

impl FlagValue for BooleanValue {
    fn set(&mut self, token: &str) -> Result<(), InvalidValue> {
        self.0 = parse_bool(token).ok_or_else(|| InvalidValue::Boolean {
            token: token.to_string(),
        })?;
        Ok(())
    }

    fn kind(&self) -> FlagKind {
        FlagKind::Boolean
    }
}

impl std::fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A verbatim text flag value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StringValue(String);

impl StringValue {
    /// The text held by this value.
    pub fn get(&self) -> &str {
        &self.0
    }
}

impl FlagValue for StringValue {
    fn set(&mut self, token: &str) -> Result<(), InvalidValue> {
        self.0 = token.to_string();
        Ok(())
    }

    fn kind(&self) -> FlagKind {
        FlagKind::String
    }
}

impl std::fmt::Display for StringValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value held by a [`Flag`](crate::Flag), one variant per [`FlagKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Value {
    Integer(IntegerValue),
    Boolean(BooleanValue),
    String(StringValue),
}

impl Value {
    pub(crate) fn from_token<V>(token: &str) -> Result<Self, InvalidValue>
    where
        V: FlagValue + Default + Into<Value>,
    {
        let mut value = V::default();
        value.set(token)?;
        Ok(value.into())
    }

    /// The kind of this value.
    pub fn kind(&self) -> FlagKind {
        self.as_flag_value().kind()
    }

    /// The integer, if this is an `Integer` value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(value.get()),
            _ => None,
        }
    }

    /// The boolean, if this is a `Boolean` value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(value.get()),
            _ => None,
        }
    }

    /// The text, if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.get()),
            _ => None,
        }
    }

    fn as_flag_value(&self) -> &dyn FlagValue {
        match self {
            Value::Integer(value) => value,
            Value::Boolean(value) => value,
            Value::String(value) => value,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_flag_value())
    }
}

impl From<IntegerValue> for Value {
    fn from(value: IntegerValue) -> Self {
        Value::Integer(value)
    }
}

impl From<BooleanValue> for Value {
    fn from(value: BooleanValue) -> Self {
        Value::Boolean(value)
    }
}

impl From<StringValue> for Value {
    fn from(value: StringValue) -> Self {
        Value::String(value)
    }
}

pub(crate) fn parse_bool(token: &str) -> Option<bool> {
    if token == "1" || token.eq_ignore_ascii_case("t") || token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token == "0"
        || token.eq_ignore_ascii_case("f")
        || token.eq_ignore_ascii_case("false")
    {
        Some(false)
    } else {
        None
    }
}
