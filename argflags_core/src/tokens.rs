use std::str::FromStr;

use crate::model::{FlagKind, NegativeNumbers};
use crate::value::parse_bool;

/// Classifies Cli tokens as flag keys or values.
///
/// A key token is one or two leading `-` followed by the key, which must not itself begin with `-`:
/// * `-w` and `--w` both capture the key `w`.
/// * `--dry-run` captures `dry-run`.
/// * `-`, `--`, and `---x` are value tokens.
///
/// Under [`NegativeNumbers::AsValue`], a single `-` followed by a digit (ex: `-5`, `-0.5`) is a value token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyMatcher {
    negative_numbers: NegativeNumbers,
}

impl KeyMatcher {
    /// Create a key matcher with the given negative number policy.
    pub fn new(negative_numbers: NegativeNumbers) -> Self {
        Self { negative_numbers }
    }

    /// The captured key of `token`, or `None` when `token` is a value token.
    pub fn key<'t>(&self, token: &'t str) -> Option<&'t str> {
        let (dashes, key) = match token.strip_prefix("--") {
            Some(key) => (2, key),
            None => (1, token.strip_prefix('-')?),
        };

        match key.chars().next() {
            None | Some('-') => None,
            Some(_)
                if dashes == 1
                    && self.negative_numbers == NegativeNumbers::AsValue
                    && starts_numeric(key) =>
            {
                None
            }
            Some(_) => Some(key),
        }
    }

    /// Whether `token` is a key token.
    pub fn is_key(&self, token: &str) -> bool {
        self.key(token).is_some()
    }
}

fn starts_numeric(key: &str) -> bool {
    let digits = key.strip_prefix('.').unwrap_or(key);
    digits.starts_with(|c: char| c.is_ascii_digit())
}

/// Infer the kind of a value token.
///
/// Integer is tried first, then boolean, falling back to string.
/// So `1` is an integer (not a boolean), while `true` is a boolean.
pub fn infer_kind(token: &str) -> FlagKind {
    if i64::from_str(token).is_ok() {
        FlagKind::Integer
    } else if parse_bool(token).is_some() {
        FlagKind::Boolean
    } else {
        FlagKind::String
    }
}
