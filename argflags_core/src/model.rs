/// The value type inferred for a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// A base-10 signed integer (`i64`).
    Integer,
    /// A boolean literal: `true`/`false`/`t`/`f` (any case), or `1`/`0`.
    Boolean,
    /// Any other text, stored verbatim.
    String,
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagKind::Integer => write!(f, "integer"),
            FlagKind::Boolean => write!(f, "boolean"),
            FlagKind::String => write!(f, "string"),
        }
    }
}

/// How a single-dash token that begins with a digit (ex: `-5`) is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeNumbers {
    /// `-5` is a value token, so `-n -5` yields `n = -5`.
    #[default]
    AsValue,
    /// `-5` is the flag key `5`.
    AsKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FlagKind::Integer, "integer")]
    #[case(FlagKind::Boolean, "boolean")]
    #[case(FlagKind::String, "string")]
    fn flag_kind_display(#[case] kind: FlagKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn negative_numbers_default() {
        assert_eq!(NegativeNumbers::default(), NegativeNumbers::AsValue);
    }
}
