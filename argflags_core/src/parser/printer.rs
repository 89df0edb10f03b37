/// Renders the Cli tokens with a `^` under the token at `offset`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let column = if self.offset < self.tokens.len() {
            // Each preceding token contributes its length plus one space.
            self.tokens[..self.offset]
                .iter()
                .map(|token| token.chars().count() + 1)
                .sum::<usize>()
        } else {
            projection.chars().count()
        };

        write!(f, "{projection}\n{:column$}^", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![], "\n^")]
    #[case(3, vec![], "\n^")]
    #[case(0, vec!["abc"], "abc\n^")]
    #[case(1, vec!["abc"], "abc\n   ^")]
    #[case(0, vec!["abc", "123"], "abc 123\n^")]
    #[case(1, vec!["abc", "123"], "abc 123\n    ^")]
    #[case(2, vec!["abc", "123"], "abc 123\n       ^")]
    #[case(2, vec!["prog", "-w", "x"], "prog -w x\n        ^")]
    #[case(2, vec!["prög", "-ñ", "x"], "prög -ñ x\n        ^")]
    #[case(3, vec!["prög", "-ñ"], "prög -ñ\n       ^")]
    fn error_context(#[case] offset: usize, #[case] tokens: Vec<&str>, #[case] expected: &str) {
        assert_eq!(ErrorContext::new(offset, &tokens).to_string(), expected);
    }
}
