use std::env;

use crate::collection::Flags;
use crate::interface::{ConsoleReporter, FatalReporter};
use crate::model::NegativeNumbers;
use crate::tokens::KeyMatcher;

mod base;
mod printer;

pub use base::ParseError;
pub(crate) use base::Scanner;
pub(crate) use printer::ErrorContext;

/// The configured flag parser.
///
/// `FlagParser::default()` applies the plain rules: negative numbers are values, and `--` is not special.
pub struct FlagParser {
    negative_numbers: NegativeNumbers,
    terminator: bool,
    reporter: Box<dyn FatalReporter>,
}

impl std::fmt::Debug for FlagParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagParser")
            .field("negative_numbers", &self.negative_numbers)
            .field("terminator", &self.terminator)
            .finish()
    }
}

impl Default for FlagParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagParser {
    /// Create a flag parser that reports to the console.
    pub fn new() -> Self {
        Self {
            negative_numbers: NegativeNumbers::default(),
            terminator: false,
            reporter: Box::new(ConsoleReporter::default()),
        }
    }

    /// Set how tokens such as `-5` are classified.
    pub fn negative_numbers(mut self, negative_numbers: NegativeNumbers) -> Self {
        self.negative_numbers = negative_numbers;
        self
    }

    /// Stop scanning at the first `--` token (after the program name).
    /// The tokens after it are available from [`Flags::remaining`].
    pub fn terminator(mut self, enabled: bool) -> Self {
        self.terminator = enabled;
        self
    }

    /// Replace the reporter used by [`FlagParser::parse`].
    pub fn reporter(mut self, reporter: Box<dyn FatalReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Parse the input tokens into flags.
    ///
    /// Index 0 is the program name: it is never consumed as a value.
    /// Passing tokens without the program name makes the first real token a key-only position.
    ///
    /// Each key token takes the token following it as its value, inferred as integer, then boolean, then string.
    /// A key followed by another key (or by nothing) becomes a boolean `true` presence flag.
    /// Tokens that neither are keys nor follow a key are ignored.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Flags, ParseError> {
        Scanner::new(KeyMatcher::new(self.negative_numbers), self.terminator).scan(tokens)
    }

    /// Parse the Cli [`env::args`] into flags.
    ///
    /// If parsing fails, the error is reported and the reporter terminates (by default: exit with code `1`).
    pub fn parse(self) -> Flags {
        let command_input: Vec<String> = env::args().collect();
        let tokens = command_input
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>();
        let result = self.parse_tokens(tokens.as_slice());
        self.unwrap_or_terminate(result, tokens.as_slice())
    }

    fn unwrap_or_terminate(&self, result: Result<Flags, ParseError>, tokens: &[&str]) -> Flags {
        match result {
            Ok(flags) => flags,
            Err(error) => {
                let error_context = ErrorContext::new(error.offset(), tokens);
                self.reporter.report(error.to_string());
                self.reporter.report(error_context.to_string());
                self.reporter.terminate(1)
            }
        }
    }
}

/// Parse the input tokens with the default [`FlagParser`].
pub fn parse_flags(tokens: &[&str]) -> Result<Flags, ParseError> {
    FlagParser::default().parse_tokens(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::{Flag, FlagError};
    use crate::interface::InMemoryReporter;
    use crate::model::FlagKind;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    // Lets the test keep hold of the reporter after boxing it into the parser.
    struct SharedReporter(Rc<InMemoryReporter>);

    impl FatalReporter for SharedReporter {
        fn report(&self, message: String) {
            self.0.report(message);
        }

        fn terminate(&self, code: i32) -> ! {
            self.0.terminate(code)
        }
    }

    #[test]
    fn parse_flags_empty() {
        let flags = parse_flags(&[]).unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn parse_flags_mixed() {
        let flags = parse_flags(&["prog", "--all", "-w", "12", "--parallel", "true"]).unwrap();
        let expected: Flags = [
            Flag::must_boolean("all", "true"),
            Flag::must_integer("w", "12"),
            Flag::must_boolean("parallel", "true"),
        ]
        .into_iter()
        .collect();
        assert_eq!(flags, expected);
    }

    #[rstest]
    #[case(NegativeNumbers::AsValue, vec![("n", FlagKind::Integer)])]
    #[case(NegativeNumbers::AsKey, vec![("n", FlagKind::Boolean), ("5", FlagKind::Boolean)])]
    fn parse_tokens_negative_numbers(
        #[case] negative_numbers: NegativeNumbers,
        #[case] expected: Vec<(&str, FlagKind)>,
    ) {
        let parser = FlagParser::new().negative_numbers(negative_numbers);
        let flags = parser.parse_tokens(&["prog", "-n", "-5"]).unwrap();
        let actual: Vec<(&str, FlagKind)> =
            flags.iter().map(|flag| (flag.key(), flag.kind())).collect();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case(false, 2, 0)]
    #[case(true, 1, 2)]
    fn parse_tokens_terminator(
        #[case] enabled: bool,
        #[case] flag_count: usize,
        #[case] remaining_count: usize,
    ) {
        let parser = FlagParser::new().terminator(enabled);
        let flags = parser
            .parse_tokens(&["prog", "--all", "--", "--rest", "x"])
            .unwrap();
        assert_eq!(flags.len(), flag_count);
        assert_eq!(flags.remaining().len(), remaining_count);
    }

    #[test]
    fn parse_tokens_terminator_disabled_value() {
        let flags = FlagParser::new()
            .parse_tokens(&["prog", "--sep", "--", "--rest", "x"])
            .unwrap();
        assert_eq!(flags.string("sep"), Some("--"));
        assert_eq!(flags.string("rest"), Some("x"));
    }

    #[test]
    fn unwrap_or_terminate_ok() {
        let reporter = Rc::new(InMemoryReporter::default());
        let parser = FlagParser::new().reporter(Box::new(SharedReporter(reporter.clone())));
        let tokens = ["prog", "-w", "1"];

        let flags = parser.unwrap_or_terminate(parser.parse_tokens(&tokens), &tokens);

        assert_eq!(flags.integer("w"), Some(1));
        assert!(reporter.messages().is_empty());
    }

    #[test]
    fn unwrap_or_terminate_error() {
        let reporter = Rc::new(InMemoryReporter::default());
        let parser = FlagParser::new().reporter(Box::new(SharedReporter(reporter.clone())));
        let tokens = ["prog", "-w", "x"];
        let error = ParseError::new(
            2,
            FlagError::InvalidKey {
                key: "".to_string(),
            },
        );

        let result = catch_unwind(AssertUnwindSafe(|| {
            parser.unwrap_or_terminate(Err(error), &tokens)
        }));

        assert!(result.is_err());
        let messages = reporter.messages();
        assert_eq!(messages.len(), 2);
        assert_contains!(messages[0], "Parse error");
        assert_eq!(messages[1], "prog -w x\n        ^");
    }

    #[test]
    fn debug() {
        let parser = FlagParser::new().terminator(true);
        assert_contains!(format!("{parser:?}"), "terminator: true");
    }
}
