use thiserror::Error;

use crate::collection::Flags;
use crate::flag::{Flag, FlagError};
use crate::tokens::{infer_kind, KeyMatcher};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// The value synthesized for a key with no explicit value (a presence flag).
const PRESENCE: &str = "true";
const TERMINATOR: &str = "--";

/// A failure to build a flag during parsing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {source}")]
pub struct ParseError {
    offset: usize,
    #[source]
    source: FlagError,
}

impl ParseError {
    pub(crate) fn new(offset: usize, source: FlagError) -> Self {
        Self { offset, source }
    }

    /// The index of the token at which parsing failed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The underlying flag construction error.
    pub fn flag_error(&self) -> &FlagError {
        &self.source
    }
}

#[derive(Debug)]
pub(crate) struct Scanner {
    matcher: KeyMatcher,
    terminator: bool,
}

impl Scanner {
    pub(crate) fn new(matcher: KeyMatcher, terminator: bool) -> Self {
        Self {
            matcher,
            terminator,
        }
    }

    /// Scan the tokens pairwise, looking back from each token to the one before it.
    /// Index 0 (the program name) is never consumed as a value, but may still act as a key.
    pub(crate) fn scan(&self, tokens: &[&str]) -> Result<Flags, ParseError> {
        let (scanned, remaining) = self.split(tokens);
        let mut flags = Flags::default();

        for (index, pair) in scanned.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);

            if let Some(key) = self.matcher.key(previous) {
                let offset = index + 1;
                let flag = if self.matcher.is_key(current) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Key '{key}' is followed by key token '{current}'.  Synthesizing presence flag.");
                    }

                    Flag::boolean(key, PRESENCE)
                } else {
                    let kind = infer_kind(current);
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Key '{key}' takes value '{current}' as {kind}.");
                    }

                    Flag::new(kind, key, current)
                };
                flags.push(flag.map_err(|source| ParseError::new(offset, source))?);
            }
        }

        // A trailing key was never followed by a value.
        if let Some((offset, last)) = scanned.iter().enumerate().last() {
            if let Some(key) = self.matcher.key(last) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Trailing key '{key}'.  Synthesizing presence flag.");
                }

                let flag = Flag::boolean(key, PRESENCE)
                    .map_err(|source| ParseError::new(offset, source))?;
                flags.push(flag);
            }
        }

        Ok(flags.with_remaining(remaining))
    }

    fn split<'a, 't>(&self, tokens: &'a [&'t str]) -> (&'a [&'t str], Vec<String>) {
        if self.terminator {
            // Index 0 is the program name, so it never terminates.
            if let Some(position) = tokens.iter().skip(1).position(|token| *token == TERMINATOR) {
                let at = position + 1;
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Terminator found at offset {at}.");
                }

                let remaining = tokens[at + 1..].iter().map(|s| s.to_string()).collect();
                return (&tokens[..at], remaining);
            }
        }

        (tokens, Vec::default())
    }
}
