//! Core module for `argflags`.
//! See [documentation root](https://docs.rs/argflags/latest/argflags/index.html) for full details.
#![deny(missing_docs)]
mod collection;
mod flag;
mod interface;
mod model;
mod parser;
mod tokens;
mod value;

pub use collection::Flags;
pub use flag::{Flag, FlagError};
#[cfg(any(test, feature = "unit_test"))]
pub use interface::InMemoryReporter;
pub use interface::{ConsoleReporter, FatalReporter};
pub use model::*;
pub use parser::{parse_flags, FlagParser, ParseError};
pub use tokens::{infer_kind, KeyMatcher};
pub use value::{BooleanValue, FlagValue, IntegerValue, InvalidValue, StringValue, Value};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
