//! `argflags` is a schema-less command line flag parser for Rust.
//!
//! Most command line parsers ask you to declare every option up front.
//! `argflags` does not: it reads whatever `-key value` pairs are present, and infers each value's type from its text.
//! This fits small tools, scripts, and test harnesses, where declaring a parser costs more than the parsing itself.
//!
//! # Usage
//! ```
//! use argflags::{parse_flags, FlagKind};
//!
//! let flags = parse_flags(&["prog", "--all", "-w", "12", "--parallel", "true"]).unwrap();
//! assert_eq!(flags.len(), 3);
//! assert_eq!(flags.boolean("all"), Some(true));
//! assert_eq!(flags.integer("w"), Some(12));
//! assert_eq!(flags.get("parallel").unwrap().kind(), FlagKind::Boolean);
//! ```
//!
//! Or straight from [`std::env::args`]:
//! ```no_run
#![doc = include_str!("../demos/inspect.rs")]
//! ```
//!
//! # Cli Semantics
//! * A key token is `-KEY` or `--KEY`; both syntaxes share one key space.
//! The key must not begin with `-`, so `-`, `--`, and `---x` are plain values.
//! * The token at index 0 is the program name.
//! It is never consumed as a value (though, like any token, it is checked for being a key).
//! * A key takes the next token as its value, unless that token is itself a key.
//! * The value type is inferred in order: [`FlagKind::Integer`] (base-10 `i64`), then [`FlagKind::Boolean`]
//! (`true`/`false`/`t`/`f` in any case, `1`/`0`), falling back to [`FlagKind::String`].
//! So `1` is an integer, while `true` is a boolean.
//! * A key followed by another key, or by nothing, is a *presence flag*: boolean `true`.
//! * Tokens that neither are keys nor follow a key are ignored.
//! * Repeated keys are all kept, in order. [`Flags::get`] is last-wins; [`Flags::get_all`] returns every occurrence.
//!
//! ```console
//! $ inspect --all -w 12 --name demo -n -5 --verbose
//! all       boolean  true
//! w         integer  12
//! name      string   demo
//! n         integer  -5
//! verbose   boolean  true
//! ```
//!
//! ### Negative numbers
//! By default, a single `-` followed by a digit (ex: `-5`, `-0.5`) is a value, so `-n -5` gives `n = -5`.
//! Use [`NegativeNumbers::AsKey`] to treat such tokens as keys instead.
//!
//! ### Terminator
//! [`FlagParser::terminator`] stops scanning at the first `--`.
//! The tokens after it are kept verbatim in [`Flags::remaining`].
//!
//! # Errors
//! Parsing itself cannot fail on well-formed input, since a value is only built as the type it was inferred as.
//! Errors surface from the flag constructors: [`Flag::integer`] and friends return a [`FlagError`] naming the key, the value, and the cause.
//!
//! The must-succeed constructors ([`Flag::must_integer`] and friends) are for trusted literals such as fixtures.
//! On failure they print `key "<key>", value "<value>": <error>` and exit.
//! Their `_with` variants take a [`FatalReporter`], so a library or test may handle the failure without exiting:
//! ```no_run
#![doc = include_str!("../demos/fixtures.rs")]
//! ```
//!
//! # Features
//! * `unit_test`: Exports [`InMemoryReporter`](./struct.InMemoryReporter.html), a reporter which records diagnostics and panics instead of exiting.
//! * `tracing_debug`: Emits `tracing` debug events for each classification decision.
pub use argflags_core::*;
