/// Where fatal diagnostics go, and how the run ends afterwards.
///
/// The must-succeed flag constructors and [`FlagParser::parse`](crate::FlagParser::parse) end in a `FatalReporter`.
/// Swap the [`ConsoleReporter`] for another implementation when embedding `argflags` somewhere that must not exit the process.
pub trait FatalReporter {
    /// Write a diagnostic line.
    fn report(&self, message: String);

    /// End the run with the exit `code`.
    fn terminate(&self, code: i32) -> !;
}

/// Reports to stderr and exits the process.
#[derive(Debug, Default)]
pub struct ConsoleReporter {}

impl FatalReporter for ConsoleReporter {
    fn report(&self, message: String) {
        eprintln!("{message}");
    }

    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code);
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub use util::InMemoryReporter;

#[cfg(any(test, feature = "unit_test"))]
mod util {
    use super::FatalReporter;
    use std::cell::RefCell;

    /// Records diagnostics in memory, and panics instead of exiting.
    ///
    /// Wrap the call in [`std::panic::catch_unwind`] (or use `#[should_panic]`) to observe the termination.
    #[derive(Debug, Default)]
    pub struct InMemoryReporter {
        messages: RefCell<Vec<String>>,
    }

    impl InMemoryReporter {
        /// The diagnostics reported so far.
        pub fn messages(&self) -> Vec<String> {
            self.messages.borrow().clone()
        }

        /// Take the reporter apart, yielding its diagnostics.
        pub fn consume(self) -> Vec<String> {
            self.messages.into_inner()
        }
    }

    impl FatalReporter for InMemoryReporter {
        fn report(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }

        fn terminate(&self, code: i32) -> ! {
            panic!("terminated with code {code}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn in_memory_report() {
        let reporter = InMemoryReporter::default();
        reporter.report("abc".to_string());
        reporter.report("123".to_string());
        assert_eq!(reporter.messages(), vec!["abc", "123"]);
        assert_eq!(reporter.consume(), vec!["abc", "123"]);
    }

    #[test]
    #[should_panic(expected = "terminated with code 3")]
    fn in_memory_terminate() {
        InMemoryReporter::default().terminate(3);
    }

    #[test]
    fn in_memory_terminate_keeps_messages() {
        let reporter = InMemoryReporter::default();

        let result = catch_unwind(AssertUnwindSafe(|| {
            reporter.report("before".to_string());
            reporter.terminate(1);
        }));

        assert!(result.is_err());
        assert_eq!(reporter.consume(), vec!["before"]);
    }
}
