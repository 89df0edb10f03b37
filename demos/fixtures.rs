use argflags::{FatalReporter, Flag, Flags};

// Collects the failure into a panic, instead of exiting the process.
struct PanicReporter;

impl FatalReporter for PanicReporter {
    fn report(&self, message: String) {
        eprintln!("fixture error: {message}");
    }

    fn terminate(&self, code: i32) -> ! {
        panic!("fixture construction failed (code {code})");
    }
}

fn defaults() -> Flags {
    [
        Flag::must_integer_with("w", "4", &PanicReporter),
        Flag::must_boolean_with("parallel", "false", &PanicReporter),
        Flag::must_string_with("name", "worker", &PanicReporter),
    ]
    .into_iter()
    .collect()
}

fn main() {
    for flag in &defaults() {
        println!("{flag}");
    }

    // Exits the process (code 1) with: key "w", value "four": flag "w": cannot convert 'four' to integer: ...
    Flag::must_integer("w", "four");
}
