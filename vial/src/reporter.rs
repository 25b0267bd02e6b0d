//! Failure reporting
//!
//! Assertions never panic on their own. They hand a finished message to a
//! [`Reporter`], which decides what a failure means: collect it, print it,
//! or fail the surrounding test.

/// The capability an assertion needs from the test harness
pub trait Reporter {
    /// Record a fully formatted failure message
    fn record_failure(&mut self, message: &str);

    /// Called at the start of every assertion
    ///
    /// Harnesses that attribute failures to source lines themselves can use
    /// this to skip the assertion's frame. The default does nothing.
    fn mark_helper(&mut self) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn record_failure(&mut self, message: &str) {
        (**self).record_failure(message);
    }

    fn mark_helper(&mut self) {
        (**self).mark_helper();
    }
}

impl Reporter for Vec<String> {
    fn record_failure(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// In-memory reporter that keeps every failure message
///
/// # Example
/// ```rust
/// use vial::Recorder;
///
/// let mut r = Recorder::new();
/// vial::is_true(&mut r, 1 + 1 == 3);
/// assert!(r.failed());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    messages: Vec<String>,
    helper_marks: usize,
}

impl Recorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any failure was recorded
    pub fn failed(&self) -> bool {
        !self.messages.is_empty()
    }

    /// All recorded messages, oldest first
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The recorded messages joined into one string
    pub fn output(&self) -> String {
        self.messages.concat()
    }

    /// How many times an assertion marked itself as a helper
    pub fn helper_marks(&self) -> usize {
        self.helper_marks
    }
}

impl Reporter for Recorder {
    fn record_failure(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn mark_helper(&mut self) {
        self.helper_marks += 1;
    }
}

/// Reporter for `#[test]` functions run by libtest
///
/// Each failure is written to stderr as it happens and the test keeps
/// running. The test fails when the reporter is finished or dropped, so
/// every failed check in the test is shown, not only the first one.
///
/// # Example
/// ```rust,ignore
/// #[test]
/// fn parses_header() {
///     let mut t = vial::TestReporter::new();
///     vial::equal(&mut t, header.name, "Content-Type");
///     vial::equal(&mut t, header.value, "text/plain");
/// }
/// ```
#[derive(Debug)]
pub struct TestReporter {
    name: Option<String>,
    failures: usize,
    concluded: bool,
}

impl TestReporter {
    /// Create a reporter named after the current test
    ///
    /// libtest runs each test on a thread named after it.
    pub fn new() -> Self {
        Self::named(std::thread::current().name().map(str::to_string))
    }

    /// Create a reporter with an explicit test name
    pub fn named(name: Option<String>) -> Self {
        Self {
            name,
            failures: 0,
            concluded: false,
        }
    }

    /// The name shown in failure headers
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of failures recorded so far
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Check if any failure was recorded
    pub fn failed(&self) -> bool {
        self.failures > 0
    }

    /// Fail the test now if anything was recorded
    ///
    /// # Panics
    /// Panics if at least one failure was recorded.
    pub fn finish(mut self) {
        self.conclude();
    }

    fn conclude(&mut self) {
        if self.concluded || self.failures == 0 {
            return;
        }
        self.concluded = true;

        match &self.name {
            Some(name) => panic!("{} assertion(s) failed in \"{}\"", self.failures, name),
            None => panic!("{} assertion(s) failed", self.failures),
        }
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TestReporter {
    fn record_failure(&mut self, message: &str) {
        self.failures += 1;
        match &self.name {
            Some(name) => eprintln!("Test: \"{}\"\n  {}", name, message),
            None => eprintln!("{}", message),
        }
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.conclude();
        }
    }
}
