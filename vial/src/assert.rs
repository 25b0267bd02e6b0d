//! The assertion primitives
//!
//! Each assertion evaluates its condition and, when it does not hold,
//! reports exactly one message to the reporter. Nothing here panics or
//! returns early from the caller's test.

use std::fmt::{Debug, Display};

use crate::config::Config;
use crate::format::{self, Failure};
use crate::reporter::Reporter;

/// A value that may carry an error
///
/// Implemented for `Option<E>` and `Result<T, E>` where `E: Display`, and for
/// references to either, so results can be checked without being consumed.
pub trait MaybeError {
    /// The error, if there is one
    fn error(&self) -> Option<&dyn Display>;
}

impl<E: Display> MaybeError for Option<E> {
    fn error(&self) -> Option<&dyn Display> {
        self.as_ref().map(|e| e as &dyn Display)
    }
}

impl<T, E: Display> MaybeError for Result<T, E> {
    fn error(&self) -> Option<&dyn Display> {
        self.as_ref().err().map(|e| e as &dyn Display)
    }
}

impl<M: MaybeError + ?Sized> MaybeError for &M {
    fn error(&self) -> Option<&dyn Display> {
        (**self).error()
    }
}

/// Report a failure if `want` and `got` differ
///
/// # Example
/// ```rust
/// use vial::{Config, ColorMode, Recorder};
///
/// let config = Config::builder().no_location().color(ColorMode::Never).build();
/// let mut r = Recorder::new();
/// vial::equal_with(&mut r, "foo", "bar", &config);
/// assert_eq!(r.messages(), [r#"want "foo", got "bar""#]);
/// ```
#[track_caller]
pub fn equal<R, T>(reporter: &mut R, want: T, got: T)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    equal_with(reporter, want, got, &Config::default());
}

/// [`equal`] with explicit configuration
#[track_caller]
pub fn equal_with<R, T>(reporter: &mut R, want: T, got: T, config: &Config)
where
    R: Reporter + ?Sized,
    T: PartialEq + Debug,
{
    reporter.mark_helper();
    if want != got {
        report(
            reporter,
            Failure::NotEqual {
                want: &want,
                got: &got,
            },
            config,
        );
    }
}

/// Report a failure if `expr` is false
#[track_caller]
pub fn is_true<R>(reporter: &mut R, expr: bool)
where
    R: Reporter + ?Sized,
{
    is_true_with(reporter, expr, &Config::default());
}

/// [`is_true`] with explicit configuration
#[track_caller]
pub fn is_true_with<R>(reporter: &mut R, expr: bool, config: &Config)
where
    R: Reporter + ?Sized,
{
    reporter.mark_helper();
    if !expr {
        report(reporter, Failure::NotTrue, config);
    }
}

/// Report a failure if `err` holds an error
///
/// # Example
/// ```rust
/// use vial::Recorder;
///
/// let mut r = Recorder::new();
/// let parsed: Result<u8, _> = "12".parse::<u8>();
/// vial::no_error(&mut r, &parsed);
/// assert!(!r.failed());
/// ```
#[track_caller]
pub fn no_error<R, E>(reporter: &mut R, err: E)
where
    R: Reporter + ?Sized,
    E: MaybeError,
{
    no_error_with(reporter, err, &Config::default());
}

/// [`no_error`] with explicit configuration
#[track_caller]
pub fn no_error_with<R, E>(reporter: &mut R, err: E, config: &Config)
where
    R: Reporter + ?Sized,
    E: MaybeError,
{
    reporter.mark_helper();
    if let Some(e) = err.error() {
        report(reporter, Failure::UnexpectedError(e), config);
    }
}

#[track_caller]
fn report<R>(reporter: &mut R, failure: Failure<'_>, config: &Config)
where
    R: Reporter + ?Sized,
{
    let location = config.caller.resolve();
    let message = format::compose(&location, &failure, config.color);
    tracing::debug!(location = %location, "assertion failed");
    reporter.record_failure(&message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;
    use crate::reporter::Recorder;
    use pretty_assertions::assert_eq;

    fn config() -> Config {
        Config::builder()
            .caller(|| "a/b/c.go:4".to_string())
            .color(ColorMode::Always)
            .build()
    }

    fn colored(body: &str) -> String {
        format!("\x1b[31ma/b/c.go:4: {}\x1b[0m", body)
    }

    #[test]
    fn test_equal_passes() {
        let mut r = Recorder::new();
        equal_with(&mut r, "foo", "foo", &config());
        equal_with(&mut r, 7, 7, &config());
        equal_with(&mut r, 0.53f32, 0.53f32, &config());
        equal_with(&mut r, true, true, &config());
        equal_with(&mut r, 'z', 'z', &config());
        assert!(!r.failed());
    }

    #[test]
    fn test_equal_reports_once() {
        let mut r = Recorder::new();
        equal_with(&mut r, 7, 0, &config());
        assert_eq!(r.messages(), [colored("want 7, got 0")]);
    }

    #[test]
    fn test_equal_string() {
        let mut r = Recorder::new();
        equal_with(&mut r, "foo".to_string(), "bar".to_string(), &config());
        assert_eq!(r.output(), colored(r#"want "foo", got "bar""#));
    }

    #[test]
    fn test_equal_char() {
        let mut r = Recorder::new();
        equal_with(&mut r, 'a', 'c', &config());
        assert_eq!(r.output(), colored("want 'a', got 'c'"));
    }

    #[test]
    fn test_is_true() {
        let mut r = Recorder::new();
        is_true_with(&mut r, "foo" != "bar", &config());
        assert!(!r.failed());

        is_true_with(&mut r, "foo" == "bar", &config());
        assert_eq!(r.messages(), [colored("expression is not true")]);
    }

    #[test]
    fn test_no_error_option() {
        let mut r = Recorder::new();
        no_error_with(&mut r, None::<&str>, &config());
        assert!(!r.failed());

        no_error_with(&mut r, Some("uh-oh"), &config());
        assert_eq!(r.messages(), [colored("unexpected error: uh-oh")]);
    }

    #[test]
    fn test_no_error_result() {
        let mut r = Recorder::new();
        let ok: Result<u8, std::num::ParseIntError> = "7".parse();
        no_error_with(&mut r, &ok, &config());
        assert!(!r.failed());

        let err: Result<u8, std::num::ParseIntError> = "x".parse();
        no_error_with(&mut r, &err, &config());
        assert_eq!(
            r.output(),
            colored("unexpected error: invalid digit found in string")
        );
    }

    #[test]
    fn test_marks_helper_on_every_call() {
        let mut r = Recorder::new();
        equal_with(&mut r, 1, 1, &config());
        is_true_with(&mut r, false, &config());
        no_error_with(&mut r, None::<String>, &config());
        assert_eq!(r.helper_marks(), 3);
    }

    #[test]
    fn test_default_location_is_the_caller() {
        let config = Config::builder().color(ColorMode::Never).build();
        let mut r = Recorder::new();

        let line = line!() + 1;
        is_true_with(&mut r, false, &config);

        assert_eq!(
            r.output(),
            format!("{}:{}: expression is not true", file!(), line)
        );
    }

    #[test]
    fn test_dyn_reporter() {
        let mut r = Recorder::new();
        {
            let reporter: &mut dyn Reporter = &mut r;
            equal_with(reporter, 1, 2, &config());
        }
        assert_eq!(r.messages(), [colored("want 1, got 2")]);
    }
}
