//! A minimalistic test assertion library
//!
//! `vial` offers three checks: [`equal`], [`is_true`] and [`no_error`]. A
//! failed check does not panic. It sends one colored, located message to a
//! [`Reporter`] and lets the test carry on, so a single run shows every
//! broken expectation.
//!
//! # Example
//!
//! ```rust
//! use vial::{ColorMode, Config, Recorder};
//!
//! let config = Config::builder()
//!     .caller(|| "a/b/c.rs:4".to_string())
//!     .color(ColorMode::Always)
//!     .build();
//!
//! let mut r = Recorder::new();
//! vial::equal_with(&mut r, "foo", "bar", &config);
//!
//! assert_eq!(
//!     r.output(),
//!     "\x1b[31ma/b/c.rs:4: want \"foo\", got \"bar\"\x1b[0m"
//! );
//! ```
//!
//! Inside a `#[test]`, use [`TestReporter`] to fail the test once it ends:
//!
//! ```rust,ignore
//! #[test]
//! fn totals() {
//!     let mut t = vial::TestReporter::new();
//!     vial::equal(&mut t, cart.total(), 42);
//!     vial::no_error(&mut t, &cart.checkout());
//! }
//! ```

pub mod assert;
pub mod caller;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod reporter;

pub use assert::{equal, equal_with, is_true, is_true_with, no_error, no_error_with, MaybeError};
pub use caller::CallerResolver;
pub use config::{ColorMode, Config, ConfigBuilder};
pub use error::ConfigError;
pub use reporter::{Recorder, Reporter, TestReporter};
