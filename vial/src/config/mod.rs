//! Per-call assertion configuration
//!
//! A [`Config`] decides how the failing call site is located and whether the
//! message is colored. It is immutable and cheap to clone; the library never
//! stores one between calls.
//!
//! # Environment
//!
//! [`Config::from_env`] (and therefore `Config::default()`) reads:
//! - `NO_COLOR`: any non-empty value disables colors
//! - `VIAL_COLOR`: one of `auto`, `always`, `never` (default `always`)
//!
//! # Example
//!
//! ```rust
//! use vial::{ColorMode, Config, Recorder};
//!
//! let config = Config::builder()
//!     .caller(|| "a/b/c.rs:4".to_string())
//!     .color(ColorMode::Never)
//!     .build();
//!
//! let mut r = Recorder::new();
//! vial::equal_with(&mut r, 1, 2, &config);
//! assert_eq!(r.messages(), ["a/b/c.rs:4: want 1, got 2"]);
//! ```

pub mod env;
mod mode;

pub use mode::ColorMode;

use crate::caller::CallerResolver;

/// Environment variable selecting the color mode
pub const COLOR_VAR: &str = "VIAL_COLOR";

/// Environment variable that disables colors when set
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Options applied to a single assertion call
#[derive(Debug, Clone)]
pub struct Config {
    /// How the failing call site is found
    pub caller: CallerResolver,
    /// Whether failure messages are colored
    pub color: ColorMode,
}

impl Config {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(env::system)
    }

    /// Build config from an arbitrary variable lookup
    ///
    /// `NO_COLOR` wins over `VIAL_COLOR`.
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let color = if env::env_flag(&lookup, NO_COLOR_VAR) {
            ColorMode::Never
        } else {
            env::env_or(&lookup, COLOR_VAR, ColorMode::default())
        };

        Self {
            caller: CallerResolver::default(),
            color,
        }
    }

    /// Create a builder for customizing config
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    caller: Option<CallerResolver>,
    color: Option<ColorMode>,
}

impl ConfigBuilder {
    /// Resolve the caller location with a custom function
    pub fn caller<F>(mut self, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.caller = Some(CallerResolver::custom(f));
        self
    }

    /// Resolve the caller location from the assertion's call site
    pub fn track_caller(mut self) -> Self {
        self.caller = Some(CallerResolver::TrackCaller);
        self
    }

    /// Omit the location prefix from failure messages
    pub fn no_location(mut self) -> Self {
        self.caller = Some(CallerResolver::Disabled);
        self
    }

    /// Set the color mode
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.color = Some(mode);
        self
    }

    /// Build the Config
    ///
    /// The environment is only read for fields left unset.
    pub fn build(self) -> Config {
        self.build_from(env::system)
    }

    fn build_from<L>(self, lookup: L) -> Config
    where
        L: Fn(&str) -> Option<String>,
    {
        match (self.caller, self.color) {
            (Some(caller), Some(color)) => Config { caller, color },
            (caller, color) => {
                let default = Config::from_lookup(lookup);
                Config {
                    caller: caller.unwrap_or(default.caller),
                    color: color.unwrap_or(default.color),
                }
            }
        }
    }
}
