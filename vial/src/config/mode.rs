use std::str::FromStr;

use crate::error::ConfigError;

/// When to decorate failure messages with terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color only when stderr is a terminal that supports it
    Auto,
    /// Always color
    #[default]
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Check if this mode decorates output right now
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => console::colors_enabled_stderr(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(ConfigError::invalid_color_mode(s)),
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}
