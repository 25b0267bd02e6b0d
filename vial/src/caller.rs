//! Caller location resolution
//!
//! Every public assertion is `#[track_caller]`, so the location seen here is
//! the line in the user's test that invoked the assertion, never a frame
//! inside this crate.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Strategy for finding the source location of a failing assertion
#[derive(Clone, Default)]
pub enum CallerResolver {
    /// Use the compiler-tracked caller of the assertion
    #[default]
    TrackCaller,
    /// Ask an injected function for the location
    Custom(Arc<dyn Fn() -> String + Send + Sync>),
    /// Never report a location
    Disabled,
}

impl CallerResolver {
    /// Create a resolver backed by a function
    ///
    /// # Example
    /// ```
    /// use vial::CallerResolver;
    ///
    /// let resolver = CallerResolver::custom(|| "a/b/c.rs:4".to_string());
    /// assert_eq!(resolver.resolve(), "a/b/c.rs:4");
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Resolve the location as `path:line`
    ///
    /// An empty string means the location is unknown; callers print the
    /// message without a prefix.
    #[track_caller]
    pub fn resolve(&self) -> String {
        let location = match self {
            Self::TrackCaller => render(Location::caller()),
            Self::Custom(f) => f(),
            Self::Disabled => String::new(),
        };

        if location.is_empty() {
            tracing::trace!(resolver = ?self, "caller location unavailable");
        }

        location
    }
}

fn render(location: &Location<'_>) -> String {
    format!("{}:{}", location.file(), location.line())
}

impl fmt::Debug for CallerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrackCaller => write!(f, "TrackCaller"),
            Self::Custom(_) => write!(f, "Custom(..)"),
            Self::Disabled => write!(f, "Disabled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_caller_points_at_call_site() {
        let line = line!() + 1;
        let location = CallerResolver::TrackCaller.resolve();
        assert_eq!(location, format!("{}:{}", file!(), line));
    }

    #[test]
    fn test_custom_resolver() {
        let resolver = CallerResolver::custom(|| "a/b/c.go:4".to_string());
        assert_eq!(resolver.resolve(), "a/b/c.go:4");
    }

    #[test]
    fn test_disabled_resolver_is_empty() {
        assert_eq!(CallerResolver::Disabled.resolve(), "");
    }

    #[test]
    fn test_custom_resolver_may_fail_quietly() {
        let resolver = CallerResolver::custom(String::new);
        assert_eq!(resolver.resolve(), "");
    }

    #[test]
    fn test_debug_hides_closure() {
        let resolver = CallerResolver::custom(|| "x:1".to_string());
        assert_eq!(format!("{:?}", resolver), "Custom(..)");
    }
}
