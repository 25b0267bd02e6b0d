use std::fmt::Display;
use std::str::FromStr;

/// Read a variable from the process environment
///
/// Unset variables and values that are not valid unicode read as `None`.
pub fn system(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse a variable with a default value
///
/// Invalid values are logged and replaced by `default`, so a typo in the
/// environment never breaks a test run.
///
/// # Example
/// ```
/// use vial::config::env::env_or;
///
/// let lookup = |_: &str| Some("42".to_string());
/// let value: u16 = env_or(&lookup, "ANSWER", 0);
/// assert_eq!(value, 42);
/// ```
pub fn env_or<L, T>(lookup: &L, key: &str, default: T) -> T
where
    L: Fn(&str) -> Option<String> + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring invalid environment value");
            default
        }
    }
}

/// Check whether a flag variable is present and non-empty
///
/// Follows the `NO_COLOR` convention: any non-empty value turns the flag on,
/// including `0` and `false`.
pub fn env_flag<L>(lookup: &L, key: &str) -> bool
where
    L: Fn(&str) -> Option<String> + ?Sized,
{
    lookup(key).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_or_parses_value() {
        let lookup = lookup_from(&[("PORT", "8080")]);
        assert_eq!(env_or(&lookup, "PORT", 1u16), 8080);
    }

    #[test]
    fn test_env_or_missing_uses_default() {
        let lookup = lookup_from(&[]);
        assert_eq!(env_or(&lookup, "PORT", 1u16), 1);
    }

    #[test]
    fn test_env_or_invalid_uses_default() {
        let lookup = lookup_from(&[("PORT", "eighty")]);
        assert_eq!(env_or(&lookup, "PORT", 1u16), 1);
    }

    #[test]
    fn test_env_flag() {
        let lookup = lookup_from(&[("SET", "1"), ("ZERO", "0"), ("EMPTY", "")]);
        assert!(env_flag(&lookup, "SET"));
        assert!(env_flag(&lookup, "ZERO"));
        assert!(!env_flag(&lookup, "EMPTY"));
        assert!(!env_flag(&lookup, "MISSING"));
    }
}
