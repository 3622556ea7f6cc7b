//! Environment variable access.
//!
//! All settings derivation goes through [`Env`] so tests can supply an
//! in-memory map instead of mutating the process environment.

use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Source of configuration values.
#[derive(Debug, Clone, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn process() -> Self {
        Self { overrides: None }
    }

    /// Read from a fixed map (used by tests).
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self {
            overrides: Some(vars),
        }
    }

    /// Look up a variable. Empty values count as unset, matching the
    /// falsy handling of the deployment scripts this replaces.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(key).cloned(),
            None => env::var(key).ok(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// String value with a default.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a value, falling back to the default (with a warning) when
    /// the variable is malformed.
    pub fn parse_or<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Display + Copy,
    {
        match self.get(key) {
            None => default,
            Some(raw) => match raw.parse() {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(key, value = %raw, %default, "Invalid value, using default");
                    default
                }
            },
        }
    }

    /// Truthy-string parsing: `true`/`1` and `false`/`0`, case-insensitive.
    /// Anything else falls back to the default with a warning.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    tracing::warn!(key, value = %raw, %default, "Invalid boolean, using default");
                    default
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Env {
        Env::from_map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let e = env(&[("FOO", "")]);
        assert_eq!(e.get("FOO"), None);
        assert_eq!(e.string_or("FOO", "bar"), "bar");
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        let e = env(&[("PORT", "not-a-number")]);
        assert_eq!(e.parse_or("PORT", 587u16), 587);
    }

    #[test]
    fn parse_or_accepts_valid_numbers() {
        let e = env(&[("PORT", "2525")]);
        assert_eq!(e.parse_or("PORT", 587u16), 2525);
    }

    #[test]
    fn bool_or_accepts_common_spellings() {
        let e = env(&[("A", "TRUE"), ("B", "0"), ("C", "yes")]);
        assert!(e.bool_or("A", false));
        assert!(!e.bool_or("B", true));
        // Unknown spelling keeps the default
        assert!(e.bool_or("C", true));
        assert!(!e.bool_or("C", false));
        assert!(e.bool_or("MISSING", true));
    }
}
