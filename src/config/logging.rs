//! Logging settings.

use serde::Serialize;

use super::env::Env;

/// Strongly typed log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`.
    pub fn from_str_or_default(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => {
                tracing::warn!(value = %raw, "Unknown log level, using INFO");
                Self::Info
            }
        }
    }

    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Trace => write!(f, "TRACE"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub time_rotate: bool,
}

impl LoggingSettings {
    pub fn load(env: &Env) -> Self {
        Self {
            level: LogLevel::from_str_or_default(&env.string_or("SUPERSET_LOG_LEVEL", "INFO")),
            time_rotate: true,
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
    fn default_is_info() {
        let settings = LoggingSettings::load(&env(&[]));
        assert_eq!(settings.level, LogLevel::Info);
        assert!(settings.time_rotate);
    }

    #[test]
    fn parses_case_insensitively() {
        let settings = LoggingSettings::load(&env(&[("SUPERSET_LOG_LEVEL", "debug")]));
        assert_eq!(settings.level, LogLevel::Debug);
        assert_eq!(settings.level.to_tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let settings = LoggingSettings::load(&env(&[("SUPERSET_LOG_LEVEL", "verbose")]));
        assert_eq!(settings.level, LogLevel::Info);
    }
}
