//! Secret key, cookie policy and CSRF settings.
//!
//! The secret key is the single fail-fast requirement of the whole
//! configuration: without it sessions and cookies cannot be signed, so the
//! load aborts instead of letting the application start insecurely.

use serde::Serialize;

use crate::errors::{SettingsError, SettingsResult};

use super::env::Env;

/// SameSite policy for the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SameSitePolicy {
    Lax,
    Strict,
    None,
}

impl SameSitePolicy {
    /// Parse with fallback; unknown values keep the default `Lax`.
    fn parse_or_default(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "lax" => Self::Lax,
            "strict" => Self::Strict,
            "none" => Self::None,
            _ => {
                tracing::warn!(value = %raw, "Invalid SameSite policy, using Lax");
                Self::Lax
            }
        }
    }
}

impl std::fmt::Display for SameSitePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lax => write!(f, "Lax"),
            Self::Strict => write!(f, "Strict"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Session signing and cookie security parameters.
#[derive(Clone, Serialize)]
pub struct SecuritySettings {
    #[serde(skip_serializing)]
    secret_key: String,
    #[serde(skip_serializing)]
    previous_secret_key: Option<String>,
    pub session_cookie_secure: bool,
    pub session_cookie_httponly: bool,
    pub session_cookie_samesite: SameSitePolicy,
    pub csrf_enabled: bool,
    pub csrf_time_limit_seconds: Option<u64>,
    pub csrf_ssl_strict: bool,
}

impl SecuritySettings {
    pub fn load(env: &Env) -> SettingsResult<Self> {
        let secret_key = env
            .get("SUPERSET_SECRET_KEY")
            .ok_or(SettingsError::MissingSecretKey)?;

        Ok(Self {
            secret_key,
            previous_secret_key: env.get("SUPERSET_PREVIOUS_SECRET_KEY"),
            session_cookie_secure: env.bool_or("SESSION_COOKIE_SECURE", true),
            session_cookie_httponly: true,
            session_cookie_samesite: SameSitePolicy::parse_or_default(
                &env.string_or("SESSION_COOKIE_SAMESITE", "Lax"),
            ),
            csrf_enabled: true,
            csrf_time_limit_seconds: None,
            csrf_ssl_strict: true,
        })
    }

    /// Signing key for sessions and cookies.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Previous signing key, present only during key rotation.
    pub fn previous_secret_key(&self) -> Option<&str> {
        self.previous_secret_key.as_deref()
    }
}

impl std::fmt::Debug for SecuritySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecuritySettings")
            .field("secret_key", &"[REDACTED]")
            .field(
                "previous_secret_key",
                &self.previous_secret_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("session_cookie_secure", &self.session_cookie_secure)
            .field("session_cookie_httponly", &self.session_cookie_httponly)
            .field("session_cookie_samesite", &self.session_cookie_samesite)
            .field("csrf_enabled", &self.csrf_enabled)
            .field("csrf_time_limit_seconds", &self.csrf_time_limit_seconds)
            .field("csrf_ssl_strict", &self.csrf_ssl_strict)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> Env {
        Env::from_map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn missing_secret_key_fails() {
        let result = SecuritySettings::load(&Env::from_map(HashMap::new()));
        assert!(matches!(result, Err(SettingsError::MissingSecretKey)));
    }

    #[test]
    fn empty_secret_key_fails() {
        let result = SecuritySettings::load(&env(&[("SUPERSET_SECRET_KEY", "")]));
        assert!(matches!(result, Err(SettingsError::MissingSecretKey)));
    }

    #[test]
    fn cookie_defaults() {
        let settings = SecuritySettings::load(&env(&[("SUPERSET_SECRET_KEY", "k")])).unwrap();
        assert!(settings.session_cookie_secure);
        assert!(settings.session_cookie_httponly);
        assert_eq!(settings.session_cookie_samesite, SameSitePolicy::Lax);
        assert!(settings.csrf_enabled);
        assert_eq!(settings.csrf_time_limit_seconds, None);
    }

    #[test]
    fn cookie_secure_can_be_disabled() {
        let settings = SecuritySettings::load(&env(&[
            ("SUPERSET_SECRET_KEY", "k"),
            ("SESSION_COOKIE_SECURE", "false"),
        ]))
        .unwrap();
        assert!(!settings.session_cookie_secure);
    }

    #[test]
    fn samesite_parsed_case_insensitively() {
        let settings = SecuritySettings::load(&env(&[
            ("SUPERSET_SECRET_KEY", "k"),
            ("SESSION_COOKIE_SAMESITE", "strict"),
        ]))
        .unwrap();
        assert_eq!(settings.session_cookie_samesite, SameSitePolicy::Strict);
    }

    #[test]
    fn previous_key_is_optional() {
        let settings = SecuritySettings::load(&env(&[
            ("SUPERSET_SECRET_KEY", "k"),
            ("SUPERSET_PREVIOUS_SECRET_KEY", "old"),
        ]))
        .unwrap();
        assert_eq!(settings.previous_secret_key(), Some("old"));
    }

    #[test]
    fn debug_redacts_secrets() {
        let settings = SecuritySettings::load(&env(&[("SUPERSET_SECRET_KEY", "topsecret")]))
            .unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("topsecret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
