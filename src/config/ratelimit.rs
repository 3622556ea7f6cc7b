//! Request rate-limiting settings.
//!
//! Enforcement lives in the application's middleware; this module only
//! decides whether it is on and where counters are stored.

use serde::Serialize;

use super::env::Env;
use super::redis::RedisSettings;

#[derive(Clone, Serialize)]
pub struct RateLimitSettings {
    pub enabled: bool,
    #[serde(skip_serializing)]
    storage_url: Option<String>,
}

impl RateLimitSettings {
    pub fn load(env: &Env, redis: &RedisSettings) -> Self {
        let enabled = env.bool_or("RATELIMIT_ENABLED", true);
        Self {
            enabled,
            storage_url: enabled.then(|| redis.url().to_string()),
        }
    }

    /// Counter storage URL; `None` when rate limiting is disabled.
    pub fn storage_url(&self) -> Option<&str> {
        self.storage_url.as_deref()
    }
}

impl std::fmt::Debug for RateLimitSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitSettings")
            .field("enabled", &self.enabled)
            .field("storage_url", &self.storage_url.as_ref().map(|_| "[REDACTED]"))
            .finish()
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
    fn enabled_by_default_with_redis_storage() {
        let e = env(&[]);
        let settings = RateLimitSettings::load(&e, &RedisSettings::load(&e));
        assert!(settings.enabled);
        assert_eq!(settings.storage_url(), Some("redis://localhost:6379/0"));
    }

    #[test]
    fn disabled_drops_storage_url() {
        let e = env(&[("RATELIMIT_ENABLED", "false")]);
        let settings = RateLimitSettings::load(&e, &RedisSettings::load(&e));
        assert!(!settings.enabled);
        assert_eq!(settings.storage_url(), None);
    }
}
