//! The aggregate deployment settings.
//!
//! Everything is computed once at startup from environment variables and
//! held immutable for the lifetime of the process.

use serde::Serialize;

use crate::errors::SettingsResult;

use super::app::AppSettings;
use super::cache::CacheLayers;
use super::database::DatabaseSettings;
use super::env::Env;
use super::features::FeatureFlags;
use super::headers::TalismanSettings;
use super::limits::QueryLimits;
use super::logging::LoggingSettings;
use super::mail::MailSettings;
use super::ratelimit::RateLimitSettings;
use super::redis::RedisSettings;
use super::security::SecuritySettings;
use super::session::SessionSettings;
use super::webdriver::WebdriverSettings;
use super::worker::WorkerSettings;

/// Complete deployment configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub app: AppSettings,
    pub security: SecuritySettings,
    pub database: DatabaseSettings,
    pub redis: RedisSettings,
    pub session: SessionSettings,
    pub cache: CacheLayers,
    pub worker: WorkerSettings,
    pub features: FeatureFlags,
    pub webdriver: WebdriverSettings,
    pub mail: MailSettings,
    pub limits: QueryLimits,
    pub rate_limit: RateLimitSettings,
    pub talisman: TalismanSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load from the process environment (with `.env` support).
    ///
    /// Fails only when the secret key is missing; every other value
    /// degrades to its default.
    pub fn from_env() -> SettingsResult<Self> {
        dotenvy::dotenv().ok();
        Self::load(&Env::process())
    }

    /// Load from an explicit environment source.
    pub fn load(env: &Env) -> SettingsResult<Self> {
        let security = SecuritySettings::load(env)?;
        let redis = RedisSettings::load(env);
        let cache = CacheLayers::load(env, &redis);
        let worker = WorkerSettings::load(&redis);
        let rate_limit = RateLimitSettings::load(env, &redis);

        Ok(Self {
            app: AppSettings::load(env),
            security,
            database: DatabaseSettings::load(env),
            session: SessionSettings::load(env),
            cache,
            worker,
            features: FeatureFlags::load(env),
            webdriver: WebdriverSettings::load(env),
            mail: MailSettings::load(env),
            limits: QueryLimits::load(env),
            rate_limit,
            talisman: TalismanSettings::load(env),
            logging: LoggingSettings::load(env),
            redis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn minimal_env() -> Env {
        Env::from_map(HashMap::from([(
            "SUPERSET_SECRET_KEY".to_string(),
            "test-secret".to_string(),
        )]))
    }

    #[test]
    fn loads_with_only_the_secret_key() {
        let settings = Settings::load(&minimal_env()).unwrap();
        assert_eq!(settings.security.secret_key(), "test-secret");
        assert_eq!(settings.app.app_name, "Superset");
        assert_eq!(settings.redis.url(), "redis://localhost:6379/0");
    }

    #[test]
    fn fails_without_the_secret_key() {
        assert!(Settings::load(&Env::from_map(HashMap::new())).is_err());
    }

    #[test]
    fn redis_url_flows_into_dependent_subsystems() {
        let settings = Settings::load(&Env::from_map(HashMap::from([
            (
                "SUPERSET_SECRET_KEY".to_string(),
                "test-secret".to_string(),
            ),
            (
                "REDIS_URL".to_string(),
                "redis://:pw@cache.internal:6380/3".to_string(),
            ),
        ])))
        .unwrap();

        let url = "redis://:pw@cache.internal:6380/3";
        assert_eq!(settings.cache.default.redis_url(), url);
        assert_eq!(settings.worker.broker_url(), url);
        assert_eq!(settings.rate_limit.storage_url(), Some(url));
    }

    #[test]
    fn serialized_form_contains_no_secrets() {
        let settings = Settings::load(&Env::from_map(HashMap::from([
            (
                "SUPERSET_SECRET_KEY".to_string(),
                "super-secret-value".to_string(),
            ),
            (
                "DATABASE_URL".to_string(),
                "postgres://u:dbpass@h/db".to_string(),
            ),
            (
                "REDIS_URL".to_string(),
                "redis://:redispass@h:6379/0".to_string(),
            ),
            ("SMTP_PASSWORD".to_string(), "mailpass".to_string()),
        ])))
        .unwrap();

        let json = serde_json::to_string(&settings).unwrap();
        for secret in ["super-secret-value", "dbpass", "redispass", "mailpass"] {
            assert!(!json.contains(secret), "leaked {secret}");
        }
    }

    #[test]
    fn debug_form_contains_no_secrets() {
        let settings = Settings::load(&Env::from_map(HashMap::from([
            (
                "SUPERSET_SECRET_KEY".to_string(),
                "super-secret-value".to_string(),
            ),
            (
                "DATABASE_URL".to_string(),
                "postgres://u:dbpass@h/db".to_string(),
            ),
        ])))
        .unwrap();

        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(!rendered.contains("dbpass"));
    }
}
