//! Redis backing-store settings.
//!
//! One Redis instance backs sessions, caches, the task queue and rate
//! limiting, so the URL is parsed once here and the components are reused
//! by the other settings modules.

use serde::Serialize;
use url::Url;

use crate::errors::{SettingsError, SettingsResult};

use super::constants::{DEFAULT_REDIS_HOST, DEFAULT_REDIS_PORT, DEFAULT_REDIS_URL};
use super::env::Env;

/// Redis connection settings shared across subsystems.
#[derive(Clone, Serialize)]
pub struct RedisSettings {
    #[serde(skip_serializing)]
    url: String,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing)]
    password: Option<String>,
}

impl RedisSettings {
    pub fn load(env: &Env) -> Self {
        let url = env.string_or("REDIS_URL", DEFAULT_REDIS_URL);

        let (host, port, password) = match Url::parse(&url) {
            Ok(parsed) => (
                parsed
                    .host_str()
                    .unwrap_or(DEFAULT_REDIS_HOST)
                    .to_string(),
                parsed.port().unwrap_or(DEFAULT_REDIS_PORT),
                parsed
                    .password()
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable REDIS_URL, using default host/port");
                (
                    DEFAULT_REDIS_HOST.to_string(),
                    DEFAULT_REDIS_PORT,
                    None,
                )
            }
        };

        Self {
            url,
            host,
            port,
            password,
        }
    }

    /// Full connection URL, credentials included.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Build a Redis client for connectivity probes.
    pub fn client(&self) -> SettingsResult<redis::Client> {
        redis::Client::open(self.url.as_str())
            .map_err(|e| SettingsError::InvalidRedisUrl(e.to_string()))
    }
}

impl std::fmt::Debug for RedisSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSettings")
            .field("url", &"[REDACTED]")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
