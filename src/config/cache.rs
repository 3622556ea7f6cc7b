//! Cache layer settings.
//!
//! Superset keeps three caches (metadata, chart data, thumbnails); all
//! three share the same Redis-backed configuration here.

use serde::Serialize;

use super::constants::{CACHE_KEY_PREFIX, DEFAULT_CACHE_TIMEOUT_SECONDS};
use super::env::Env;
use super::redis::RedisSettings;

/// Cache backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CacheBackend {
    #[serde(rename = "RedisCache")]
    Redis,
}

/// Configuration for one cache layer.
#[derive(Clone, Serialize)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    pub default_timeout_seconds: u64,
    pub key_prefix: String,
    #[serde(skip_serializing)]
    redis_url: String,
}

impl CacheSettings {
    pub fn redis_url(&self) -> &str {
        &self.redis_url
    }
}

impl std::fmt::Debug for CacheSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheSettings")
            .field("backend", &self.backend)
            .field("default_timeout_seconds", &self.default_timeout_seconds)
            .field("key_prefix", &self.key_prefix)
            .field("redis_url", &"[REDACTED]")
            .finish()
    }
}

/// The three cache layers, all derived from the same template.
#[derive(Debug, Clone, Serialize)]
pub struct CacheLayers {
    pub default: CacheSettings,
    pub data: CacheSettings,
    pub thumbnail: CacheSettings,
}

impl CacheLayers {
    pub fn load(env: &Env, redis: &RedisSettings) -> Self {
        let template = CacheSettings {
            backend: CacheBackend::Redis,
            default_timeout_seconds: env
                .parse_or("CACHE_DEFAULT_TIMEOUT", DEFAULT_CACHE_TIMEOUT_SECONDS),
            key_prefix: CACHE_KEY_PREFIX.to_string(),
            redis_url: redis.url().to_string(),
        };

        Self {
            default: template.clone(),
            data: template.clone(),
            thumbnail: template,
        }
    }
}
