//! Centralized error handling.
//!
//! Loading settings can only fail for a missing secret key; everything else
//! degrades to defaults. The remaining variants cover the operator-facing
//! `check` and `show` commands.

use thiserror::Error;

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The one hard requirement: the application must never start without
    /// a signing key for sessions and cookies.
    #[error("SUPERSET_SECRET_KEY environment variable must be set")]
    MissingSecretKey,

    #[error("Invalid Redis URL: {0}")]
    InvalidRedisUrl(String),

    #[error("Redis error")]
    Redis(#[from] redis::RedisError),

    #[error("Failed to render settings: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias
pub type SettingsResult<T> = Result<T, SettingsError>;
