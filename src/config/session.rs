//! Server-side session settings.

use std::time::Duration;

use serde::Serialize;

use super::constants::DEFAULT_SESSION_LIFETIME_HOURS;
use super::env::Env;

/// Backing store for user sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStore {
    Redis,
}

/// Session handling parameters. Sessions are always server-side and
/// signed; only the lifetime is tunable.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSettings {
    pub server_side: bool,
    pub store: SessionStore,
    pub use_signer: bool,
    pub lifetime_hours: u64,
}

impl SessionSettings {
    pub fn load(env: &Env) -> Self {
        Self {
            server_side: true,
            store: SessionStore::Redis,
            use_signer: true,
            lifetime_hours: env.parse_or("SESSION_LIFETIME_HOURS", DEFAULT_SESSION_LIFETIME_HOURS),
        }
    }

    /// Session lifetime as a duration. Saturates so an absurd value
    /// cannot panic the load.
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_hours.saturating_mul(3600))
    }
}
