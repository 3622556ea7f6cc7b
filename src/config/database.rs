//! Metadata database settings.
//!
//! Railway provisions PostgreSQL with a `postgres://` scheme, while
//! SQLAlchemy only accepts `postgresql://`; the URI is rewritten here so
//! the rest of the stack never sees the platform spelling.

use serde::Serialize;

use super::constants::{
    DB_CONNECT_TIMEOUT_SECONDS, DB_POOL_RECYCLE_SECONDS, DEFAULT_DB_MAX_OVERFLOW,
    DEFAULT_DB_POOL_SIZE,
};
use super::env::Env;

/// Connection pool parameters handed to the SQLAlchemy engine.
#[derive(Debug, Clone, Serialize)]
pub struct EngineOptions {
    pub pool_size: u32,
    pub max_overflow: u32,
    pub pool_recycle_seconds: u64,
    pub pool_pre_ping: bool,
    pub connect_timeout_seconds: u64,
}

/// Metadata database connection settings.
#[derive(Clone, Serialize)]
pub struct DatabaseSettings {
    // Connection URIs embed credentials, so they never leave the struct
    // through Serialize or Debug.
    #[serde(skip_serializing)]
    sqlalchemy_database_uri: Option<String>,
    pub engine: EngineOptions,
    pub prevent_unsafe_connections: bool,
}

impl DatabaseSettings {
    pub fn load(env: &Env) -> Self {
        Self {
            sqlalchemy_database_uri: env.get("DATABASE_URL").map(|uri| normalize_scheme(&uri)),
            engine: EngineOptions {
                pool_size: env.parse_or("SQLALCHEMY_POOL_SIZE", DEFAULT_DB_POOL_SIZE),
                max_overflow: env.parse_or("SQLALCHEMY_MAX_OVERFLOW", DEFAULT_DB_MAX_OVERFLOW),
                pool_recycle_seconds: DB_POOL_RECYCLE_SECONDS,
                pool_pre_ping: true,
                connect_timeout_seconds: DB_CONNECT_TIMEOUT_SECONDS,
            },
            prevent_unsafe_connections: env.bool_or("PREVENT_UNSAFE_DB_CONNECTIONS", true),
        }
    }

    /// Derived connection URI, if the platform provided one.
    pub fn sqlalchemy_database_uri(&self) -> Option<&str> {
        self.sqlalchemy_database_uri.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.sqlalchemy_database_uri.is_some()
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field(
                "sqlalchemy_database_uri",
                &self.sqlalchemy_database_uri.as_ref().map(|_| "[REDACTED]"),
            )
            .field("engine", &self.engine)
            .field("prevent_unsafe_connections", &self.prevent_unsafe_connections)
            .finish()
    }
}

/// Rewrite `postgres://` to `postgresql://`, first occurrence only.
fn normalize_scheme(uri: &str) -> String {
    if uri.starts_with("postgres://") {
        uri.replacen("postgres://", "postgresql://", 1)
    } else {
        uri.to_string()
    }
}
