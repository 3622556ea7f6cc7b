//! Query execution limits.

use serde::Serialize;

use super::constants::{
    DEFAULT_ROW_LIMIT, DEFAULT_SQLLAB_TIMEOUT_SECONDS, DEFAULT_WEBSERVER_TIMEOUT_SECONDS,
};
use super::env::Env;

/// Limits preventing oversized queries from starving the deployment.
#[derive(Debug, Clone, Serialize)]
pub struct QueryLimits {
    pub row_limit: u64,
    pub sqllab_timeout_seconds: u64,
    pub webserver_timeout_seconds: u64,
    pub ctas_no_limit: bool,
}

impl QueryLimits {
    pub fn load(env: &Env) -> Self {
        Self {
            row_limit: env.parse_or("ROW_LIMIT", DEFAULT_ROW_LIMIT),
            sqllab_timeout_seconds: env
                .parse_or("SQLLAB_TIMEOUT", DEFAULT_SQLLAB_TIMEOUT_SECONDS),
            webserver_timeout_seconds: env
                .parse_or("WORKER_TIMEOUT", DEFAULT_WEBSERVER_TIMEOUT_SECONDS),
            ctas_no_limit: env.bool_or("SQLLAB_CTAS_NO_LIMIT", false),
        }
    }
}
