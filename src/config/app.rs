//! Application metadata and miscellaneous fixed values.

use serde::Serialize;

use super::constants::{
    APP_ICON_PATH, DEFAULT_APP_NAME, DEFAULT_ENVIRONMENT, HEALTH_CHECK_ENDPOINT,
    SEND_FILE_MAX_AGE_SECONDS,
};
use super::env::Env;

#[derive(Debug, Clone, Serialize)]
pub struct AppSettings {
    pub environment: String,
    pub app_name: String,
    pub app_icon: String,
    pub public_role_like: Option<String>,
    pub send_file_max_age_seconds: u64,
    // Off: the platform edge handles response compression.
    pub compress_register: bool,
    pub health_check_endpoint: String,
}

impl AppSettings {
    pub fn load(env: &Env) -> Self {
        Self {
            environment: env.string_or("SUPERSET_ENV", DEFAULT_ENVIRONMENT),
            app_name: env.string_or("APP_NAME", DEFAULT_APP_NAME),
            app_icon: APP_ICON_PATH.to_string(),
            public_role_like: env.get("PUBLIC_ROLE_LIKE"),
            send_file_max_age_seconds: SEND_FILE_MAX_AGE_SECONDS,
            compress_register: false,
            health_check_endpoint: HEALTH_CHECK_ENDPOINT.to_string(),
        }
    }
}
