//! HTTP security-header (Talisman) settings.
//!
//! The content-security-policy below matches what the dashboard frontend
//! needs: inline styles/scripts for chart rendering, blob workers for
//! exports, and the Mapbox API for map visualizations.

use std::collections::BTreeMap;

use serde::Serialize;

use super::constants::MAPBOX_API_ORIGIN;
use super::env::Env;

/// Security-header policy applied when the middleware is enabled.
#[derive(Debug, Clone, Serialize)]
pub struct TalismanPolicy {
    pub content_security_policy: BTreeMap<&'static str, Vec<&'static str>>,
    pub force_https: bool,
    pub force_https_permanent: bool,
}

impl TalismanPolicy {
    fn railway_default() -> Self {
        Self {
            content_security_policy: BTreeMap::from([
                ("default-src", vec!["'self'"]),
                ("img-src", vec!["'self'", "data:", "https:", "blob:"]),
                ("worker-src", vec!["'self'", "blob:"]),
                ("connect-src", vec!["'self'", MAPBOX_API_ORIGIN]),
                ("object-src", vec!["'none'"]),
                ("style-src", vec!["'self'", "'unsafe-inline'"]),
                ("script-src", vec!["'self'", "'unsafe-inline'", "'unsafe-eval'"]),
            ]),
            force_https: true,
            force_https_permanent: true,
        }
    }
}

/// Talisman middleware parameters.
#[derive(Debug, Clone, Serialize)]
pub struct TalismanSettings {
    pub enabled: bool,
    pub policy: Option<TalismanPolicy>,
}

impl TalismanSettings {
    pub fn load(env: &Env) -> Self {
        let enabled = env.bool_or("TALISMAN_ENABLED", true);
        Self {
            enabled,
            policy: enabled.then(TalismanPolicy::railway_default),
        }
    }
}
