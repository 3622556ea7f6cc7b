//! Feature flags.
//!
//! Two flags are deployment-tunable; the dashboard/templating flags are
//! pinned on for every Railway deployment.

use std::collections::BTreeMap;

use serde::Serialize;

use super::env::Env;

/// Feature flag set handed to the application.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureFlags {
    pub alert_reports: bool,
    pub dashboard_native_filters: bool,
    pub dashboard_cross_filters: bool,
    pub dashboard_rbac: bool,
    pub template_processing: bool,
    pub embedded_superset: bool,
}

impl FeatureFlags {
    pub fn load(env: &Env) -> Self {
        Self {
            alert_reports: env.bool_or("ENABLE_ALERTS_REPORTS", true),
            dashboard_native_filters: true,
            dashboard_cross_filters: true,
            dashboard_rbac: true,
            template_processing: true,
            embedded_superset: env.bool_or("ENABLE_EMBEDDED", false),
        }
    }

    /// Flags keyed by the names the application recognizes.
    pub fn as_map(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("ALERT_REPORTS", self.alert_reports),
            ("DASHBOARD_NATIVE_FILTERS", self.dashboard_native_filters),
            ("DASHBOARD_CROSS_FILTERS", self.dashboard_cross_filters),
            ("DASHBOARD_RBAC", self.dashboard_rbac),
            ("ENABLE_TEMPLATE_PROCESSING", self.template_processing),
            ("EMBEDDED_SUPERSET", self.embedded_superset),
        ])
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
    fn defaults() {
        let flags = FeatureFlags::load(&env(&[]));
        assert!(flags.alert_reports);
        assert!(!flags.embedded_superset);
        assert!(flags.dashboard_rbac);
    }

    #[test]
    fn tunable_flags_respond_to_env() {
        let flags = FeatureFlags::load(&env(&[
            ("ENABLE_ALERTS_REPORTS", "false"),
            ("ENABLE_EMBEDDED", "true"),
        ]));
        assert!(!flags.alert_reports);
        assert!(flags.embedded_superset);
    }

    #[test]
    fn map_carries_application_names() {
        let map = FeatureFlags::load(&env(&[])).as_map();
        assert_eq!(map.get("ALERT_REPORTS"), Some(&true));
        assert_eq!(map.get("EMBEDDED_SUPERSET"), Some(&false));
        assert_eq!(map.len(), 6);
    }
}
