//! Headless-browser base URL for alerts & reports rendering.
//!
//! Railway exposes the public hostname as `RAILWAY_PUBLIC_DOMAIN` (older
//! deployments used `RAILWAY_STATIC_URL`). The screenshot webdriver needs
//! a full base URL with a trailing slash.

use serde::Serialize;

use super::constants::DEFAULT_WEBDRIVER_BASEURL;
use super::env::Env;

#[derive(Debug, Clone, Serialize)]
pub struct WebdriverSettings {
    pub base_url: String,
    pub user_friendly_base_url: String,
}

impl WebdriverSettings {
    pub fn load(env: &Env) -> Self {
        let domain = env
            .get("RAILWAY_PUBLIC_DOMAIN")
            .or_else(|| env.get("RAILWAY_STATIC_URL"));
        let base_url = derive_base_url(domain.as_deref());

        Self {
            user_friendly_base_url: base_url.clone(),
            base_url,
        }
    }
}

fn derive_base_url(domain: Option<&str>) -> String {
    match domain {
        None => DEFAULT_WEBDRIVER_BASEURL.to_string(),
        Some(d) if d.starts_with("http") => {
            if d.ends_with('/') {
                d.to_string()
            } else {
                format!("{d}/")
            }
        }
        Some(d) => format!("https://{d}/"),
    }
}
