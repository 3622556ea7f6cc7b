//! SMTP delivery settings for alerts & reports.

use serde::Serialize;

use super::constants::{DEFAULT_MAIL_FROM, DEFAULT_SMTP_PORT};
use super::env::Env;

/// Outbound mail parameters. Without a host, mail is considered
/// unconfigured and the application logs reports instead of sending them.
#[derive(Clone, Serialize)]
pub struct MailSettings {
    pub host: Option<String>,
    pub port: u16,
    pub starttls: bool,
    pub ssl: bool,
    pub user: Option<String>,
    #[serde(skip_serializing)]
    password: Option<String>,
    pub mail_from: String,
}

impl MailSettings {
    pub fn load(env: &Env) -> Self {
        Self {
            host: env.get("SMTP_HOST"),
            port: env.parse_or("SMTP_PORT", DEFAULT_SMTP_PORT),
            starttls: env.bool_or("SMTP_STARTTLS", true),
            ssl: env.bool_or("SMTP_SSL", false),
            user: env.get("SMTP_USER"),
            password: env.get("SMTP_PASSWORD"),
            mail_from: env.string_or("SMTP_MAIL_FROM", DEFAULT_MAIL_FROM),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.host.is_some()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl std::fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("starttls", &self.starttls)
            .field("ssl", &self.ssl)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("mail_from", &self.mail_from)
            .finish()
    }
}
