//! `env` command: document the recognized environment variables.

/// Recognized variables: name, default, effect.
const VARIABLES: &[(&str, &str, &str)] = &[
    (
        "SUPERSET_SECRET_KEY",
        "(required)",
        "Signing key for sessions and cookies; startup fails without it",
    ),
    (
        "SUPERSET_PREVIOUS_SECRET_KEY",
        "-",
        "Previous signing key, set only during key rotation",
    ),
    ("SUPERSET_ENV", "production", "Deployment environment name"),
    ("SUPERSET_LOG_LEVEL", "INFO", "Application log level"),
    (
        "DATABASE_URL",
        "-",
        "Metadata database URL; postgres:// is rewritten to postgresql://",
    ),
    ("SQLALCHEMY_POOL_SIZE", "10", "Database connection pool size"),
    ("SQLALCHEMY_MAX_OVERFLOW", "20", "Extra pool connections under load"),
    (
        "PREVENT_UNSAFE_DB_CONNECTIONS",
        "true",
        "Reject analytics connections to unsafe database drivers",
    ),
    (
        "REDIS_URL",
        "redis://localhost:6379/0",
        "Backing store for sessions, caches, task queue and rate limiting",
    ),
    ("SESSION_LIFETIME_HOURS", "8", "Session TTL in hours"),
    ("SESSION_COOKIE_SECURE", "true", "Send the session cookie over HTTPS only"),
    ("SESSION_COOKIE_SAMESITE", "Lax", "SameSite policy: Lax, Strict or None"),
    ("CACHE_DEFAULT_TIMEOUT", "300", "Cache entry TTL in seconds"),
    ("ENABLE_ALERTS_REPORTS", "true", "Enable the alerts & reports feature"),
    ("ENABLE_EMBEDDED", "false", "Enable embedded dashboards"),
    (
        "RAILWAY_PUBLIC_DOMAIN",
        "-",
        "Public domain; becomes the headless-browser base URL",
    ),
    (
        "RAILWAY_STATIC_URL",
        "-",
        "Legacy fallback for RAILWAY_PUBLIC_DOMAIN",
    ),
    ("SMTP_HOST", "-", "Mail relay host; mail is disabled without it"),
    ("SMTP_PORT", "587", "Mail relay port"),
    ("SMTP_STARTTLS", "true", "Use STARTTLS for mail delivery"),
    ("SMTP_SSL", "false", "Use implicit TLS for mail delivery"),
    ("SMTP_USER", "-", "Mail relay username"),
    ("SMTP_PASSWORD", "-", "Mail relay password"),
    ("SMTP_MAIL_FROM", "superset@example.com", "Sender address for reports"),
    ("ROW_LIMIT", "5000", "SQL Lab row limit"),
    ("SQLLAB_TIMEOUT", "300", "SQL Lab query timeout in seconds"),
    ("WORKER_TIMEOUT", "300", "Webserver worker timeout in seconds"),
    ("SQLLAB_CTAS_NO_LIMIT", "false", "Exempt CTAS queries from the row limit"),
    ("RATELIMIT_ENABLED", "true", "Enable request rate limiting"),
    ("TALISMAN_ENABLED", "true", "Enable security headers and forced HTTPS"),
    ("APP_NAME", "Superset", "Application display name"),
    ("PUBLIC_ROLE_LIKE", "-", "Role template for anonymous access"),
];

pub fn execute() {
    let width = VARIABLES
        .iter()
        .map(|(name, _, _)| name.len())
        .max()
        .unwrap_or(0);

    for (name, default, effect) in VARIABLES {
        println!("{name:width$}  [{default}]  {effect}");
    }
}
