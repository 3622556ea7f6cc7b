//! `check` command: validate the configuration before deploying.
//!
//! Loading already enforced the secret-key requirement; this command adds
//! warnings for likely misconfigurations and an optional Redis
//! connectivity probe.

use redis::aio::ConnectionManager;

use crate::cli::CheckArgs;
use crate::config::Settings;
use crate::errors::SettingsResult;

pub async fn execute(args: CheckArgs, settings: Settings) -> SettingsResult<()> {
    if !settings.database.is_configured() {
        tracing::warn!("DATABASE_URL is not set; the application will fall back to its bundled metadata store");
    }
    if !settings.mail.is_configured() && settings.features.alert_reports {
        tracing::warn!("Alert reports are enabled but SMTP is not configured");
    }
    if !settings.security.session_cookie_secure {
        tracing::warn!("SESSION_COOKIE_SECURE is off; only acceptable behind a TLS-terminating proxy in development");
    }

    if args.probe_redis {
        probe_redis(&settings).await?;
    }

    println!("Configuration OK");
    Ok(())
}

async fn probe_redis(settings: &Settings) -> SettingsResult<()> {
    tracing::info!(
        host = %settings.redis.host,
        port = settings.redis.port,
        "Probing Redis"
    );

    let client = settings.redis.client()?;
    let mut conn = ConnectionManager::new(client).await?;
    let pong: String = redis::cmd("PING").query_async(&mut conn).await?;

    tracing::info!(response = %pong, "Redis reachable");
    Ok(())
}
