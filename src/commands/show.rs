//! `show` command: render the effective settings.

use crate::cli::ShowArgs;
use crate::config::Settings;
use crate::errors::SettingsResult;

pub fn execute(args: ShowArgs, settings: Settings) -> SettingsResult<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!("Environment:        {}", settings.app.environment);
    println!("Application:        {}", settings.app.app_name);
    println!(
        "Database:           {}",
        if settings.database.is_configured() {
            "configured"
        } else {
            "not configured"
        }
    );
    println!(
        "Redis:              {}:{}",
        settings.redis.host, settings.redis.port
    );
    println!(
        "Session lifetime:   {}h (cookie secure: {}, SameSite: {})",
        settings.session.lifetime_hours,
        settings.security.session_cookie_secure,
        settings.security.session_cookie_samesite,
    );
    println!(
        "Cache timeout:      {}s (prefix: {})",
        settings.cache.default.default_timeout_seconds, settings.cache.default.key_prefix
    );
    println!(
        "Row limit:          {} (SQL Lab timeout: {}s)",
        settings.limits.row_limit, settings.limits.sqllab_timeout_seconds
    );
    println!("Webdriver base:     {}", settings.webdriver.base_url);
    println!(
        "Mail:               {}",
        if settings.mail.is_configured() {
            "configured"
        } else {
            "not configured (reports will be logged)"
        }
    );
    println!(
        "Rate limiting:      {}",
        if settings.rate_limit.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!(
        "Security headers:   {}",
        if settings.talisman.enabled {
            "enabled (HTTPS forced)"
        } else {
            "disabled"
        }
    );
    println!("Feature flags:");
    for (name, value) in settings.features.as_map() {
        println!("  {name}: {value}");
    }

    Ok(())
}
