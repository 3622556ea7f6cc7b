//! Deployment configuration module
//!
//! Handles environment variables and deployment-wide constants.

mod app;
mod cache;
mod constants;
mod database;
mod env;
mod features;
mod headers;
mod limits;
mod logging;
mod mail;
mod ratelimit;
mod redis;
mod security;
mod session;
mod settings;
mod webdriver;
mod worker;

pub use app::AppSettings;
pub use cache::{CacheBackend, CacheLayers, CacheSettings};
pub use constants::*;
pub use database::{DatabaseSettings, EngineOptions};
pub use env::Env;
pub use features::FeatureFlags;
pub use headers::{TalismanPolicy, TalismanSettings};
pub use limits::QueryLimits;
pub use logging::{LogLevel, LoggingSettings};
pub use mail::MailSettings;
pub use ratelimit::RateLimitSettings;
pub use redis::RedisSettings;
pub use security::{SameSitePolicy, SecuritySettings};
pub use session::{SessionSettings, SessionStore};
pub use settings::Settings;
pub use webdriver::WebdriverSettings;
pub use worker::{BeatEntry, CronPattern, TaskAnnotation, WorkerSettings};
