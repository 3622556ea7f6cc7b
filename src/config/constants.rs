//! Deployment-wide constants
//!
//! Centralized location for default values to improve maintainability.

// =============================================================================
// Database
// =============================================================================

/// Default SQLAlchemy connection pool size
pub const DEFAULT_DB_POOL_SIZE: u32 = 10;

/// Default maximum pool overflow connections
pub const DEFAULT_DB_MAX_OVERFLOW: u32 = 20;

/// Seconds before a pooled connection is recycled
pub const DB_POOL_RECYCLE_SECONDS: u64 = 3600;

/// Database connect timeout in seconds
pub const DB_CONNECT_TIMEOUT_SECONDS: u64 = 10;

// =============================================================================
// Redis
// =============================================================================

/// Default Redis URL (for development)
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";

/// Default Redis host when the URL carries none
pub const DEFAULT_REDIS_HOST: &str = "localhost";

/// Default Redis port when the URL carries none
pub const DEFAULT_REDIS_PORT: u16 = 6379;

// =============================================================================
// Sessions & Cookies
// =============================================================================

/// Default session lifetime in hours
pub const DEFAULT_SESSION_LIFETIME_HOURS: u64 = 8;

// =============================================================================
// Cache
// =============================================================================

/// Default cache entry TTL in seconds
pub const DEFAULT_CACHE_TIMEOUT_SECONDS: u64 = 300;

/// Cache key prefix shared by all cache layers
pub const CACHE_KEY_PREFIX: &str = "superset_";

// =============================================================================
// Query limits
// =============================================================================

/// Default SQL Lab row limit
pub const DEFAULT_ROW_LIMIT: u64 = 5000;

/// Default SQL Lab query timeout in seconds
pub const DEFAULT_SQLLAB_TIMEOUT_SECONDS: u64 = 300;

/// Default webserver worker timeout in seconds
pub const DEFAULT_WEBSERVER_TIMEOUT_SECONDS: u64 = 300;

// =============================================================================
// Background worker
// =============================================================================

/// Rate limit applied to the SQL Lab result-fetching task
pub const SQL_LAB_RATE_LIMIT: &str = "100/s";

/// Broker prefetch multiplier (1 = fair task distribution)
pub const WORKER_PREFETCH_MULTIPLIER: u32 = 1;

// =============================================================================
// Mail
// =============================================================================

/// Default SMTP submission port
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address for alerts & reports
pub const DEFAULT_MAIL_FROM: &str = "superset@example.com";

// =============================================================================
// Webdriver
// =============================================================================

/// Base URL used by the headless browser when no public domain is set
pub const DEFAULT_WEBDRIVER_BASEURL: &str = "http://localhost:8088/";

// =============================================================================
// Application
// =============================================================================

/// Default deployment environment name
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Default application display name
pub const DEFAULT_APP_NAME: &str = "Superset";

/// Application logo path served by the frontend
pub const APP_ICON_PATH: &str = "/static/assets/images/superset-logo-horiz.png";

/// Health check endpoint path
pub const HEALTH_CHECK_ENDPOINT: &str = "/health";

/// Static asset max-age in seconds (1 year)
pub const SEND_FILE_MAX_AGE_SECONDS: u64 = 31_536_000;

// =============================================================================
// Security headers
// =============================================================================

/// External origin allowed for map tile requests
pub const MAPBOX_API_ORIGIN: &str = "https://api.mapbox.com";
