//! Deployment settings for Apache Superset on Railway.
//!
//! Computes the full configuration of a Superset instance from environment
//! variables: security keys, database and Redis connection parameters,
//! server-side sessions, cache layers, the background task queue, feature
//! flags, mail delivery and HTTP security headers. The subsystems being
//! configured live in the host application; this crate only derives and
//! validates their parameters.
//!
//! # Layout
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations (`show`, `check`, `env`)
//! - **config**: Settings modules and deployment constants
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the effective settings
//! cargo run -- show --json
//!
//! # Validate before deploying, pinging Redis
//! cargo run -- check --probe-redis
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{Env, Settings};
pub use errors::{SettingsError, SettingsResult};
