//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Deployment settings loader for Apache Superset on Railway
#[derive(Parser, Debug)]
#[command(name = "superset-railway-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective settings (secrets redacted)
    Show(ShowArgs),

    /// Validate the configuration, optionally probing backing services
    Check(CheckArgs),

    /// List the recognized environment variables and their defaults
    Env,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Emit JSON instead of a text summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Ping the configured Redis instance
    #[arg(long)]
    pub probe_redis: bool,
}
