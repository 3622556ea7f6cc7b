//! Application entry point.
//!
//! CLI-based entry point that loads the deployment settings and
//! dispatches to the operator commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use superset_railway_config::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Settings are loaded per command: `env` documents the variables an
    // operator still has to set, so it must work before any are present.
    let result = match cli.command {
        Commands::Show(args) => {
            Settings::from_env().and_then(|settings| commands::show::execute(args, settings))
        }
        Commands::Check(args) => match Settings::from_env() {
            Ok(settings) => commands::check::execute(args, settings).await,
            Err(e) => Err(e),
        },
        Commands::Env => {
            commands::env::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
