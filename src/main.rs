//! provider-by-state - pick the service provider for an order
//!
//! Command-line front end over the selection rules.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use provider_by_state::config::DuplicatePolicy;
use provider_by_state::{Config, Order, Provider, Selector};

#[derive(Parser)]
#[command(name = "provider-by-state")]
#[command(about = "Pick the service provider for an order based on its U.S. state")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select a provider for an order
    Select {
        /// Two-letter U.S. state code of the order
        #[arg(short, long)]
        state: String,

        /// Candidate provider name (repeatable)
        #[arg(short, long = "provider")]
        providers: Vec<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Validate configuration file
    Check {
        /// Path to configuration file
        #[arg(short, long, default_value = "provider-by-state.toml")]
        config: String,
    },
}

fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from '{}'", path)),
        None => Ok(Config::default()),
    }
}

fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if config.selection.duplicate_names == DuplicatePolicy::Reject {
        tracing::debug!("Duplicate provider names will be rejected");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Select {
            state,
            providers,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            init_tracing(&config);

            let order = Order::new(state);
            let candidates: Vec<Provider> = providers.into_iter().map(Provider::new).collect();
            tracing::info!(
                state = %order.us_state_abbr,
                candidates = candidates.len(),
                "Selecting provider"
            );

            let selector = Selector::new(config.selection);
            let selected = selector.select_from(&order, &candidates)?;
            println!("{}", selected.name);
            Ok(())
        }

        Commands::Check { config } => {
            let loaded = load_config(Some(&config))?;
            init_tracing(&loaded);

            tracing::info!(config = %config, "Configuration is valid");
            println!("duplicate_names = {}", loaded.selection.duplicate_names);
            println!("log level       = {}", loaded.logging.level);
            Ok(())
        }
    }
}
