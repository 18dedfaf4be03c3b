mod collect;
mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use waitwatch_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "waitwatch")]
#[command(about = "Costco wait-time survey scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the configured city pages and export wait times as CSV
    Collect {
        /// Only collect this city (display name, full name, or slug)
        #[arg(long)]
        city: Option<String>,
        /// Directory for the CSV export; overrides `WAITWATCH_OUTPUT_DIR`
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Print the pages that would be fetched and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// List configured cities and their page URLs
    Cities,
    /// Extract wait times from a saved city page
    Parse {
        /// Path to the saved HTML page
        path: PathBuf,
        /// Print the extracted record as JSON instead of CSV rows
        #[arg(long)]
        json: bool,
    },
}

/// Log level used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LOG_LEVEL: &str = "info";

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load the app config and install logging at its level.
fn load_config() -> anyhow::Result<AppConfig> {
    let config = waitwatch_core::load_app_config()?;
    init_tracing(&config.log_level);
    tracing::debug!(base_url = %config.base_url, "configuration loaded");
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `parse` reads a local file only, so a broken environment must not block it.
    match cli.command {
        Commands::Collect {
            city,
            output_dir,
            dry_run,
        } => {
            let config = load_config()?;
            collect::run_collect(&config, city.as_deref(), output_dir, dry_run).await
        }
        Commands::Cities => {
            let config = load_config()?;
            collect::run_list_cities(&config)
        }
        Commands::Parse { path, json } => {
            init_tracing(DEFAULT_LOG_LEVEL);
            parse::run_parse(&path, json)
        }
    }
}
