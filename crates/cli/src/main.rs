use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use model::core::value_kind::ValueKind;
use planner::filter::{config::FilterSetConfig, set::FilterSet};
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "colfilter",
    version = "0.1.0",
    about = "Column filter WHERE clause builder"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            config,
            reset,
            json,
            output: output_path,
        } => {
            let mut filters = load_filter_set(&config).await?;
            if reset {
                filters.reset()?;
            }

            let clause = filters.aggregate();
            info!(
                "Built clause from {} filters with {} params",
                filters.len(),
                clause.params.len()
            );

            let content = if json {
                output::render_json(&clause)? + "\n"
            } else {
                output::render_table(&clause)
            };
            output::emit(content, output_path).await?;
        }
        Commands::Modes {
            kind,
            null_sensitive,
        } => {
            let kind =
                ValueKind::from_str(&kind).map_err(|_| CliError::InvalidKind(kind.clone()))?;
            for mode in kind.modes(null_sensitive) {
                println!("{mode}");
            }
        }
    }

    Ok(())
}

async fn load_filter_set(path: &str) -> Result<FilterSet, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let config = FilterSetConfig::from_json_str(&source)?;
    info!(
        "Loaded {} filter definitions from {}",
        config.filters.len(),
        path
    );
    Ok(config.into_filter_set()?)
}
