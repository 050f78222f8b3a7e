//! Marketplace Suggest - command-line entrypoint.
//!
//! Loads configuration and catalog files, builds the named prefix indexes,
//! and answers suggestion queries from the command line.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use marketplace_suggest_lib::catalog;
use marketplace_suggest_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use marketplace_suggest_lib::error::{
    report_error, set_error_reporter, ErrorContext, SuggestError, TracingErrorReporter,
};
use marketplace_suggest_lib::search::{IndexRegistry, Suggester};

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "marketplace-suggest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print suggestions for a prefix
    Query {
        /// Index to search (e.g. products, categories)
        index: String,

        /// Typed prefix
        #[clap(default_value = "")]
        prefix: String,

        /// Print the suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Print entry and node counts per index
    Stats {
        /// Print the counts as a JSON object keyed by index name
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    // Logs go to stderr so query output stays clean on stdout
    let installed = if log.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_thread_names(true),
            )
            .try_init()
    };

    installed.context("failed to set global tracing subscriber")
}

/// Builds the registry from every configured catalog source.
fn build_registry(config: &AppConfig) -> anyhow::Result<Arc<IndexRegistry>> {
    let registry = IndexRegistry::new();
    match catalog::load_sources(&registry, &config.catalog) {
        Ok(added) => {
            info!(indexes = registry.len(), entries = added, "Catalogs loaded");
            Ok(Arc::new(registry))
        }
        Err(e) => {
            let details = catalog::missing_path(&e)
                .map(|path| format!("set catalog.skip_missing to ignore {}", path.display()))
                .unwrap_or_else(|| "check the catalog file format".to_string());
            let message = e.to_string();
            report_error(
                ErrorContext::new(SuggestError::Catalog(e), "catalog")
                    .with_details(details)
                    .with_span_trace(),
            );
            anyhow::bail!(message)
        }
    }
}

fn load_config(path: Option<&Path>) -> AppConfig {
    match ConfigLoader::new(path, ENV_PREFIX).load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Command::GenConfig { output } = &args.command {
        let default_config = AppConfig::default();

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let toml = toml::to_string_pretty(&default_config).context("failed to serialize config")?;
        std::fs::write(output, toml)
            .with_context(|| format!("failed to write {}", output.display()))?;

        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let config = load_config(args.config.as_deref());
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::Query {
            index,
            prefix,
            json,
        } => {
            let registry = build_registry(&config)?;
            let suggester = Suggester::new(registry, config.suggest.clone());
            let suggestions = suggester.suggest(&index, &prefix);

            if json {
                println!("{}", serde_json::to_string(&suggestions)?);
            } else {
                for suggestion in suggestions {
                    println!("{suggestion}");
                }
            }
            Ok(())
        }
        Command::Stats { json } => {
            let registry = build_registry(&config)?;
            let stats = registry.stats();

            if json {
                let by_name: BTreeMap<_, _> = stats.into_iter().collect();
                println!("{}", serde_json::to_string_pretty(&by_name)?);
            } else {
                for (name, stats) in stats {
                    println!("{name}\tentries={}\tnodes={}", stats.entries, stats.nodes);
                }
            }
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
