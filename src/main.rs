//! Lau Trie - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs a command script against
//! a fresh trie, reading the script from a file or standard input.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use lau_trie_lib::config::{ConfigLoader, LauConfig, LogConfig, ENV_PREFIX};
use lau_trie_lib::error::LauError;
use lau_trie_lib::script::Session;

/// Exit status when the configuration cannot be loaded.
const CONFIG_FAILURE_EXIT_CODE: i32 = 1;

/// Exit status when at least one script command failed.
const COMMAND_FAILURE_EXIT_CODE: i32 = 2;

/// Command line arguments for Lau Trie.
#[derive(Parser, Debug)]
#[clap(name = "Lau Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run a command script (the default)
    Run {
        /// Script file to read; standard input when omitted
        #[clap(short, long, value_parser)]
        script: Option<PathBuf>,
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
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that script results on stdout stay clean.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))
}

fn load_config(loader: &ConfigLoader) -> LauConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(CONFIG_FAILURE_EXIT_CODE);
        }
    }
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = <Args as clap::Parser>::parse();
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Run { script: None }) {
        Command::Run { script } => {
            let config = load_config(&config_loader);
            init_logging(&config.log)?;
            lau_trie_lib::init();

            info!(version = lau_trie_lib::VERSION, ?script, "starting script run");
            let mut session = Session::new(config.session);
            let stdout = io::stdout();

            let result = match &script {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("Failed to open script {}", path.display()))?;
                    session.run(BufReader::new(file), stdout.lock())
                }
                None => session.run(io::stdin().lock(), stdout.lock()),
            };

            match result {
                Ok(summary) if summary.failed == 0 => Ok(()),
                Ok(summary) => {
                    tracing::warn!(failed = summary.failed, "some commands failed");
                    process::exit(COMMAND_FAILURE_EXIT_CODE);
                }
                // stop_on_error aborted the run; already written and reported
                Err(LauError::Command(error)) => {
                    tracing::warn!(%error, "script run stopped at first failure");
                    process::exit(COMMAND_FAILURE_EXIT_CODE);
                }
                Err(e) => Err(e).context("Script run aborted"),
            }
        }
        Command::Validate => {
            let config = load_config(&config_loader);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            let default_config = LauConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .context("Failed to serialize config")?;
            std::fs::write(&output, toml)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}
