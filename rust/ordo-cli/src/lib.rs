//! Ordo CLI: command-line driver for the ordo strategies.
//!
//! Parses input values, resolves strategies from flags and `ordo.toml`,
//! invokes `ordo-core` and formats the result.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ordo_core::{ReverseStrategy, SortStrategy};

use crate::commands::{ElementKind, OutputFormat};
use crate::config::OrdoConfig;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "ordo", version, about = "Sorting and list-reversal strategies")]
pub struct Cli {
    /// Read configuration from this file instead of searching for ordo.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort values and print them as [a,b,c]
    Sort {
        /// exchange | heap (defaults to the configured strategy)
        #[arg(long, short)]
        strategy: Option<SortStrategy>,

        /// Element kind of the values
        #[arg(long, value_enum, default_value_t = ElementKind::Int)]
        kind: ElementKind,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Values to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Build a linked list from values, reverse it and print it head to tail
    Reverse {
        /// iterative | recursive | head-insertion (defaults to the configured strategy)
        #[arg(long, short)]
        strategy: Option<ReverseStrategy>,

        /// Longest list the recursive strategy accepts (at most 20000;
        /// each node costs one stack frame)
        #[arg(long)]
        max_depth: Option<usize>,

        /// List values, head first
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Run the reference scenarios with every strategy
    Demo,
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print a default ordo.toml
    Init,
}

/// Run one parsed command against `config`, returning stdout text.
pub fn execute(command: &Commands, config: &OrdoConfig) -> Result<String, CliError> {
    match command {
        Commands::Sort {
            strategy,
            kind,
            format,
            values,
        } => {
            let strategy = strategy.unwrap_or(config.sort.strategy);
            commands::run_sort(strategy, values, *kind, *format)
        }
        Commands::Reverse {
            strategy,
            max_depth,
            values,
        } => {
            let strategy = strategy.unwrap_or(config.reverse.strategy);
            let max_depth = max_depth.unwrap_or(config.reverse.max_depth);
            commands::run_reverse(strategy, max_depth, values)
        }
        Commands::Demo => commands::run_demo(config),
        Commands::Config {
            command: ConfigCommand::Init,
        } => Ok(OrdoConfig::default_template().trim_end().to_string()),
    }
}

/// Load configuration as `cli` asks and run its command.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let config = match &cli.config {
        Some(path) => OrdoConfig::load_from(path)?,
        None => OrdoConfig::load()?,
    };
    execute(&cli.command, &config)
}
