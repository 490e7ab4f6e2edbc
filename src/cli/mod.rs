//! Command-line interface definitions.
//!
//! The CLI is a thin harness around the library: it reads bet and match
//! files, hands them to the settler or classifier, and prints the results.

pub mod check;
pub mod classify;
mod input;
pub mod output;
pub mod rules;
pub mod settle;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Settle sports bets against final match results.
#[derive(Parser, Debug)]
#[command(name = "betsettle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Settle a file of bets against a match result
    Settle(SettleArgs),

    /// Show how each bet's market is classified
    Classify(ClassifyArgs),

    /// List the classification rule table
    Rules,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `betsettle check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "betsettle.toml")]
    pub config: PathBuf,
}

/// Arguments for the `settle` subcommand.
#[derive(Args, Debug)]
pub struct SettleArgs {
    /// JSON file holding an array of bets
    #[arg(short, long)]
    pub bets: PathBuf,

    /// JSON file holding the match result
    #[arg(short, long)]
    pub result: PathBuf,

    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON file holding an array of bets
    #[arg(short, long)]
    pub bets: PathBuf,
}

impl Commands {
    /// Configuration file the command reads, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Self::Settle(args) => args.config.as_deref(),
            Self::Check(CheckCommand::Config(arg)) => Some(arg.config.as_path()),
            Self::Classify(_) | Self::Rules => None,
        }
    }
}

/// Run a parsed command with its loaded configuration.
///
/// # Errors
///
/// Returns any input, parse or settlement-pool error the command hits.
pub fn execute(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Settle(args) => settle::execute(args, config),
        Commands::Classify(args) => classify::execute(args),
        Commands::Rules => {
            rules::execute();
            Ok(())
        }
        Commands::Check(CheckCommand::Config(arg)) => {
            check::execute_config(&arg.config, config);
            Ok(())
        }
    }
}
