//! CLI argument parsing for hintpatch

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hp")]
#[command(author, version, about = "Question bank hint patcher", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace generic placeholder hints and overwrite the dataset
    Patch {
        /// Dataset file (defaults to the configured path)
        dataset: Option<PathBuf>,
    },

    /// Report what a patch run would replace, without writing
    Check {
        /// Dataset file (defaults to the configured path)
        dataset: Option<PathBuf>,
    },

    /// Show dataset totals and builtin table coverage
    Stats {
        /// Dataset file (defaults to the configured path)
        dataset: Option<PathBuf>,
    },
}
