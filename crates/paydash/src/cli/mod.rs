//! Command-line interface for paydash.
//!
//! This module provides the CLI structure for the `paydash` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, DataCommand, DatasetArg, OutputFormat, RenderCommand, TabArg, ViewCommand,
};

/// paydash - Canadian paycheck-to-paycheck statistics in your terminal
///
/// An interactive dashboard of survey figures on financial stress, savings,
/// housing costs and household debt across Canada.
#[derive(Debug, Parser)]
#[command(name = "paydash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `view`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive dashboard
    View(ViewCommand),

    /// Render one frame without a terminal
    Render(RenderCommand),

    /// Print the underlying datasets
    Data(DataCommand),

    /// List tab identifiers and labels
    Tabs,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The command to run, `view` when none was given.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::View(ViewCommand::default()))
    }
}
