//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::data::Dataset;
use crate::view::Tab;

/// Interactive dashboard arguments.
#[derive(Debug, Default, Args)]
pub struct ViewCommand {
    /// Tab to open on (defaults to the configured initial tab)
    #[arg(short, long, value_enum)]
    pub tab: Option<TabArg>,
}

/// Headless render arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Tab to render
    #[arg(short, long, value_enum)]
    pub tab: Option<TabArg>,

    /// Frame width in columns (defaults to the configured width)
    #[arg(long)]
    pub width: Option<u16>,

    /// Frame height in rows (defaults to the configured height)
    #[arg(long)]
    pub height: Option<u16>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Dataset dump arguments.
#[derive(Debug, Args)]
pub struct DataCommand {
    /// Dataset to print (all when omitted)
    #[arg(value_enum)]
    pub dataset: Option<DatasetArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Tab argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    /// Crisis overview
    Overview,
    /// Demographics
    Demographics,
    /// Root causes
    Causes,
    /// Housing crisis
    Housing,
    /// Solutions
    Solutions,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Overview => Self::Overview,
            TabArg::Demographics => Self::Demographics,
            TabArg::Causes => Self::Causes,
            TabArg::Housing => Self::Housing,
            TabArg::Solutions => Self::Solutions,
        }
    }
}

/// Dataset argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetArg {
    /// Paycheck-to-paycheck split
    PaycheckStatus,
    /// Stress by age group
    AgeBreakdown,
    /// Monthly savings buffers
    EmergencySavings,
    /// Cost-of-living factors
    CostFactors,
    /// Housing cost share by city
    HousingBurden,
    /// Household debt by type
    DebtTypes,
}

impl From<DatasetArg> for Dataset {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::PaycheckStatus => Self::PaycheckStatus,
            DatasetArg::AgeBreakdown => Self::AgeBreakdown,
            DatasetArg::EmergencySavings => Self::EmergencySavings,
            DatasetArg::CostFactors => Self::CostFactors,
            DatasetArg::HousingBurden => Self::HousingBurden,
            DatasetArg::DebtTypes => Self::DebtTypes,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
