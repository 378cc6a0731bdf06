//! CLI command and subcommand definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Varken configuration CLI
#[derive(Parser, Debug)]
#[command(name = "varkenctl")]
#[command(version, about = "Inspect and validate Varken configuration", long_about = None)]
pub struct Cli {
    /// Config file path (default: $VARKEN_CONFIG, ./varken.ini, ~/.config/varken/varken.ini)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
    /// TOML output
    Toml,
}

impl From<&OutputFormat> for crate::format::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Toml => crate::format::OutputFormat::Toml,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the config file and report whether it is valid
    Check,

    /// Print the loaded configuration
    Show {
        /// Print passwords and API keys instead of masking them
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// Print the resolved config file path
    Path,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
