//! CLI argument parsing for seqlens

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "seqlens")]
#[command(version)]
#[command(about = "Detect the rule behind a numeric sequence and predict what comes next", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Load analyzer settings from a TOML file
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output (to stderr)
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one sequence (e.g. `seqlens analyze 3 6 9 12`)
    Analyze {
        /// Sequence terms
        #[arg(required = true, allow_negative_numbers = true, value_name = "VALUE")]
        values: Vec<String>,
    },

    /// Compare two comma-separated sequences (e.g. `seqlens compare 2,4,6 5,10,15`)
    Compare {
        /// First sequence
        #[arg(allow_hyphen_values = true, value_name = "SEQ_A")]
        first: String,

        /// Second sequence
        #[arg(allow_hyphen_values = true, value_name = "SEQ_B")]
        second: String,
    },

    /// Analyze every sequence in a file, one per line
    ///
    /// Lines may be JSON arrays or comma/whitespace separated numbers;
    /// blank lines and lines starting with `#` are skipped.
    Batch {
        /// Input file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
