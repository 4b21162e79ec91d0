//! Command line argument parsing for the numtrie CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// numtrie - inspect trie-encoded numeric terms
#[derive(Parser, Debug, Clone)]
#[command(name = "numtrie")]
#[command(about = "Encode, decode and expand prefix-coded numeric terms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NumtrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Numeric config file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "NUMTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NumtrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encode a value at one shift
    Encode(EncodeArgs),

    /// Decode a hex-encoded term
    Decode(DecodeArgs),

    /// Print every term a value is indexed under
    Ladder(LadderArgs),

    /// Split a value range into per-shift term ranges
    Split(SplitArgs),

    /// Analyze a numeric or date-time field value
    Analyze(AnalyzeArgs),
}

/// Arguments for encoding a value
#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    /// Signed 64-bit value
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: i64,

    /// Number of low bits to discard
    #[arg(short, long, default_value = "0")]
    pub shift: u32,
}

/// Arguments for decoding a term
#[derive(Parser, Debug, Clone)]
pub struct DecodeArgs {
    /// Term bytes as hex, e.g. 200100000000000000002a
    #[arg(value_name = "HEX")]
    pub term: String,
}

/// Arguments for generating a ladder
#[derive(Parser, Debug, Clone)]
pub struct LadderArgs {
    /// Signed 64-bit value
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: i64,

    /// Precision step (overrides the config file)
    #[arg(short, long)]
    pub step: Option<u32>,
}

/// Arguments for splitting a range
#[derive(Parser, Debug, Clone)]
pub struct SplitArgs {
    /// Inclusive lower bound
    #[arg(value_name = "LOWER", allow_hyphen_values = true)]
    pub lower: i64,

    /// Inclusive upper bound
    #[arg(value_name = "UPPER", allow_hyphen_values = true)]
    pub upper: i64,

    /// Precision step (overrides the config file)
    #[arg(short, long)]
    pub step: Option<u32>,
}

/// Arguments for analyzing a field value
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Integer, or RFC 3339 timestamp with --kind datetime
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Field kind
    #[arg(short, long, default_value = "numeric")]
    pub kind: FieldKind,

    /// Field name
    #[arg(short, long, default_value = "value")]
    pub name: String,
}

/// Field kinds the CLI can build
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Signed 64-bit integer
    Numeric,
    /// RFC 3339 timestamp
    Datetime,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
