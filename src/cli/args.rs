//! Command line argument parsing for the Lipi CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lipi - Gujarati and mixed-script tokenizer
#[derive(Parser, Debug, Clone)]
#[command(name = "lipi")]
#[command(about = "Tokenize Gujarati and mixed-script text and compute corpus statistics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LipiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LipiArgs {
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
    /// Split text into sentences of classified tokens
    Tokenize(TokenizeArgs),

    /// Classify individual tokens
    Classify(ClassifyArgs),

    /// Tokenize a JSONL corpus and save results and statistics
    Process(ProcessArgs),

    /// Recompute statistics from a saved results file
    Stats(StatsArgs),
}

/// Arguments for tokenizing a text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Drop characters that no rule recognizes
    #[arg(long)]
    pub drop_unmatched: bool,
}

/// Arguments for classifying tokens
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Tokens to classify
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,
}

/// Arguments for processing a corpus
#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    /// Input file (JSON Lines, one object per line)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Maximum number of records to read
    #[arg(short = 'n', long, default_value = "1000")]
    pub max_examples: usize,

    /// Read every record, ignoring --max-examples
    #[arg(long)]
    pub all: bool,

    /// Name of the field holding the text
    #[arg(long, default_value = "text")]
    pub text_field: String,

    /// Base path for the output files (<BASE>.json and <BASE>_stats.txt)
    #[arg(short, long, value_name = "BASE", default_value = "gujarati_tokenized")]
    pub output: PathBuf,

    /// Don't write output files
    #[arg(long)]
    pub no_save: bool,

    /// Tokenize documents in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log progress every N records
    #[arg(long, default_value = "100")]
    pub progress_interval: usize,

    /// Drop characters that no rule recognizes
    #[arg(long)]
    pub drop_unmatched: bool,
}

/// Arguments for recomputing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Results file written by `process`
    #[arg(value_name = "RESULTS")]
    pub results: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
