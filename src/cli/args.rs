//! Command line argument parsing for the textonym CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// textonym - multi-tap keypad textonym lookup
#[derive(Parser, Debug, Clone)]
#[command(name = "textonym")]
#[command(about = "Find words sharing a multi-tap keypad digit signature")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextonymArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Keypad layout file (defaults to the built-in standard phone layout)
    #[arg(short, long, value_name = "LAYOUT_FILE")]
    pub layout: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextonymArgs {
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
    /// Find the textonyms of a word in a word list
    Lookup(LookupArgs),

    /// Print the keypad signature of a word
    Signature(SignatureArgs),

    /// List the textonym classes of a word list
    Groups(GroupsArgs),

    /// Show word-list statistics
    Stats(StatsArgs),
}

/// Arguments for textonym lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word-list file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for signature computation
#[derive(Parser, Debug, Clone)]
pub struct SignatureArgs {
    /// Word to translate into keypresses
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for listing textonym classes
#[derive(Parser, Debug, Clone)]
pub struct GroupsArgs {
    /// Word-list file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: PathBuf,

    /// Minimum class size to report
    #[arg(long, default_value = "2")]
    pub min_size: usize,
}

/// Arguments for word-list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word-list file, one word per line
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
