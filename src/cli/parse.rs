//! CLI parse: clap types for layerdiff. No behavior; definitions only.

use crate::tree::UnreadablePolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// layerdiff - content-level changeset between two directory trees
#[derive(Parser, Debug)]
#[command(name = "layerdiff")]
#[command(about = "Report files added, removed or changed between a parent and a child tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Exclude directories whose path contains this substring (repeatable)
    #[arg(long = "exclude", value_name = "SUBSTRING", global = true)]
    pub exclude: Vec<String>,

    /// Drop the configured exclusion substrings before applying --exclude
    #[arg(long, global = true)]
    pub no_default_excludes: bool,

    /// Handling of unreadable files (strict, skip)
    #[arg(long, value_name = "POLICY", global = true)]
    pub on_unreadable: Option<UnreadablePolicy>,

    /// Descend through symbolic links to directories
    #[arg(long, global = true)]
    pub follow_symlinks: bool,

    /// Snapshot the two trees one after the other instead of concurrently
    #[arg(long, global = true)]
    pub sequential: bool,

    /// Disable colored text output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare a child tree against its parent
    Compare {
        /// Baseline tree
        parent: PathBuf,
        /// Tree described relative to the parent
        child: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Print the fingerprint of every file under a tree
    Snapshot {
        root: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
