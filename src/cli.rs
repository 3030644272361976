//! CLI domain: parse, route and output only.

mod output;
mod parse;
mod route;

pub use output::{
    format_diff_json, format_diff_text, format_snapshot_json, format_snapshot_text, map_error,
};
pub use parse::{Cli, Commands, OutputFormat};
pub use route::{apply_cli_overrides, RunContext};
