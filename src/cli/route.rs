//! CLI route: run context built from config plus flags, dispatch to the comparator.

use crate::cli::output::{
    format_diff_json, format_diff_text, format_snapshot_json, format_snapshot_text,
};
use crate::cli::parse::{Cli, Commands, OutputFormat};
use crate::config::{ConfigLoader, LayerdiffConfig};
use crate::diff::Comparator;
use crate::error::DiffError;
use std::io::IsTerminal;
use tracing::info;

/// Runtime context for CLI execution: effective configuration and the comparator it builds.
pub struct RunContext {
    config: LayerdiffConfig,
    comparator: Comparator,
    color: bool,
}

impl RunContext {
    /// Load configuration (explicit file or default chain), apply flags, validate.
    pub fn new(cli: &Cli) -> Result<Self, DiffError> {
        let loaded = ConfigLoader::load_optional(cli.config.as_deref())?;
        let config = apply_cli_overrides(loaded, cli).validated()?;
        let comparator = Comparator::new(config.compare.clone())?;
        let color = !cli.no_color && std::io::stdout().is_terminal();

        Ok(Self {
            config,
            comparator,
            color,
        })
    }

    pub fn config(&self) -> &LayerdiffConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, DiffError> {
        match command {
            Commands::Compare {
                parent,
                child,
                format,
            } => {
                let result = self.comparator.compare(parent, child)?;
                info!(changes = result.len(), "Compare finished");
                match format {
                    OutputFormat::Json => format_diff_json(&result),
                    OutputFormat::Text => Ok(format_diff_text(&result, self.color)),
                }
            }
            Commands::Snapshot { root, format } => {
                let snapshot = self.comparator.snapshot(root)?;
                match format {
                    OutputFormat::Json => format_snapshot_json(&snapshot),
                    OutputFormat::Text => Ok(format_snapshot_text(&snapshot)),
                }
            }
        }
    }
}

/// Apply command-line flags on top of loaded configuration.
/// Precedence: flags override config file and environment.
pub fn apply_cli_overrides(mut config: LayerdiffConfig, cli: &Cli) -> LayerdiffConfig {
    if cli.no_default_excludes {
        config.compare.exclude_substrings.clear();
    }
    config
        .compare
        .exclude_substrings
        .extend(cli.exclude.iter().cloned());
    if let Some(policy) = cli.on_unreadable {
        config.compare.on_unreadable = policy;
    }
    if cli.follow_symlinks {
        config.compare.follow_symlinks = true;
    }
    if cli.sequential {
        config.compare.parallel = false;
    }

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.file = Some(file.clone());
    }

    config
}
