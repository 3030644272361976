//! Merge rules: defaults, override order.
//!
//! Sources are layered lowest to highest: the defaults below, the global
//! config file (or an explicit file), then `LAYERDIFF_*` environment
//! variables. Later sources win key by key.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("compare.exclude_substrings", vec!["dosdevices", "users"])?
        .set_default("compare.follow_symlinks", false)?
        .set_default("compare.parallel", true)?
        .set_default("compare.on_unreadable", "strict")?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
