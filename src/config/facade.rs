//! Config loading entry points.

use super::merge::merge_policy;
use super::sources::{env_vars, global_file};
use super::LayerdiffConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, then the global config file, then environment overrides.
    pub fn load() -> Result<LayerdiffConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = env_vars::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load defaults, then `path` (must exist), then environment overrides.
    /// The global config file is not consulted.
    pub fn load_from_file(path: &Path) -> Result<LayerdiffConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = env_vars::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load `path` when given, the default chain otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<LayerdiffConfig, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }
}
