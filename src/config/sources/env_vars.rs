//! Environment source: LAYERDIFF_<SECTION>__<KEY>, e.g. LAYERDIFF_COMPARE__PARALLEL=false

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "LAYERDIFF";

/// Add the environment source to builder. Lists are comma separated.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("compare.exclude_substrings"),
    )
}
