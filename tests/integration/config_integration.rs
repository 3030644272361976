//! Config loading across defaults, files and environment

use super::test_utils::with_env;
use layerdiff::config::{global_config_path, ConfigLoader};
use layerdiff::UnreadablePolicy;
use std::fs;
use tempfile::TempDir;

const COMPARE_VARS: [&str; 4] = [
    "LAYERDIFF_COMPARE__PARALLEL",
    "LAYERDIFF_COMPARE__EXCLUDE_SUBSTRINGS",
    "LAYERDIFF_COMPARE__ON_UNREADABLE",
    "LAYERDIFF_LOGGING__LEVEL",
];

fn cleared_env(xdg: &TempDir) -> Vec<(&'static str, Option<String>)> {
    let mut vars: Vec<(&'static str, Option<String>)> =
        COMPARE_VARS.iter().map(|name| (*name, None)).collect();
    vars.push((
        "XDG_CONFIG_HOME",
        Some(xdg.path().to_string_lossy().to_string()),
    ));
    vars
}

fn as_refs<'a>(vars: &'a [(&'static str, Option<String>)]) -> Vec<(&'a str, Option<&'a str>)> {
    vars.iter().map(|(k, v)| (*k, v.as_deref())).collect()
}

#[test]
fn test_load_defaults_without_files() {
    let xdg = TempDir::new().unwrap();
    let vars = cleared_env(&xdg);

    let config = with_env(&as_refs(&vars), || ConfigLoader::load().unwrap());

    assert_eq!(config.compare.exclude_substrings, vec!["dosdevices", "users"]);
    assert!(config.compare.parallel);
    assert_eq!(config.compare.on_unreadable, UnreadablePolicy::Strict);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_global_file_is_read() {
    let xdg = TempDir::new().unwrap();
    let config_dir = xdg.path().join("layerdiff");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[compare]\non_unreadable = \"skip\"\n",
    )
    .unwrap();
    let vars = cleared_env(&xdg);

    let (config, path) = with_env(&as_refs(&vars), || {
        (ConfigLoader::load().unwrap(), global_config_path())
    });

    assert_eq!(path, Some(config_dir.join("config.toml")));
    assert_eq!(config.compare.on_unreadable, UnreadablePolicy::Skip);
    assert!(config.compare.parallel);
}

#[test]
fn test_environment_overrides_file() {
    let xdg = TempDir::new().unwrap();
    let config_dir = xdg.path().join("layerdiff");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[compare]\nparallel = true\n\n[logging]\nlevel = \"info\"\n",
    )
    .unwrap();
    let mut vars = cleared_env(&xdg);
    vars.retain(|(name, _)| {
        *name != "LAYERDIFF_COMPARE__PARALLEL" && *name != "LAYERDIFF_COMPARE__EXCLUDE_SUBSTRINGS"
    });
    vars.push(("LAYERDIFF_COMPARE__PARALLEL", Some("false".to_string())));
    vars.push((
        "LAYERDIFF_COMPARE__EXCLUDE_SUBSTRINGS",
        Some("dosdevices,cache".to_string()),
    ));

    let config = with_env(&as_refs(&vars), || ConfigLoader::load().unwrap());

    assert!(!config.compare.parallel);
    assert_eq!(config.compare.exclude_substrings, vec!["dosdevices", "cache"]);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_explicit_file_skips_global_file() {
    let xdg = TempDir::new().unwrap();
    let config_dir = xdg.path().join("layerdiff");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[compare]\nfollow_symlinks = true\n",
    )
    .unwrap();
    let explicit = xdg.path().join("explicit.toml");
    fs::write(&explicit, "[compare]\nparallel = false\n").unwrap();
    let vars = cleared_env(&xdg);

    let config = with_env(&as_refs(&vars), || {
        ConfigLoader::load_from_file(&explicit).unwrap()
    });

    assert!(!config.compare.parallel);
    assert!(!config.compare.follow_symlinks);
}

#[test]
fn test_invalid_policy_in_file_fails() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("bad.toml");
    fs::write(&explicit, "[compare]\non_unreadable = \"sometimes\"\n").unwrap();
    let vars = cleared_env(&dir);

    let result = with_env(&as_refs(&vars), || ConfigLoader::load_from_file(&explicit));
    assert!(result.is_err());
}
