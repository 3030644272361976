//! CLI output: rendering of results and error mapping.

use crate::diff::DiffResult;
use crate::error::DiffError;
use crate::tree::TreeSnapshot;
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &DiffError) -> String {
    e.to_string()
}

/// Pretty JSON object with `added`, `removed`, `changed` (and `skipped` when non-empty).
pub fn format_diff_json(result: &DiffResult) -> Result<String, DiffError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// One line per path: `A` added, `D` removed, `M` changed, `?` skipped.
pub fn format_diff_text(result: &DiffResult, color: bool) -> String {
    let mut lines = Vec::with_capacity(result.len() + result.skipped.len());
    for path in &result.added {
        lines.push(status_line("A", path, color));
    }
    for path in &result.removed {
        lines.push(status_line("D", path, color));
    }
    for path in &result.changed {
        lines.push(status_line("M", path, color));
    }
    for path in &result.skipped {
        lines.push(status_line("?", path, color));
    }
    lines.join("\n")
}

fn status_line(marker: &str, path: &str, color: bool) -> String {
    if !color {
        return format!("{} {}", marker, path);
    }
    let marker = match marker {
        "A" => marker.green().to_string(),
        "D" => marker.red().to_string(),
        "M" => marker.yellow().to_string(),
        _ => marker.dimmed().to_string(),
    };
    format!("{} {}", marker, path)
}

/// JSON object mapping each relative key to its hex fingerprint
pub fn format_snapshot_json(snapshot: &TreeSnapshot) -> Result<String, DiffError> {
    let mut files = Map::new();
    for (key, fingerprint) in snapshot {
        files.insert(key.clone(), Value::String(fingerprint.to_hex()));
    }
    let mut root = Map::new();
    root.insert("files".to_string(), Value::Object(files));
    if !snapshot.skipped().is_empty() {
        root.insert(
            "skipped".to_string(),
            Value::from(snapshot.skipped().to_vec()),
        );
    }
    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

/// `<hex>  <key>` per file, the layout of `sha1sum`
pub fn format_snapshot_text(snapshot: &TreeSnapshot) -> String {
    snapshot
        .iter()
        .map(|(key, fingerprint)| format!("{}  {}", fingerprint, key))
        .collect::<Vec<_>>()
        .join("\n")
}
