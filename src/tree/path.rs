//! Root normalization and relative key derivation

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Normalize a root so that it always ends with the platform separator.
///
/// Keys are produced by stripping this prefix from full file paths. Without
/// the trailing separator, stripping `/data/a` from `/data/a/file.txt` would
/// leave `/file.txt` and a textual strip of a sibling such as `/data/ab`
/// would cut into its first component.
pub fn normalize_root(root: &Path) -> PathBuf {
    let mut root_str = root.as_os_str().to_os_string();
    let as_str = root_str.to_string_lossy();
    if !as_str.ends_with(MAIN_SEPARATOR) && !as_str.ends_with('/') {
        root_str.push(MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(root_str)
}

/// Derive the snapshot key for `path` under `normalized_root`.
///
/// Returns `None` for paths outside the root and for the root itself.
/// Components are joined with the platform separator and the key never
/// carries a leading separator. Each component goes through [`encode_name`],
/// so distinct names always give distinct keys.
pub fn relative_key(normalized_root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(normalized_root).ok()?;
    let mut key = String::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                if !key.is_empty() {
                    key.push(MAIN_SEPARATOR);
                }
                encode_name(name, &mut key);
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Append `name` to `out` without losing information.
///
/// UTF-8 names without a backslash are copied as-is. On unix a backslash is
/// written `\\` and every byte that is not part of valid UTF-8 is written
/// `\xNN`, so two different names never share an encoding.
#[cfg(unix)]
pub fn encode_name(name: &OsStr, out: &mut String) {
    use std::os::unix::ffi::OsStrExt;

    let mut rest = name.as_bytes();
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                push_escaped(valid, out);
                return;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                if let Ok(valid) = std::str::from_utf8(valid) {
                    push_escaped(valid, out);
                }
                let invalid = err.error_len().unwrap_or(after.len());
                for byte in &after[..invalid] {
                    out.push_str(&format!("\\x{:02x}", byte));
                }
                rest = &after[invalid..];
            }
        }
    }
}

#[cfg(unix)]
fn push_escaped(valid: &str, out: &mut String) {
    for c in valid.chars() {
        if c == '\\' {
            out.push_str("\\\\");
        } else {
            out.push(c);
        }
    }
}

/// Append `name` to `out` without losing information.
///
/// Backslash is the separator here and never part of a name. UTF-16 units
/// that do not form valid characters are written `\uNNNN`.
#[cfg(windows)]
pub fn encode_name(name: &OsStr, out: &mut String) {
    use std::os::windows::ffi::OsStrExt;

    for decoded in char::decode_utf16(name.encode_wide()) {
        match decoded {
            Ok(c) => out.push(c),
            Err(err) => out.push_str(&format!("\\u{:04x}", err.unpaired_surrogate())),
        }
    }
}

#[cfg(not(any(unix, windows)))]
pub fn encode_name(name: &OsStr, out: &mut String) {
    out.push_str(&name.to_string_lossy());
}
