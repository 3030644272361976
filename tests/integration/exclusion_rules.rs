//! Excluded directories never surface in a changeset

use super::test_utils::{key, tree, write_files};
use layerdiff::{compare, CompareOptions, Comparator, DirectoryFilter};
use std::path::Path;
use std::sync::Arc;

#[test]
fn test_changes_under_users_are_ignored() {
    let parent = tree(&[("drive_c/users/bob/note.txt", "v1")]);
    let child = tree(&[("drive_c/users/bob/note.txt", "v2")]);

    let result = compare(parent.path(), child.path()).unwrap();

    assert!(result.added.is_empty());
    assert!(result.removed.is_empty());
    assert!(result.changed.is_empty());
}

#[test]
fn test_dosdevices_additions_and_removals_ignored() {
    let parent = tree(&[("dosdevices/c_link", "old"), ("keep.txt", "k")]);
    let child = tree(&[("dosdevices/z_link", "new"), ("keep.txt", "k")]);

    assert!(compare(parent.path(), child.path()).unwrap().is_empty());
}

#[test]
fn test_substring_anywhere_in_directory_path() {
    let parent = tree(&[
        ("drive_c/allusers/data.bin", "a"),
        ("drive_c/app/dosdevices_backup/x", "b"),
    ]);
    let child = tree(&[
        ("drive_c/allusers/data.bin", "changed"),
        ("drive_c/app/dosdevices_backup/x", "changed"),
    ]);

    assert!(compare(parent.path(), child.path()).unwrap().is_empty());
}

#[test]
fn test_file_named_users_is_compared() {
    let parent = tree(&[("users", "a")]);
    let child = tree(&[("users", "b")]);

    let result = compare(parent.path(), child.path()).unwrap();
    assert_eq!(result.changed, vec!["users"]);
}

#[test]
fn test_excluded_and_included_siblings() {
    let parent = tree(&[("users/a.txt", "1"), ("windows/b.txt", "1")]);
    let child = tree(&[("users/a.txt", "2"), ("windows/b.txt", "2")]);

    let result = compare(parent.path(), child.path()).unwrap();
    assert_eq!(result.changed, vec![key("windows/b.txt")]);
}

#[test]
fn test_custom_filter_replaces_default() {
    let parent = tree(&[("users/a.txt", "1"), ("cache/b.txt", "1")]);
    let child = tree(&[("users/a.txt", "2"), ("cache/b.txt", "2")]);

    struct CacheOnly;
    impl DirectoryFilter for CacheOnly {
        fn should_exclude_directory(&self, path: &Path) -> bool {
            path.file_name().is_some_and(|name| name == "cache")
        }
    }

    let comparator = Comparator::with_filter(CompareOptions::default(), Arc::new(CacheOnly));
    let result = comparator.compare(parent.path(), child.path()).unwrap();
    assert_eq!(result.changed, vec![key("users/a.txt")]);
}

#[test]
fn test_configured_substrings() {
    let parent = tree(&[("users/a.txt", "1"), ("temp/b.txt", "1")]);
    let child = tree(&[("users/a.txt", "2"), ("temp/b.txt", "2")]);

    let comparator = Comparator::new(CompareOptions {
        exclude_substrings: vec!["temp".to_string()],
        ..CompareOptions::default()
    })
    .unwrap();
    let result = comparator.compare(parent.path(), child.path()).unwrap();
    assert_eq!(result.changed, vec![key("users/a.txt")]);
}

#[test]
fn test_no_exclusions() {
    let parent = tree(&[]);
    let child = tree(&[]);
    write_files(child.path(), &[("dosdevices/c_link", "x")]);

    let comparator = Comparator::new(CompareOptions {
        exclude_substrings: Vec::new(),
        ..CompareOptions::default()
    })
    .unwrap();
    let result = comparator.compare(parent.path(), child.path()).unwrap();
    assert_eq!(result.added, vec![key("dosdevices/c_link")]);
}
