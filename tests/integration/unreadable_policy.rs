//! Strict and skip handling of entries that cannot be read

#![cfg(unix)]

use super::test_utils::tree;
use layerdiff::{CompareOptions, Comparator, DiffError, UnreadablePolicy};
use std::os::unix::fs::symlink;

#[test]
fn test_strict_aborts_on_dangling_link() {
    let parent = tree(&[("a.txt", "1")]);
    let child = tree(&[("a.txt", "1")]);
    symlink(child.path().join("gone"), child.path().join("broken")).unwrap();

    let err = Comparator::default()
        .compare(parent.path(), child.path())
        .unwrap_err();
    assert!(matches!(err, DiffError::Io { .. }));
}

#[test]
fn test_skip_reports_unreadable_separately() {
    let parent = tree(&[("a.txt", "1"), ("broken", "was a file")]);
    let child = tree(&[("a.txt", "2")]);
    symlink(child.path().join("gone"), child.path().join("broken")).unwrap();

    let comparator = Comparator::new(CompareOptions {
        on_unreadable: UnreadablePolicy::Skip,
        ..CompareOptions::default()
    })
    .unwrap();
    let result = comparator.compare(parent.path(), child.path()).unwrap();

    assert_eq!(result.changed, vec!["a.txt"]);
    assert!(result.removed.is_empty(), "skipped path must not be reported removed");
    assert_eq!(result.skipped, vec!["broken"]);
}

#[test]
fn test_follow_symlinks_descends_into_linked_directory() {
    let parent = tree(&[]);
    let child = tree(&[("real/data.txt", "d")]);
    symlink(child.path().join("real"), child.path().join("alias")).unwrap();

    let default = Comparator::default()
        .compare(parent.path(), child.path())
        .unwrap();
    assert_eq!(default.added.len(), 1);

    let following = Comparator::new(CompareOptions {
        follow_symlinks: true,
        ..CompareOptions::default()
    })
    .unwrap()
    .compare(parent.path(), child.path())
    .unwrap();
    assert_eq!(following.added, vec!["alias/data.txt", "real/data.txt"]);
}

#[test]
fn test_follow_symlinks_loop_is_walk_error() {
    let parent = tree(&[]);
    let child = tree(&[("dir/file.txt", "x")]);
    symlink(child.path().join("dir"), child.path().join("dir").join("again")).unwrap();

    let err = Comparator::new(CompareOptions {
        follow_symlinks: true,
        ..CompareOptions::default()
    })
    .unwrap()
    .compare(parent.path(), child.path())
    .unwrap_err();
    assert!(matches!(err, DiffError::Walk { .. }));
}

#[test]
fn test_skip_hides_files_below_a_symlink_loop() {
    let parent = tree(&[("x/again/f", "f"), ("x/kept.txt", "k")]);
    let child = tree(&[("x/kept.txt", "k")]);
    symlink(child.path().join("x"), child.path().join("x").join("again")).unwrap();

    let result = Comparator::new(CompareOptions {
        follow_symlinks: true,
        on_unreadable: UnreadablePolicy::Skip,
        ..CompareOptions::default()
    })
    .unwrap()
    .compare(parent.path(), child.path())
    .unwrap();

    assert!(result.removed.is_empty(), "files under a skipped directory must not be removed");
    assert!(result.added.is_empty());
    assert!(result.changed.is_empty());
    assert_eq!(result.skipped, vec!["x/again"]);
}
