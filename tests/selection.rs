use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use codeprint_cli::lang::LanguageRegistry;
use codeprint_cli::select::{self, errors::SelectError};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn names(batch: &[PathBuf]) -> BTreeSet<String> {
    batch
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn selects_matching_files_recursively() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "src/a.py", "print('a')\n");
    write(root, "src/sub/b.py", "print('b')\n");
    write(root, "src/c.txt", "not source\n");

    let registry = LanguageRegistry::new();
    let batch = select::select(root, "python", &registry).unwrap();

    assert_eq!(
        names(&batch),
        BTreeSet::from(["a.py".to_string(), "b.py".to_string()])
    );
    for path in &batch {
        assert!(path.is_absolute());
    }
}

#[test]
fn selection_is_idempotent_on_an_unchanged_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "one.rb", "puts 1\n");
    write(root, "deep/two.rhtml", "<%= 2 %>\n");
    write(root, "deep/er/three.rb", "puts 3\n");

    let registry = LanguageRegistry::new();
    let first = select::select(root, "ruby", &registry).unwrap();
    let second = select::select(root, "ruby", &registry).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn suffix_match_is_case_insensitive_on_disk() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "LOUD.PY", "\n");
    write(root, "quiet.py", "\n");

    let registry = LanguageRegistry::new();
    let batch = select::select(root, "python", &registry).unwrap();
    assert_eq!(batch.len(), 2);
}

#[test]
fn file_root_yields_singleton_or_empty() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "only.py", "pass\n");
    write(root, "readme.md", "# hi\n");

    let registry = LanguageRegistry::new();

    let hit = select::select(&root.join("only.py"), "python", &registry).unwrap();
    assert_eq!(names(&hit), BTreeSet::from(["only.py".to_string()]));

    let miss = select::select(&root.join("readme.md"), "python", &registry).unwrap();
    assert!(miss.is_empty());
}

#[test]
fn empty_directory_yields_empty_batch() {
    let tmp = TempDir::new().unwrap();
    let registry = LanguageRegistry::new();
    let batch = select::select(tmp.path(), "java", &registry).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn missing_root_fails_with_path_not_found() {
    let tmp = TempDir::new().unwrap();
    let registry = LanguageRegistry::new();
    let err = select::select(&tmp.path().join("nope"), "python", &registry).unwrap_err();
    assert!(matches!(err, SelectError::PathNotFound(_)));
}

#[test]
fn unknown_language_fails_before_touching_disk() {
    let tmp = TempDir::new().unwrap();
    let registry = LanguageRegistry::new();
    let err = select::select(tmp.path(), "klingon", &registry).unwrap_err();
    assert!(matches!(err, SelectError::Lang(_)));
}

#[test]
fn order_is_deterministic_within_a_run() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    for name in ["z.py", "a.py", "m.py"] {
        write(root, name, "\n");
    }

    let registry = LanguageRegistry::new();
    let batch = select::select(root, "python", &registry).unwrap();
    let listed: Vec<_> = batch
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(listed, ["a.py", "m.py", "z.py"]);
}
