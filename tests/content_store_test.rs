//! Content store tests
//!
//! Loads chapter files from a real directory: slots must stay in index
//! order, and a broken or missing file must only cost its own slot.

use lorequest::constants::MAX_CHAPTERS;
use lorequest::content::{ContentLoader, ContentStore};
use std::fs;
use std::path::Path;

fn write_chapter(dir: &Path, index: usize, id: &str) {
    let json = serde_json::json!({
        "id": id,
        "title": format!("Chapter {id}"),
        "lore": "lore",
        "topics": [
            { "id": "t1", "title": "Topic", "lesson": "lesson text" }
        ]
    });
    fs::write(
        dir.join(format!("chapter{index:02}.json")),
        serde_json::to_string_pretty(&json).expect("json"),
    )
    .expect("write chapter");
}

#[test]
fn test_load_dir_preserves_index_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_chapter(dir.path(), 0, "alpha");
    write_chapter(dir.path(), 4, "echo");
    write_chapter(dir.path(), 9, "juliet");

    let store = ContentStore::load_dir(dir.path());

    assert_eq!(store.loaded_count(), 3);
    assert_eq!(store.chapter(0).map(|c| c.id.as_str()), Some("alpha"));
    assert_eq!(store.chapter(4).map(|c| c.id.as_str()), Some("echo"));
    assert_eq!(store.chapter(9).map(|c| c.id.as_str()), Some("juliet"));
    for index in [1, 2, 3, 5, 6, 7, 8] {
        assert!(!store.has_chapter(index), "slot {index} should be empty");
    }
}

#[test]
fn test_broken_file_only_costs_its_own_slot() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_chapter(dir.path(), 0, "alpha");
    fs::write(dir.path().join("chapter01.json"), "{ not json").expect("write");
    write_chapter(dir.path(), 2, "charlie");

    let store = ContentStore::load_dir(dir.path());

    assert!(store.has_chapter(0));
    assert!(!store.has_chapter(1));
    assert!(store.has_chapter(2));
}

#[test]
fn test_empty_directory_yields_all_empty_slots() {
    let dir = tempfile::tempdir().expect("tempdir");

    let store = ContentStore::load_dir(dir.path());

    assert_eq!(store.loaded_count(), 0);
}

#[test]
fn test_missing_directory_yields_all_empty_slots() {
    let store = ContentStore::load_dir(Path::new("/nonexistent/lorequest-content"));
    assert_eq!(store.loaded_count(), 0);
}

#[test]
fn test_loader_resolves_all_slots() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_chapter(dir.path(), 0, "alpha");
    write_chapter(dir.path(), 1, "bravo");

    let loader = ContentLoader::spawn(Some(dir.path().to_path_buf()));
    let store = loader.join();

    assert_eq!(store.loaded_count(), 2);
    assert!(store.has_chapter(0));
    assert!(store.has_chapter(1));
    assert!(store.chapter(MAX_CHAPTERS).is_none());
}

#[test]
fn test_builtin_loader_spawn() {
    let loader = ContentLoader::spawn(None);
    let store = loader.join();

    assert!(store.has_chapter(0));
    assert!(store.loaded_count() >= 1);
}

#[test]
fn test_chapter_with_unknown_quiz_type_degrades_to_empty_slot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json = serde_json::json!({
        "id": "bad-quiz",
        "title": "Chapter",
        "lore": "lore",
        "topics": [
            {
                "id": "t1",
                "title": "Topic",
                "lesson": "lesson",
                "quiz": { "type": "essay", "prompt": "write" }
            }
        ]
    });
    fs::write(
        dir.path().join("chapter00.json"),
        serde_json::to_string(&json).expect("json"),
    )
    .expect("write");

    let store = ContentStore::load_dir(dir.path());

    assert!(!store.has_chapter(0));
}
