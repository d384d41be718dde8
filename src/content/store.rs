//! Chapter content store: ten fixed slots, loaded independently.
//!
//! Every chapter index resolves on its own; a missing or unparseable file
//! leaves an empty slot and never aborts the sibling loads. Slot order is
//! always chapter-index order no matter which load finishes first.

use crate::constants::MAX_CHAPTERS;
use crate::content::types::Chapter;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Built-in chapter set compiled into the binary. Slots authored as `None`
/// render as "no content yet" portals on the map.
const BUILTIN_CHAPTERS: [Option<&str>; MAX_CHAPTERS] = [
    Some(include_str!("../../content/chapter00.json")),
    Some(include_str!("../../content/chapter01.json")),
    Some(include_str!("../../content/chapter02.json")),
    Some(include_str!("../../content/chapter03.json")),
    Some(include_str!("../../content/chapter04.json")),
    None,
    None,
    None,
    None,
    None,
];

/// Index-ordered collection of chapter slots.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    slots: Vec<Option<Chapter>>,
}

impl ContentStore {
    /// A store with all ten slots empty.
    pub fn empty() -> Self {
        Self {
            slots: vec![None; MAX_CHAPTERS],
        }
    }

    /// Builds a store from pre-resolved slots, padding or truncating to the
    /// fixed chapter count. Mainly used by tests.
    pub fn from_chapters(chapters: Vec<Option<Chapter>>) -> Self {
        let mut slots = chapters;
        slots.resize(MAX_CHAPTERS, None);
        Self { slots }
    }

    /// Parses the compiled-in chapter set. Per-slot parse failures degrade
    /// to empty slots.
    pub fn builtin() -> Self {
        let slots = BUILTIN_CHAPTERS
            .iter()
            .map(|src| src.and_then(|s| serde_json::from_str(s).ok()))
            .collect();
        Self { slots }
    }

    /// Loads `chapter00.json .. chapter09.json` from a directory, one
    /// worker thread per index, each writing only its own slot.
    pub fn load_dir(dir: &Path) -> Self {
        let mut slots: Vec<Option<Chapter>> = Vec::with_capacity(MAX_CHAPTERS);
        thread::scope(|scope| {
            let handles: Vec<_> = (0..MAX_CHAPTERS)
                .map(|index| scope.spawn(move || load_chapter_file(dir, index)))
                .collect();
            for handle in handles {
                // A panicked worker only costs its own slot
                slots.push(handle.join().unwrap_or(None));
            }
        });
        Self { slots }
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn has_chapter(&self, index: usize) -> bool {
        self.chapter(index).is_some()
    }

    /// Number of slots that resolved to real content.
    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

fn load_chapter_file(dir: &Path, index: usize) -> Option<Chapter> {
    let path = dir.join(format!("chapter{index:02}.json"));
    let text = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

/// Handle to a content load running on a background thread.
///
/// The UI polls `is_loading()` each frame and takes the finished store
/// once all ten slots have resolved.
pub struct ContentLoader {
    handle: JoinHandle<ContentStore>,
}

impl ContentLoader {
    /// Starts loading from `dir`, or the built-in set when no directory is
    /// given.
    pub fn spawn(dir: Option<PathBuf>) -> Self {
        let handle = thread::spawn(move || match dir {
            Some(dir) => ContentStore::load_dir(&dir),
            None => ContentStore::builtin(),
        });
        Self { handle }
    }

    pub fn is_loading(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Blocks until every slot has resolved. A panicked loader thread
    /// degrades to an all-empty store.
    pub fn join(self) -> ContentStore {
        self.handle.join().unwrap_or_else(|_| ContentStore::empty())
    }
}
