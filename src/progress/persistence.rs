//! Progress persistence: two independently keyed JSON records.
//!
//! Saving and loading return `io::Result` at this seam; the hydration
//! helper is where every failure turns into defaults. Writes are
//! best-effort by design and callers are expected to ignore errors.

use crate::constants::MAX_CHAPTERS;
use crate::progress::ledger::ProgressLedger;
use crate::progress::meta::Meta;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

const FLAGS_FILE: &str = "progress.json";
const META_FILE: &str = "meta.json";

/// Storage seam for the progress ledger.
pub trait ProgressStore {
    fn load_flags(&self) -> io::Result<[bool; MAX_CHAPTERS]>;
    fn save_flags(&self, flags: &[bool; MAX_CHAPTERS]) -> io::Result<()>;
    fn load_meta(&self) -> io::Result<Meta>;
    fn save_meta(&self, meta: &Meta) -> io::Result<()>;
}

/// Builds a ledger from a store, falling back to defaults per record.
///
/// The two records are independent: a corrupt meta file does not cost the
/// completion flags, and vice versa.
pub fn hydrate(store: &dyn ProgressStore) -> ProgressLedger {
    let flags = store.load_flags().unwrap_or([false; MAX_CHAPTERS]);
    let meta = store.load_meta().unwrap_or_default();
    ProgressLedger::new(flags, meta)
}

/// File-backed store writing JSON under the platform config directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at the platform config directory for this game, or at
    /// a dot directory under the home directory when no config directory
    /// can be determined.
    pub fn new() -> io::Result<Self> {
        let dir = match ProjectDirs::from("", "", "lorequest") {
            Some(project_dirs) => project_dirs.config_dir().to_path_buf(),
            None => home_fallback_dir()?,
        };
        Self::with_dir(dir)
    }

    /// Store rooted at an explicit directory. Used by tests.
    pub fn with_dir(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn flags_path(&self) -> PathBuf {
        self.dir.join(FLAGS_FILE)
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }
}

fn home_fallback_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".lorequest"))
}

impl ProgressStore for FileStore {
    fn load_flags(&self) -> io::Result<[bool; MAX_CHAPTERS]> {
        let text = fs::read_to_string(self.flags_path())?;
        let flags: Vec<bool> = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        // Exactly ten entries or the record is treated as absent
        flags.try_into().map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidData, "completion flags array is not length 10")
        })
    }

    fn save_flags(&self, flags: &[bool; MAX_CHAPTERS]) -> io::Result<()> {
        let json = serde_json::to_string(flags.as_slice())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.flags_path(), json)
    }

    fn load_meta(&self) -> io::Result<Meta> {
        let text = fs::read_to_string(self.meta_path())?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn save_meta(&self, meta: &Meta) -> io::Result<()> {
        let json = serde_json::to_string_pretty(meta)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(self.meta_path(), json)
    }
}

/// Store for runs without a persistence backend: loads report not-found,
/// saves succeed without writing anything.
#[derive(Debug, Default)]
pub struct NullStore;

impl ProgressStore for NullStore {
    fn load_flags(&self) -> io::Result<[bool; MAX_CHAPTERS]> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no persistence backend"))
    }

    fn save_flags(&self, _flags: &[bool; MAX_CHAPTERS]) -> io::Result<()> {
        Ok(())
    }

    fn load_meta(&self) -> io::Result<Meta> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no persistence backend"))
    }

    fn save_meta(&self, _meta: &Meta) -> io::Result<()> {
        Ok(())
    }
}
