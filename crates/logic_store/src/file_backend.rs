//! JSON files on disk, one per cached closure.
//!
//! Layout: `<root>/equivalents/<notation>/<formula>.json`, each holding a JSON
//! array of normal-form strings.

use crate::backend::{CacheKey, StorageBackend};
use crate::error::StoreError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

const EQUIVALENTS_DIR: &str = "equivalents";

#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`. Formulas are used as file names
    /// verbatim, so anything that would escape the notation directory is
    /// rejected.
    pub fn entry_path(&self, key: &CacheKey) -> Result<PathBuf, StoreError> {
        check_component(&key.notation)?;
        check_component(&key.formula)?;
        Ok(self
            .root
            .join(EQUIVALENTS_DIR)
            .join(&key.notation)
            .join(format!("{}.json", key.formula)))
    }
}

fn check_component(part: &str) -> Result<(), StoreError> {
    let escapes = part.is_empty()
        || part == "."
        || part == ".."
        || part.contains(['/', '\\', '\0']);
    if escapes {
        return Err(StoreError::InvalidKey(part.to_string()));
    }
    Ok(())
}

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

// Unique per writer, so concurrent saves of one key never share a temp file.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    let seq = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    name.push(format!(".{}.{}.tmp", process::id(), seq));
    path.with_file_name(name)
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<String>>, StoreError> {
        let path = self.entry_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let closure: Vec<String> = serde_json::from_slice(&bytes)?;
        debug!(path = %path.display(), entries = closure.len(), "read cache file");
        Ok(Some(closure))
    }

    fn set(&self, key: &CacheKey, closure: &[String]) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        // Readers only ever see a complete file.
        let tmp = tmp_path(&path);
        fs::write(&tmp, serde_json::to_vec(closure)?)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), entries = closure.len(), "wrote cache file");
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
