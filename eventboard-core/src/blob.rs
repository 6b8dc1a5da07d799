//! Key-value blob persistence.
//!
//! The board persists its event list as one opaque blob under a well-known
//! key. `BlobStore` is that boundary; `FileBlobStore` keeps one file per key
//! under the configured data directory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::EventBoardResult;

/// Opaque key-value persistence boundary.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if none has been written.
    fn get(&self, key: &str) -> EventBoardResult<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> EventBoardResult<()>;
}

/// Blob store keeping one file per key under a data directory.
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        FileBlobStore { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> EventBoardResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> EventBoardResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));

        // Write then rename, so a crash never leaves a half-written blob
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// In-memory blob store. Clones share the same backing map, so a second store
/// over a clone sees earlier writes (used to simulate restarts in tests).
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> EventBoardResult<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> EventBoardResult<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("events").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        // Point below a directory that doesn't exist yet
        let mut store = FileBlobStore::new(dir.path().join("data"));

        store.set("events", "[]").unwrap();
        assert_eq!(store.get("events").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileBlobStore::new(dir.path().to_path_buf());

        store.set("events", "first").unwrap();
        store.set("events", "second").unwrap();
        assert_eq!(store.get("events").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_store_clones_share_contents() {
        let mut store = MemoryBlobStore::default();
        let clone = store.clone();

        store.set("events", "[]").unwrap();
        assert_eq!(clone.get("events").unwrap().as_deref(), Some("[]"));
    }
}
