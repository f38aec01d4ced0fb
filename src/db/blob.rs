//! String-keyed blob storage.
//!
//! The persistence layer only needs two primitives: read the blob stored under
//! a key and replace it wholesale. [`BlobStore`] captures that contract;
//! [`FileBlobStore`] keeps one file per key in the application data directory
//! and [`MemoryBlobStore`] keeps everything in a map.

use crate::libs::data_storage::DataStorage;
use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

pub trait BlobStore {
    /// Returns the blob under `key`, or `None` when nothing was stored.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Replaces the blob under `key`.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Blob store backed by `<dir>/<key>.json` files.
///
/// Writes go to a sibling temporary file that is renamed over the target, so
/// a reader never observes a half-written blob.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform application data directory.
    pub fn in_data_dir() -> Self {
        Self::new(DataStorage::new().base_path())
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &target)
    }
}

/// Blob store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.to_string(), value.to_string());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
