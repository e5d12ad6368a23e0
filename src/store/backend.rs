//! Key-value storage backends
//!
//! The aggregate is stored as one string value under one key. Backends only
//! need whole-value get and set; `set` must replace the value atomically.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{StorageError, StorageResult};

/// Device-local key-value storage
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

// =========================================================================
// FileStorage
// =========================================================================

/// One JSON file per key inside a base directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create the backend, creating `base_dir` if needed
    pub fn new(base_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| StorageError::io(&base_dir, e))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let path = self.path_for(key);

        // write beside the target, then rename over it
        let mut tmp =
            NamedTempFile::new_in(&self.base_dir).map_err(|e| StorageError::io(&self.base_dir, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StorageError::io(tmp.path(), e))?;
        tmp.persist(&path)
            .map_err(|e| StorageError::io(&path, e.error))?;

        tracing::trace!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

// =========================================================================
// MemoryStorage
// =========================================================================

/// In-process map, for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Make every subsequent `set` fail
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        if self.read_only {
            return Err(StorageError::Unavailable(format!(
                "storage is read-only, cannot write {key}"
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
