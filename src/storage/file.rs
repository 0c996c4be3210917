//! FileStorage - one file per key inside a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStorage;
use crate::error::StorageError;

/// Directory-backed key-value storage.
///
/// Each key maps to `<dir>/<key>.json`. Writes go to a temp file first and
/// are renamed into place, so a reader never sees a half-written value.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::Unavailable(format!("invalid storage key {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        write_atomic(&path, value.as_bytes())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let tmp = path.with_extension("json.tmp");

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;

    Ok(())
}
