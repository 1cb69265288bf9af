// src/store/file.rs
//! Durable store backed by a single JSON object file
//!
//! Every write re-reads the file, applies the change and atomically
//! replaces it through a temp file in the same directory.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::KeyValueStore;
use crate::consts::DEFAULT_STORE_FILE;
use crate::error::{ConfigError, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `<data-local-dir>/credential-vault/store.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::data_local_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(base.join("credential-vault").join(DEFAULT_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, items)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, name: &str) -> StoreResult<Option<String>> {
        Ok(self.read_all()?.remove(name))
    }

    fn set_item(&self, name: &str, value: &str) -> StoreResult<()> {
        let mut items = self.read_all()?;
        items.insert(name.to_owned(), value.to_owned());
        self.write_all(&items)
    }

    fn remove_item(&self, name: &str) -> StoreResult<()> {
        let mut items = self.read_all()?;
        if items.remove(name).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}
