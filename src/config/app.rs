// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::consts::DEFAULT_CONFIG_FILE;
use crate::enums::{CipherAlgorithm, StorageBackend};
use crate::error::ConfigError;
use crate::validate::FormatRules;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: Storage,
    pub records: Records,
    pub cipher: Cipher,
    pub validation: FormatRules,
    pub logging: Logging,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub backend: StorageBackend,
    pub path: Option<PathBuf>,
    pub quota_bytes: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Records {
    pub namespace: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cipher {
    pub algorithm: CipherAlgorithm,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub filter: String,
    pub json: bool,
}

impl Default for Storage {
    fn default() -> Self {
        default_storage()
    }
}

impl Default for Records {
    fn default() -> Self {
        default_records()
    }
}

impl Default for Cipher {
    fn default() -> Self {
        default_cipher()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// `CREDENTIAL_VAULT_CONFIG`, or `credential-vault.toml` in the working directory
pub fn config_path() -> PathBuf {
    std::env::var_os("CREDENTIAL_VAULT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn from_toml_str(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// `Ok(None)` when the file does not exist
pub fn try_load_from(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let conf = from_toml_str(&content).map_err(|source| ConfigError::Toml {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(conf))
}

/// Load config once per process — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut conf = load_from(&config_path());
        apply_store_override(&mut conf, std::env::var_os("CREDENTIAL_VAULT_STORE"));
        conf
    })
}

/// Config at `path`, or the built-in defaults with a warning
pub fn load_from(path: &Path) -> Config {
    // Runs before any subscriber exists, hence stderr
    match try_load_from(path) {
        Ok(Some(conf)) => conf,
        Ok(None) => {
            eprintln!(
                "Warning: {} not found — using built-in defaults",
                path.display()
            );
            Config::default()
        }
        Err(e) => {
            eprintln!("Warning: {e} — using built-in defaults");
            Config::default()
        }
    }
}

/// A store path forces the file backend at that path
pub fn apply_store_override(conf: &mut Config, store: Option<OsString>) {
    if let Some(store) = store {
        conf.storage.backend = StorageBackend::File;
        conf.storage.path = Some(PathBuf::from(store));
    }
}
