// src/config/open.rs
//! Construction of the store and vault a config describes

use crate::config::Config;
use crate::crypto::{provider_for, CipherProvider};
use crate::enums::StorageBackend;
use crate::error::ConfigError;
use crate::store::{FileStore, KeyValueStore, MemoryStore};
use crate::vault::{CredentialVault, RecordNames};

pub type DynStore = Box<dyn KeyValueStore + Send + Sync>;
pub type DynVault = CredentialVault<DynStore, Box<dyn CipherProvider + Send + Sync>>;

pub fn open_store(config: &Config) -> Result<DynStore, ConfigError> {
    let storage = &config.storage;
    let store: DynStore = match storage.backend {
        StorageBackend::Memory => match storage.quota_bytes {
            Some(limit) => Box::new(MemoryStore::with_quota(limit)),
            None => Box::new(MemoryStore::new()),
        },
        StorageBackend::File => {
            let path = match &storage.path {
                Some(path) => path.clone(),
                None => FileStore::default_path()?,
            };
            Box::new(FileStore::new(path))
        }
    };
    Ok(store)
}

pub fn open_vault(config: &Config) -> Result<DynVault, ConfigError> {
    let store = open_store(config)?;
    let vault = CredentialVault::with_cipher(store, provider_for(config.cipher.algorithm))
        .with_records(RecordNames::from_namespace(&config.records.namespace));
    Ok(vault)
}
