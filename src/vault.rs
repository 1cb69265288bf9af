// src/vault.rs
//! Credential vault — encrypted storage of a single secret
//!
//! Three independent records live in the substrate: the exported key,
//! the ciphertext envelope and the nonce. The key is created lazily on
//! the first save and reused afterwards; `remove` leaves it in place.
//!
//! `save`/`get`/`remove`/`has` never surface errors. Their `try_*`
//! counterparts return the typed cause for callers that want it.

use tracing::{debug, info, warn};
use zeroize::Zeroize;

use crate::aliases::{Secret, VaultKey32};
use crate::consts::DEFAULT_RECORD_NAMESPACE;
use crate::crypto::{envelope, AesGcmProvider, CipherProvider};
use crate::enums::CipherAlgorithm;
use crate::error::{VaultError, VaultResult};
use crate::store::KeyValueStore;

/// Names of the three records the vault owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordNames {
    pub key: String,
    pub ciphertext: String,
    pub nonce: String,
}

impl RecordNames {
    pub fn from_namespace(namespace: &str) -> Self {
        Self {
            key: format!("{namespace}-encryption-key"),
            ciphertext: format!("{namespace}-encrypted-api-key"),
            nonce: format!("{namespace}-iv"),
        }
    }
}

impl Default for RecordNames {
    fn default() -> Self {
        Self::from_namespace(DEFAULT_RECORD_NAMESPACE)
    }
}

pub struct CredentialVault<S, C = AesGcmProvider> {
    store: S,
    cipher: C,
    records: RecordNames,
}

impl<S: KeyValueStore> CredentialVault<S> {
    /// Vault over `store` using AES-256-GCM and the default record names
    pub fn new(store: S) -> Self {
        Self::with_cipher(store, AesGcmProvider)
    }
}

impl<S: KeyValueStore, C: CipherProvider> CredentialVault<S, C> {
    pub fn with_cipher(store: S, cipher: C) -> Self {
        Self {
            store,
            cipher,
            records: RecordNames::default(),
        }
    }

    pub fn with_records(mut self, records: RecordNames) -> Self {
        self.records = records;
        self
    }

    pub fn records(&self) -> &RecordNames {
        &self.records
    }

    pub fn algorithm(&self) -> CipherAlgorithm {
        self.cipher.algorithm()
    }

    /// Encrypt and persist `secret`, replacing any stored one.
    ///
    /// Returns `false` on any internal failure. The secret's format is
    /// not checked here; see [`crate::validate`].
    pub fn save(&self, secret: &str) -> bool {
        match self.try_save(secret) {
            Ok(()) => {
                debug!(algorithm = %self.cipher.algorithm(), "credential saved");
                true
            }
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "failed to save credential");
                false
            }
        }
    }

    pub fn try_save(&self, secret: &str) -> VaultResult<()> {
        let key = self.load_or_create_key()?;
        let sealed = self.cipher.encrypt(secret, &key)?;
        let record = envelope::wrap(
            self.cipher.algorithm(),
            &envelope::key_id(&key),
            &sealed.ciphertext,
        );

        // Two independent writes; a failure between them leaves an
        // unreadable pair, which `get` reports as absent.
        self.store.set_item(&self.records.ciphertext, &record)?;
        self.store.set_item(&self.records.nonce, &sealed.nonce)?;
        Ok(())
    }

    /// The stored secret, or `None` when it was never saved or cannot be recovered
    pub fn get(&self) -> Option<Secret> {
        match self.try_get() {
            Ok(secret) => Some(secret),
            Err(VaultError::NotFound) => {
                debug!("no credential stored");
                None
            }
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "stored credential could not be recovered");
                None
            }
        }
    }

    pub fn try_get(&self) -> VaultResult<Secret> {
        let record = self.read_record(&self.records.ciphertext)?;
        let nonce = self.read_record(&self.records.nonce)?;
        let encoded_key = self.read_record(&self.records.key)?;

        let (Some(record), Some(nonce), Some(mut encoded_key)) = (record, nonce, encoded_key)
        else {
            return Err(VaultError::NotFound);
        };

        let key = self.cipher.import_key(&encoded_key);
        encoded_key.zeroize();
        let key = key?;

        let parsed = envelope::parse(&record)?;
        let active = self.cipher.algorithm();
        if parsed.algorithm != active {
            return Err(VaultError::AlgorithmMismatch {
                stored: parsed.algorithm,
                active,
            });
        }
        if let Some(stored_id) = parsed.key_id {
            if stored_id != envelope::key_id(&key) {
                return Err(VaultError::KeyMismatch);
            }
        }

        Ok(self.cipher.decrypt(parsed.ciphertext, &nonce, &key)?)
    }

    /// Delete the ciphertext and nonce. Idempotent; the key record stays.
    pub fn remove(&self) {
        match self.try_remove() {
            Ok(()) => debug!("credential removed"),
            Err(e) => warn!(kind = ?e.kind(), error = %e, "failed to remove credential"),
        }
    }

    pub fn try_remove(&self) -> VaultResult<()> {
        let ciphertext = self.store.remove_item(&self.records.ciphertext);
        let nonce = self.store.remove_item(&self.records.nonce);
        ciphertext?;
        nonce?;
        Ok(())
    }

    /// Presence check only: `true` iff a ciphertext record exists.
    pub fn has(&self) -> bool {
        match self.store.get_item(&self.records.ciphertext) {
            Ok(record) => record.is_some(),
            Err(e) => {
                debug!(error = %e, "presence check could not read the store");
                false
            }
        }
    }

    /// Delete all three records, including the key.
    ///
    /// The only way to recover from a corrupted key record, which would
    /// otherwise make every `save` fail.
    pub fn purge(&self) -> bool {
        let result = self.try_remove().and_then(|()| {
            self.store
                .remove_item(&self.records.key)
                .map_err(VaultError::from)
        });
        match result {
            Ok(()) => {
                info!("credential and encryption key purged");
                true
            }
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "failed to purge vault records");
                false
            }
        }
    }

    /// Identifier of the stored key, if one exists and imports cleanly
    pub fn key_fingerprint(&self) -> Option<String> {
        let mut encoded = self.read_record(&self.records.key).ok()??;
        let key = self.cipher.import_key(&encoded);
        encoded.zeroize();
        key.ok().map(|key| envelope::key_id(&key))
    }

    /// Empty records count as missing
    fn read_record(&self, name: &str) -> VaultResult<Option<String>> {
        Ok(self.store.get_item(name)?.filter(|value| !value.is_empty()))
    }

    fn load_or_create_key(&self) -> VaultResult<VaultKey32> {
        if let Some(mut encoded) = self.read_record(&self.records.key)? {
            let key = self.cipher.import_key(&encoded);
            encoded.zeroize();
            return Ok(key?);
        }

        let key = self.cipher.generate_key()?;
        let mut exported = self.cipher.export_key(&key);
        let written = self.store.set_item(&self.records.key, &exported);
        exported.zeroize();
        written?;

        info!(algorithm = %self.cipher.algorithm(), "generated new credential encryption key");
        Ok(key)
    }
}
