// tests/support.rs
//! Test utilities — fault-injecting store and plaintext helpers

use std::sync::Mutex;

use credential_vault::error::{StoreError, StoreResult};
use credential_vault::{CipherProvider, CredentialVault, KeyValueStore, MemoryStore};

/// Memory store whose writes to selected records fail
#[derive(Default)]
#[allow(dead_code)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes_to(&self, name: &str) {
        self.failing.lock().unwrap().push(name.to_owned());
    }
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, name: &str) -> StoreResult<Option<String>> {
        self.inner.get_item(name)
    }

    fn set_item(&self, name: &str, value: &str) -> StoreResult<()> {
        if self.failing.lock().unwrap().iter().any(|n| n == name) {
            return Err(StoreError::Unavailable(format!("injected failure writing {name}")));
        }
        self.inner.set_item(name, value)
    }

    fn remove_item(&self, name: &str) -> StoreResult<()> {
        self.inner.remove_item(name)
    }
}

/// Decrypted secret as a plain `String`, for assertions
#[allow(dead_code)]
pub fn plaintext<S: KeyValueStore, C: CipherProvider>(
    vault: &CredentialVault<S, C>,
) -> Option<String> {
    vault.get().map(|secret| secret.expose_secret().clone())
}

/// Raw value of a record, bypassing the vault
#[allow(dead_code)]
pub fn raw<S: KeyValueStore>(store: &S, name: &str) -> Option<String> {
    store.get_item(name).unwrap()
}
