// src/lib.rs
//! credential-vault — encrypted at-rest storage for a single API credential
//!
//! Features:
//! - AES-256-GCM (or ChaCha20-Poly1305) with a lazily created, reused key
//! - Fresh random nonce on every save, versioned ciphertext envelope
//! - Pluggable string key-value substrate (memory, JSON file)
//! - Fail-soft `save`/`get`/`remove`/`has` with typed `try_*` diagnostics
//! - Full secure-gate integration: keys and plaintext zeroize on drop

pub mod aliases;
pub mod client;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod store;
pub mod validate;
pub mod vault;

// Re-export everything users need at the crate root
pub use aliases::{Secret, VaultKey32};
pub use client::{AgentRegistry, AgentsClient, CompletionService};
pub use config::{load as load_config, open_vault};
pub use crypto::{AesGcmProvider, ChaChaProvider, CipherProvider};
pub use enums::{CipherAlgorithm, StorageBackend};
pub use error::{CipherError, StoreError, VaultError, VaultErrorKind};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use validate::{validate, FormatIssue, FormatRules};
pub use vault::{CredentialVault, RecordNames};
