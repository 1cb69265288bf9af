// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the enums that represent user-visible choices:
//! the AEAD protecting the credential and the persistence backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CipherAlgorithm {
    #[default]
    Aes256Gcm,
    ChaCha20Poly1305,
}

impl CipherAlgorithm {
    /// Tag written into the ciphertext envelope
    pub const fn tag(self) -> &'static str {
        match self {
            CipherAlgorithm::Aes256Gcm => "aes256gcm",
            CipherAlgorithm::ChaCha20Poly1305 => "chacha20poly1305",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "aes256gcm" => Some(CipherAlgorithm::Aes256Gcm),
            "chacha20poly1305" => Some(CipherAlgorithm::ChaCha20Poly1305),
            _ => None,
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Where the vault records are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}
