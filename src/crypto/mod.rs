// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no storage
//!
//! All functions work exclusively on in-memory values.
//! Providers are interchangeable behind [`CipherProvider`].
mod aes;
mod chacha;
pub mod envelope;
mod provider;

pub use aes::AesGcmProvider;
pub use chacha::ChaChaProvider;
pub use provider::{CipherProvider, Sealed};

use crate::enums::CipherAlgorithm;

/// Boxed provider for the configured algorithm
pub fn provider_for(algorithm: CipherAlgorithm) -> Box<dyn CipherProvider + Send + Sync> {
    match algorithm {
        CipherAlgorithm::Aes256Gcm => Box::new(AesGcmProvider),
        CipherAlgorithm::ChaCha20Poly1305 => Box::new(ChaChaProvider),
    }
}
