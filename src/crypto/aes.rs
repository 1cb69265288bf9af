// src/crypto/aes.rs
//! AES-256-GCM provider — the default

use aes_gcm::Aes256Gcm;

use super::provider::{open, seal, CipherProvider, Sealed};
use crate::aliases::{Secret, VaultKey32};
use crate::enums::CipherAlgorithm;
use crate::error::CipherResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmProvider;

impl CipherProvider for AesGcmProvider {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::Aes256Gcm
    }

    fn encrypt(&self, plaintext: &str, key: &VaultKey32) -> CipherResult<Sealed> {
        seal::<Aes256Gcm>(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, nonce: &str, key: &VaultKey32) -> CipherResult<Secret> {
        open::<Aes256Gcm>(ciphertext, nonce, key)
    }
}
