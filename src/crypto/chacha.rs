// src/crypto/chacha.rs
//! ChaCha20-Poly1305 provider, for platforms without AES acceleration

use chacha20poly1305::ChaCha20Poly1305;

use super::provider::{open, seal, CipherProvider, Sealed};
use crate::aliases::{Secret, VaultKey32};
use crate::enums::CipherAlgorithm;
use crate::error::CipherResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChaChaProvider;

impl CipherProvider for ChaChaProvider {
    fn algorithm(&self) -> CipherAlgorithm {
        CipherAlgorithm::ChaCha20Poly1305
    }

    fn encrypt(&self, plaintext: &str, key: &VaultKey32) -> CipherResult<Sealed> {
        seal::<ChaCha20Poly1305>(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, nonce: &str, key: &VaultKey32) -> CipherResult<Secret> {
        open::<ChaCha20Poly1305>(ciphertext, nonce, key)
    }
}
