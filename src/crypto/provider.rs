// src/crypto/provider.rs
//! The cipher provider seam
//!
//! A provider owns key generation, key (de)serialization and
//! encrypt/decrypt of UTF-8 text. Nonces are drawn inside `encrypt`;
//! there is no way for a caller to supply one.

use aes_gcm::aead::{Aead, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroize;

use crate::aliases::{Secret, VaultKey32};
use crate::consts::{KEY_LEN, NONCE_LEN};
use crate::enums::CipherAlgorithm;
use crate::error::{CipherError, CipherResult};

/// Output of a single encryption: base64 ciphertext (tag included) and base64 nonce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub ciphertext: String,
    pub nonce: String,
}

pub trait CipherProvider {
    fn algorithm(&self) -> CipherAlgorithm;

    /// Encrypt `plaintext` under `key` with a freshly drawn random nonce.
    fn encrypt(&self, plaintext: &str, key: &VaultKey32) -> CipherResult<Sealed>;

    /// Decrypt a record produced by [`CipherProvider::encrypt`].
    ///
    /// Wrong key, tampered ciphertext and mismatched nonce all fail with
    /// `AuthenticationFailed`; no partial plaintext is ever returned.
    fn decrypt(&self, ciphertext: &str, nonce: &str, key: &VaultKey32) -> CipherResult<Secret>;

    /// Generate a new random 256-bit key
    fn generate_key(&self) -> CipherResult<VaultKey32> {
        let mut raw = [0u8; KEY_LEN];
        fill_random(&mut raw)?;
        let key = VaultKey32::new(raw);
        raw.zeroize();
        Ok(key)
    }

    /// Raw key bytes, base64 encoded
    fn export_key(&self, key: &VaultKey32) -> String {
        STANDARD.encode(key.expose_secret())
    }

    fn import_key(&self, encoded: &str) -> CipherResult<VaultKey32> {
        let mut bytes = STANDARD
            .decode(encoded)
            .map_err(|_| CipherError::InvalidKeyEncoding)?;
        if bytes.len() != KEY_LEN {
            bytes.zeroize();
            return Err(CipherError::InvalidKeyEncoding);
        }
        let mut raw = [0u8; KEY_LEN];
        raw.copy_from_slice(&bytes);
        bytes.zeroize();
        let key = VaultKey32::new(raw);
        raw.zeroize();
        Ok(key)
    }
}

impl<T: CipherProvider + ?Sized> CipherProvider for Box<T> {
    fn algorithm(&self) -> CipherAlgorithm {
        (**self).algorithm()
    }

    fn encrypt(&self, plaintext: &str, key: &VaultKey32) -> CipherResult<Sealed> {
        (**self).encrypt(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, nonce: &str, key: &VaultKey32) -> CipherResult<Secret> {
        (**self).decrypt(ciphertext, nonce, key)
    }

    fn generate_key(&self) -> CipherResult<VaultKey32> {
        (**self).generate_key()
    }

    fn export_key(&self, key: &VaultKey32) -> String {
        (**self).export_key(key)
    }

    fn import_key(&self, encoded: &str) -> CipherResult<VaultKey32> {
        (**self).import_key(encoded)
    }
}

/// Fill `buf` from the operating system CSPRNG
pub(crate) fn fill_random(buf: &mut [u8]) -> CipherResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CipherError::CryptoUnavailable(e.to_string()))
}

/// Shared AEAD sealing for every 256-bit / 96-bit-nonce algorithm
pub(crate) fn seal<A: Aead + KeyInit>(plaintext: &str, key: &VaultKey32) -> CipherResult<Sealed> {
    let cipher =
        A::new_from_slice(key.expose_secret()).map_err(|_| CipherError::InvalidKeyEncoding)?;

    let mut nonce = [0u8; NONCE_LEN];
    fill_random(&mut nonce)?;

    let ciphertext = cipher
        .encrypt(Nonce::<A>::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|_| CipherError::CryptoUnavailable("AEAD encryption failed".into()))?;

    Ok(Sealed {
        ciphertext: STANDARD.encode(ciphertext),
        nonce: STANDARD.encode(nonce),
    })
}

/// Inverse of [`seal`]
pub(crate) fn open<A: Aead + KeyInit>(
    ciphertext: &str,
    nonce: &str,
    key: &VaultKey32,
) -> CipherResult<Secret> {
    let nonce = STANDARD
        .decode(nonce)
        .map_err(|_| CipherError::MalformedRecord("nonce"))?;
    if nonce.len() != NONCE_LEN {
        return Err(CipherError::MalformedRecord("nonce"));
    }
    let ciphertext = STANDARD
        .decode(ciphertext)
        .map_err(|_| CipherError::MalformedRecord("ciphertext"))?;

    let cipher =
        A::new_from_slice(key.expose_secret()).map_err(|_| CipherError::InvalidKeyEncoding)?;
    let plaintext = cipher
        .decrypt(Nonce::<A>::from_slice(&nonce), ciphertext.as_slice())
        .map_err(|_| CipherError::AuthenticationFailed)?;

    match String::from_utf8(plaintext) {
        Ok(text) => Ok(Secret::new(text)),
        Err(e) => {
            e.into_bytes().zeroize();
            Err(CipherError::MalformedRecord("plaintext"))
        }
    }
}
