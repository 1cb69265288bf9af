// src/crypto/envelope.rs
//! Versioned wrapper for the ciphertext record
//!
//! Layout: `v1.<algorithm>.<key-id>.<base64 ciphertext>`.
//! A record with no separator is the untagged layout (bare base64,
//! AES-256-GCM) and is still readable; it carries no key id.

use crate::aliases::VaultKey32;
use crate::consts::{ENVELOPE_SEPARATOR, ENVELOPE_VERSION, KEY_ID_CONTEXT, KEY_ID_HEX_LEN};
use crate::enums::CipherAlgorithm;
use crate::error::{VaultError, VaultResult};

/// Parsed view of a ciphertext record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub algorithm: CipherAlgorithm,
    pub key_id: Option<&'a str>,
    pub ciphertext: &'a str,
}

/// Short stable identifier of a key, safe to persist and log
pub fn key_id(key: &VaultKey32) -> String {
    let derived = blake3::derive_key(KEY_ID_CONTEXT, key.expose_secret());
    hex::encode(&derived[..KEY_ID_HEX_LEN / 2])
}

pub fn wrap(algorithm: CipherAlgorithm, key_id: &str, ciphertext: &str) -> String {
    let sep = ENVELOPE_SEPARATOR;
    format!(
        "{ENVELOPE_VERSION}{sep}{}{sep}{key_id}{sep}{ciphertext}",
        algorithm.tag()
    )
}

pub fn parse(record: &str) -> VaultResult<Envelope<'_>> {
    if !record.contains(ENVELOPE_SEPARATOR) {
        return Ok(Envelope {
            algorithm: CipherAlgorithm::Aes256Gcm,
            key_id: None,
            ciphertext: record,
        });
    }

    let mut parts = record.splitn(4, ENVELOPE_SEPARATOR);
    let (Some(version), Some(tag), Some(key_id), Some(ciphertext)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(VaultError::UnsupportedEnvelope("truncated".into()));
    };

    if version != ENVELOPE_VERSION {
        return Err(VaultError::UnsupportedEnvelope(format!("version {version}")));
    }
    let algorithm = CipherAlgorithm::from_tag(tag)
        .ok_or_else(|| VaultError::UnsupportedEnvelope(format!("algorithm {tag}")))?;
    if key_id.len() != KEY_ID_HEX_LEN || !key_id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(VaultError::UnsupportedEnvelope("key id".into()));
    }

    Ok(Envelope {
        algorithm,
        key_id: Some(key_id),
        ciphertext,
    })
}
