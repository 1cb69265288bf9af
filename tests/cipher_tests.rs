// tests/cipher_tests.rs
mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use credential_vault::consts::{KEY_LEN, NONCE_LEN};
use credential_vault::crypto::{AesGcmProvider, ChaChaProvider, CipherProvider};
use credential_vault::error::CipherError;
use credential_vault::{CipherAlgorithm, VaultKey32};

fn providers() -> Vec<Box<dyn CipherProvider>> {
    vec![Box::new(AesGcmProvider), Box::new(ChaChaProvider)]
}

/// Flip one bit of a base64 field and re-encode it
fn flip_bit(encoded: &str, index: usize) -> String {
    let mut bytes = STANDARD.decode(encoded).unwrap();
    bytes[index] ^= 0x01;
    STANDARD.encode(bytes)
}

#[test]
fn test_generate_key_is_random_and_32_bytes() {
    common::setup();
    let provider = AesGcmProvider;
    let key1 = provider.generate_key().unwrap();
    let key2 = provider.generate_key().unwrap();
    assert_eq!(key1.expose_secret().len(), KEY_LEN);
    assert_ne!(
        key1.expose_secret().as_slice(),
        key2.expose_secret().as_slice()
    );
}

#[test]
fn test_export_key_is_base64_and_deterministic() {
    let provider = AesGcmProvider;
    let key = VaultKey32::new([0x42; 32]);

    assert_eq!(
        provider.export_key(&key),
        "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI="
    );
    assert_eq!(provider.export_key(&key), provider.export_key(&key));
}

#[test]
fn test_import_key_inverts_export() {
    for provider in providers() {
        let key = provider.generate_key().unwrap();
        let exported = provider.export_key(&key);
        let imported = provider.import_key(&exported).unwrap();
        assert_eq!(key.expose_secret(), imported.expose_secret());
    }
}

#[test]
fn test_import_key_rejects_bad_encodings() {
    let provider = AesGcmProvider;

    for bad in [
        "",
        "not base64 at all!",
        "QkJCQkJCQkJCQkJCQkJCQg==", // 16 bytes
        "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJC", // 33 bytes
    ] {
        assert!(
            matches!(provider.import_key(bad), Err(CipherError::InvalidKeyEncoding)),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_encrypt_decrypt_roundtrip_in_memory() {
    common::setup();
    for provider in providers() {
        let key = provider.generate_key().unwrap();
        for text in ["sk-testkey1234567890", "Attack at dawn!", "鍵 🔑 ключ", ""] {
            let sealed = provider.encrypt(text, &key).unwrap();
            let opened = provider
                .decrypt(&sealed.ciphertext, &sealed.nonce, &key)
                .unwrap();
            assert_eq!(opened.expose_secret(), text, "{}", provider.algorithm());
        }
    }
}

#[test]
fn test_ciphertext_carries_tag_and_nonce_is_96_bits() {
    for provider in providers() {
        let key = provider.generate_key().unwrap();
        let sealed = provider.encrypt("sk-abcdefghijklmnopqrst", &key).unwrap();

        let ciphertext = STANDARD.decode(&sealed.ciphertext).unwrap();
        let nonce = STANDARD.decode(&sealed.nonce).unwrap();
        assert_eq!(ciphertext.len(), "sk-abcdefghijklmnopqrst".len() + 16);
        assert_eq!(nonce.len(), NONCE_LEN);
    }
}

#[test]
fn test_same_plaintext_twice_uses_fresh_nonce() {
    for provider in providers() {
        let key = provider.generate_key().unwrap();
        let first = provider.encrypt("same secret", &key).unwrap();
        let second = provider.encrypt("same secret", &key).unwrap();

        assert_ne!(first.nonce, second.nonce);
        assert_ne!(first.ciphertext, second.ciphertext);
    }
}

#[test]
fn test_decrypt_fails_with_wrong_key() {
    for provider in providers() {
        let key1 = provider.generate_key().unwrap();
        let key2 = provider.generate_key().unwrap();
        let sealed = provider.encrypt("secret", &key1).unwrap();

        let wrong = provider.decrypt(&sealed.ciphertext, &sealed.nonce, &key2);
        assert!(matches!(wrong, Err(CipherError::AuthenticationFailed)));
    }
}

#[test]
fn test_decrypt_fails_on_tampered_ciphertext() {
    for provider in providers() {
        let key = provider.generate_key().unwrap();
        let sealed = provider.encrypt("sk-testkey1234567890", &key).unwrap();

        // first byte is ciphertext body, last byte is inside the tag
        let body = flip_bit(&sealed.ciphertext, 0);
        let len = STANDARD.decode(&sealed.ciphertext).unwrap().len();
        let tag = flip_bit(&sealed.ciphertext, len - 1);

        for tampered in [body, tag] {
            let result = provider.decrypt(&tampered, &sealed.nonce, &key);
            assert!(matches!(result, Err(CipherError::AuthenticationFailed)));
        }
    }
}

#[test]
fn test_decrypt_fails_with_nonce_from_another_encryption() {
    for provider in providers() {
        let key = provider.generate_key().unwrap();
        let first = provider.encrypt("one", &key).unwrap();
        let second = provider.encrypt("two", &key).unwrap();

        let mixed = provider.decrypt(&first.ciphertext, &second.nonce, &key);
        assert!(matches!(mixed, Err(CipherError::AuthenticationFailed)));
    }
}

#[test]
fn test_decrypt_reports_malformed_records() {
    let provider = AesGcmProvider;
    let key = provider.generate_key().unwrap();
    let sealed = provider.encrypt("secret", &key).unwrap();

    let short_nonce = STANDARD.encode([0u8; 8]);
    assert!(matches!(
        provider.decrypt(&sealed.ciphertext, &short_nonce, &key),
        Err(CipherError::MalformedRecord("nonce"))
    ));
    assert!(matches!(
        provider.decrypt("%%%", &sealed.nonce, &key),
        Err(CipherError::MalformedRecord("ciphertext"))
    ));
}

#[test]
fn test_providers_do_not_open_each_others_ciphertext() {
    let aes = AesGcmProvider;
    let chacha = ChaChaProvider;
    let key = aes.generate_key().unwrap();

    let sealed = aes.encrypt("secret", &key).unwrap();
    assert!(matches!(
        chacha.decrypt(&sealed.ciphertext, &sealed.nonce, &key),
        Err(CipherError::AuthenticationFailed)
    ));
    assert_eq!(aes.algorithm(), CipherAlgorithm::Aes256Gcm);
    assert_eq!(chacha.algorithm(), CipherAlgorithm::ChaCha20Poly1305);
}
