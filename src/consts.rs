// src/consts.rs
//! Shared constants — security parameters and defaults

/// Raw key length for every supported AEAD (256 bit)
pub const KEY_LEN: usize = 32;

/// AEAD nonce length (96 bit, the standard GCM / ChaCha20-Poly1305 size)
pub const NONCE_LEN: usize = 12;

/// Namespace the three vault record names are derived from
pub const DEFAULT_RECORD_NAMESPACE: &str = "openai-agents-app";

/// Record holding the JSON list of agent definitions
pub const AGENTS_RECORD: &str = "openai-agents-data";

/// Current ciphertext envelope version tag
pub const ENVELOPE_VERSION: &str = "v1";

/// Separator between envelope fields. Never part of the standard base64 alphabet.
pub const ENVELOPE_SEPARATOR: char = '.';

/// Hex characters of the BLAKE3-derived key id carried in the envelope
pub const KEY_ID_HEX_LEN: usize = 16;

/// Context string for deriving key ids, never reuse elsewhere
pub const KEY_ID_CONTEXT: &str = "credential-vault 2025 key-id v1";

/// Credential prefix accepted by the format validator
pub const DEFAULT_CREDENTIAL_PREFIX: &str = "sk-";

/// Minimum credential length (characters) accepted by the format validator
pub const DEFAULT_CREDENTIAL_MIN_LEN: usize = 20;

/// Config file consulted when `CREDENTIAL_VAULT_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "credential-vault.toml";

/// File name of the JSON store inside the data directory
pub const DEFAULT_STORE_FILE: &str = "store.json";
