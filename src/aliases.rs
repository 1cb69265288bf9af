// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret-carrying types used throughout credential-vault.
//! Both zeroize on drop and redact themselves in `Debug` output.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(VaultKey32, 32); // 256-bit AEAD key guarding the stored credential

// Dynamic secrets
dynamic_alias!(Secret, String); // Plaintext credential, only ever held in memory
