// src/error.rs
//! Public error types for the entire crate
//!
//! The vault never lets these escape through `save`/`get`/`remove`/`has`;
//! they surface only through the `try_*` variants and in log fields.

use thiserror::Error;

use crate::enums::CipherAlgorithm;

/// Failures of the cipher provider
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("secure random source unavailable: {0}")]
    CryptoUnavailable(String),

    #[error("stored key is not a valid 256-bit key encoding")]
    InvalidKeyEncoding,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("malformed {0} record")]
    MalformedRecord(&'static str),
}

/// Failures of the persistence substrate
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage quota exceeded: need {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Internal failure of a vault operation
#[derive(Error, Debug)]
pub enum VaultError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("persistence error: {0}")]
    Store(#[from] StoreError),

    #[error("no credential stored")]
    NotFound,

    #[error("ciphertext was produced under a different key")]
    KeyMismatch,

    #[error("ciphertext uses {stored}, vault is configured for {active}")]
    AlgorithmMismatch {
        stored: CipherAlgorithm,
        active: CipherAlgorithm,
    },

    #[error("unsupported ciphertext envelope: {0}")]
    UnsupportedEnvelope(String),
}

/// Flat classification of [`VaultError`] for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultErrorKind {
    CryptoUnavailable,
    InvalidKeyEncoding,
    AuthenticationFailed,
    MalformedRecord,
    Persistence,
    NotFound,
    KeyMismatch,
    AlgorithmMismatch,
    UnsupportedEnvelope,
}

impl VaultError {
    pub fn kind(&self) -> VaultErrorKind {
        match self {
            Self::Cipher(e) => match e {
                CipherError::CryptoUnavailable(_) => VaultErrorKind::CryptoUnavailable,
                CipherError::InvalidKeyEncoding => VaultErrorKind::InvalidKeyEncoding,
                CipherError::AuthenticationFailed => VaultErrorKind::AuthenticationFailed,
                CipherError::MalformedRecord(_) => VaultErrorKind::MalformedRecord,
            },
            Self::Store(_) => VaultErrorKind::Persistence,
            Self::NotFound => VaultErrorKind::NotFound,
            Self::KeyMismatch => VaultErrorKind::KeyMismatch,
            Self::AlgorithmMismatch { .. } => VaultErrorKind::AlgorithmMismatch,
            Self::UnsupportedEnvelope(_) => VaultErrorKind::UnsupportedEnvelope,
        }
    }
}

/// Error reported by a completion service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("completion service rejected the request: {0}")]
    Rejected(String),

    #[error("completion service unreachable: {0}")]
    Transport(String),

    #[error("unexpected completion service response: {0}")]
    InvalidResponse(String),
}

/// Error type of the agents client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("no API credential loaded; initialize the client first")]
    NotInitialized,

    #[error("agent not found: {0}")]
    AgentNotFound(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Error loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("no data directory available for the file store")]
    NoDataDir,
}

pub type CipherResult<T> = std::result::Result<T, CipherError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type VaultResult<T> = std::result::Result<T, VaultError>;
pub type ClientResult<T> = std::result::Result<T, ClientError>;
