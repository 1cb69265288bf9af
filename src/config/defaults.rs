// src/config/defaults.rs
use crate::config::app::{Cipher, Logging, Records, Storage};
use crate::consts::DEFAULT_RECORD_NAMESPACE;
use crate::enums::{CipherAlgorithm, StorageBackend};

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_storage() -> Storage {
    Storage {
        backend: StorageBackend::File,
        path: None,
        quota_bytes: None,
    }
}

pub fn default_records() -> Records {
    Records {
        namespace: DEFAULT_RECORD_NAMESPACE.into(),
    }
}

pub fn default_cipher() -> Cipher {
    Cipher {
        algorithm: CipherAlgorithm::Aes256Gcm,
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
        json: false,
    }
}
