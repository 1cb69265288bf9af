// src/validate.rs
//! Format-only sanity check for a candidate credential
//!
//! Nothing here proves the credential is authorized by the remote service;
//! that is only known after the first real request.

use std::fmt;

use serde::Deserialize;

use crate::consts::{DEFAULT_CREDENTIAL_MIN_LEN, DEFAULT_CREDENTIAL_PREFIX};

/// Why a candidate was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    Empty,
    MissingPrefix { expected: String },
    TooShort { min: usize, actual: usize },
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::Empty => write!(f, "credential is empty"),
            FormatIssue::MissingPrefix { expected } => {
                write!(f, "credential must start with \"{expected}\"")
            }
            FormatIssue::TooShort { min, actual } => {
                write!(f, "credential must be at least {min} characters (got {actual})")
            }
        }
    }
}

/// Prefix and minimum length a credential must have.
///
/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatRules {
    pub prefix: String,
    pub min_length: usize,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CREDENTIAL_PREFIX.into(),
            min_length: DEFAULT_CREDENTIAL_MIN_LEN,
        }
    }
}

impl FormatRules {
    pub fn check(&self, candidate: &str) -> Result<(), FormatIssue> {
        if candidate.is_empty() {
            return Err(FormatIssue::Empty);
        }
        if !candidate.starts_with(&self.prefix) {
            return Err(FormatIssue::MissingPrefix {
                expected: self.prefix.clone(),
            });
        }
        let actual = candidate.encode_utf16().count();
        if actual < self.min_length {
            return Err(FormatIssue::TooShort {
                min: self.min_length,
                actual,
            });
        }
        Ok(())
    }

    pub fn validate(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }
}

/// `validate` with the default rules (`sk-` prefix, 20 characters)
pub fn validate(candidate: &str) -> bool {
    FormatRules::default().validate(candidate)
}
