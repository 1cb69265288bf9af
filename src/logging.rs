// src/logging.rs
//! Subscriber setup for binaries and tests
//!
//! `RUST_LOG` wins over the configured filter when set.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Logging;

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init(config: &Logging) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    result.is_ok()
}
