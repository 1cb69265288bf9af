// src/config/mod.rs
//! Configuration system for credential-vault
//!
//! Lazy-loaded config with TOML + env overrides, plus the one place
//! that turns a config into a wired-up vault.

pub use app::{
    apply_store_override, config_path, from_toml_str, load, load_from, try_load_from, Cipher,
    Config, Logging, Records, Storage,
};
pub use open::{open_store, open_vault, DynStore, DynVault};

mod app;
mod defaults;
mod open;
