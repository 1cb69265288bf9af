// src/bin/credential_vault.rs
//! Credential Vault — set, inspect and clear the stored API key from a terminal

use std::io::Write;

use anyhow::{bail, Context, Result};
use credential_vault::config::{self, open_vault};
use credential_vault::{logging, Secret};
use rpassword::read_password;
use tracing::info;
use zeroize::Zeroize;

const USAGE: &str = "usage: credential-vault <set|status|show|remove|purge|check>";

fn main() -> Result<()> {
    let conf = config::load();
    logging::init(&conf.logging);

    let command = std::env::args().nth(1).unwrap_or_default();
    let vault = open_vault(conf).context("Failed to open the credential store")?;

    match command.as_str() {
        "set" => {
            let candidate = prompt("API key: ")?;
            if let Err(issue) = conf.validation.check(candidate.expose_secret()) {
                bail!("Rejected: {issue}");
            }
            if !vault.save(candidate.expose_secret()) {
                bail!("The credential could not be saved — run with RUST_LOG=debug for details");
            }
            info!("credential stored");
            println!("Saved. The key is encrypted at rest and never leaves this machine.");
        }
        "status" => {
            println!("credential stored: {}", if vault.has() { "yes" } else { "no" });
            println!(
                "key id:            {}",
                vault.key_fingerprint().as_deref().unwrap_or("none")
            );
            println!("algorithm:         {}", vault.algorithm());
        }
        "show" => match vault.get() {
            Some(secret) => println!("{}", mask(secret.expose_secret())),
            None => bail!("No usable credential stored — run `credential-vault set`"),
        },
        "remove" => {
            vault.remove();
            println!("Removed.");
        }
        "purge" => {
            if !vault.purge() {
                bail!("Failed to purge the vault records");
            }
            println!("Credential and encryption key purged.");
        }
        "check" => {
            let candidate = prompt("Candidate: ")?;
            match conf.validation.check(candidate.expose_secret()) {
                Ok(()) => println!("Format looks valid."),
                Err(issue) => println!("Invalid: {issue}"),
            }
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

/// Read a line without echo, trimmed, straight into a zeroizing wrapper
fn prompt(label: &str) -> Result<Secret> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut raw = read_password().context("Failed to read from the terminal")?;
    let secret = Secret::new(raw.trim().to_owned());
    raw.zeroize();
    Ok(secret)
}

/// `sk-…wxyz`; short values are fully hidden
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() < 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
