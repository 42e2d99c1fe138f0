//! Shared helpers for opening the encrypted archive.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Args;

use finvault_store::{InvoiceStore, KdfParams, KeyContext, generate_salt};

const DB_FILE: &str = "invoices.redb";
const SALT_FILE: &str = "kdf-salt";

/// Archive location and secret material, shared by all subcommands.
#[derive(Args)]
pub struct VaultArgs {
    /// Archive directory (created if missing)
    #[arg(long, default_value = "finvault-data")]
    pub db: PathBuf,

    /// Passphrase for the archive key (or set FINVAULT_PASSPHRASE)
    #[arg(long)]
    pub passphrase: Option<String>,
}

/// Open the archive, deriving its key from the caller-supplied passphrase
/// and the per-archive salt file.
pub fn open(args: &VaultArgs) -> anyhow::Result<InvoiceStore> {
    let passphrase = args
        .passphrase
        .clone()
        .or_else(|| std::env::var("FINVAULT_PASSPHRASE").ok())
        .context("no passphrase given (use --passphrase or FINVAULT_PASSPHRASE)")?;

    fs::create_dir_all(&args.db)
        .with_context(|| format!("failed to create archive directory {}", args.db.display()))?;

    let salt = load_or_create_salt(&args.db.join(SALT_FILE))?;
    let key = KeyContext::derive(passphrase.as_bytes(), &salt, &KdfParams::default())?;

    InvoiceStore::open(args.db.join(DB_FILE), &key).context("failed to open archive")
}

/// Each archive gets its own random salt, generated once and persisted
/// beside the database.
fn load_or_create_salt(path: &Path) -> anyhow::Result<[u8; 32]> {
    if path.exists() {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read salt file {}", path.display()))?;
        if bytes.len() != 32 {
            bail!("salt file {} is corrupted", path.display());
        }
        let mut salt = [0u8; 32];
        salt.copy_from_slice(&bytes);
        Ok(salt)
    } else {
        let salt = generate_salt();
        fs::write(path, salt)
            .with_context(|| format!("failed to write salt file {}", path.display()))?;
        Ok(salt)
    }
}
