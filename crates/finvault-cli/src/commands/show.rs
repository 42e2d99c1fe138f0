//! Show command - print the decrypted payload of one stored record.

use anyhow::bail;
use clap::Args;

use super::vault::{self, VaultArgs};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Content hash of the record
    hash: String,

    #[command(flatten)]
    vault: VaultArgs,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let store = vault::open(&args.vault)?;

    match store.decrypt_payload(&args.hash)? {
        Some(payload) => {
            println!("{payload}");
            Ok(())
        }
        None => bail!("no record with content hash {}", args.hash),
    }
}
