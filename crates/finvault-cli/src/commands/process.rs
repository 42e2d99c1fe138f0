//! Process command - extract and archive invoice documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use finvault_core::{InvoiceParser, hash};
use finvault_store::{InsertOutcome, InvoiceStore};

use super::vault::{self, VaultArgs};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text documents (output of the external text-extraction step)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    vault: VaultArgs,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let store = vault::open(&args.vault)?;
    let parser = InvoiceParser::new();

    let bar = ProgressBar::new(args.inputs.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);

    let mut inserted = 0usize;
    let mut duplicates = 0usize;
    let mut failed = 0usize;

    for input in &args.inputs {
        bar.set_message(input.display().to_string());

        // Per-document isolation: one bad document never stops the batch.
        match process_one(&store, &parser, input) {
            Ok(InsertOutcome::Inserted) => inserted += 1,
            Ok(InsertOutcome::DuplicateRejected) => {
                duplicates += 1;
                bar.println(format!(
                    "{} {} (already processed)",
                    style("skip").yellow(),
                    input.display()
                ));
            }
            Err(err) => {
                failed += 1;
                warn!("failed to process {}: {err:#}", input.display());
                bar.println(format!(
                    "{} {}: {err:#}",
                    style("error").red(),
                    input.display()
                ));
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "{} processed, {} duplicates, {} failed",
        style(inserted).green(),
        style(duplicates).yellow(),
        style(failed).red()
    );
    Ok(())
}

fn process_one(
    store: &InvoiceStore,
    parser: &InvoiceParser,
    input: &Path,
) -> anyhow::Result<InsertOutcome> {
    let bytes =
        fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;

    // The dedup key is computed over the original bytes, independent of
    // what extraction makes of them.
    let file_hash = hash::hash_bytes(&bytes);

    let raw_text = String::from_utf8_lossy(&bytes);
    let invoice = parser.parse(&raw_text)?;

    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    Ok(store.insert(&filename, &file_hash, &invoice)?)
}
