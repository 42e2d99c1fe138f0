//! Export command - write stored records to CSV.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;

use finvault_store::{ExportRow, sanitize_cell};

use super::vault::{self, VaultArgs};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output CSV file
    #[arg(short, long, default_value = "invoices.csv")]
    output: PathBuf,

    #[command(flatten)]
    vault: VaultArgs,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let store = vault::open(&args.vault)?;
    let rows = store.export()?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    writer.write_record(ExportRow::HEADERS)?;
    for row in &rows {
        writer.write_record(row.values().iter().map(|cell| sanitize_cell(cell)))?;
    }
    writer.flush()?;

    println!(
        "{} rows exported to {}",
        style(rows.len()).green(),
        args.output.display()
    );
    Ok(())
}
