//! CLI application for invoice data recovery and encrypted archiving.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{export, process, show};

/// finvault - recover structured data from invoice text and keep it in an
/// encrypted, deduplicated archive
#[derive(Parser)]
#[command(name = "finvault")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process invoice documents into the archive
    Process(process::ProcessArgs),

    /// Export stored records to CSV
    Export(export::ExportArgs),

    /// Show the decrypted payload of a stored record
    Show(show::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args),
        Commands::Export(args) => export::run(args),
        Commands::Show(args) => show::run(args),
    }
}
