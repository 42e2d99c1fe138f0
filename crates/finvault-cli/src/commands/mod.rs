//! CLI subcommands.

pub mod export;
pub mod process;
pub mod show;

mod vault;
