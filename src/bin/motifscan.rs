//! Command-line interface for the `motifscan` crate.
//!
//! Subcommands are implemented in separate files (modules) under
//! `src/bin/motifscan/`:
//! - `scan_cmd.rs` — per-read motif placements
//! - `best_cmd.rs` — best-scoring read across a batch of files
use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Debug, Parser)]
#[command(name="motifscan", version=env!("CARGO_PKG_VERSION"), about="Approximate motif placement in noisy long reads", disable_help_subcommand=true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report every motif's best placement in every read.
    Scan(scan_cmd::ScanCmd),
    /// Keep only the best-scoring read across all input files.
    Best(best_cmd::BestCmd),
}

#[path = "motifscan/scan_cmd.rs"]
mod scan_cmd;
#[path = "motifscan/best_cmd.rs"]
mod best_cmd;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Scan(cmd) => scan_cmd::run(cmd),
        Command::Best(cmd) => best_cmd::run(cmd),
    }
}
