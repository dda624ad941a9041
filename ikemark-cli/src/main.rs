//! ## ikemark-cli
//! **Command-line interface for the handshake benchmark**
//!
//! Drives the full pipeline: configuration, simulation, analysis, and
//! reporting. Exits non-zero on any failure.
//!
//! ### Expectations:
//! - POSIX-compliant argument parsing
//! - Runs out of the box with the built-in catalogues
//! - Reproducible output for a fixed seed

use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::run_command(cli)
}
