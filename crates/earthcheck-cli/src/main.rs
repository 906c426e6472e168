//! earthcheck CLI
//!
//! Scans a source tree and exits non-zero when any module's Cargo cdylib
//! name disagrees with the Earthly artifact name published next to it.
//!
//! Exit codes: 0 = consistent, 1 = mismatches found, 2 = the scan itself
//! failed (malformed manifest, unreadable root).

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;

/// Exit code when one or more mismatches are found
const EXIT_MISMATCH: i32 = 1;
/// Exit code when the scan aborts on an error
const EXIT_ERROR: i32 = 2;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_MISMATCH),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Run the audit; `Ok(true)` means the tree is consistent.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Scanning {}", cli.root.display());
    }

    let mismatches = earthcheck_core::audit(&cli.root)?;

    for mismatch in &mismatches {
        println!("{mismatch}");
    }
    Ok(mismatches.is_empty())
}
