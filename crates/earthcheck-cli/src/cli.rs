//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Check that Cargo cdylib names match the Earthly artifact names
/// published from each module directory
#[derive(Parser, Debug)]
#[command(name = "earthcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root of the source tree to scan
    #[arg(env = "EARTHCHECK_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
