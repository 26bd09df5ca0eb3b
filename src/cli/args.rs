//! CLI argument definitions using clap

use clap::Parser;

/// Builds a chain of sequential integers and prints them, one per line
#[derive(Parser, Debug)]
#[command(name = "chainlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output (repeat for more detail: -d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
