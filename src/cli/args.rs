//! CLI argument structures

use clap::Parser;

/// Print the expected outputs for the HW 05-A multiple-assignment exercises
#[derive(Parser, Debug)]
#[command(name = "hw05a")]
#[command(about = "hw05a - Print the expected outputs for the HW 05-A Python multiple-assignment exercises", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output on stderr (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
