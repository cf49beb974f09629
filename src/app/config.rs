//! Application configuration
//!
//! Settings derived from the command line. The program reads no config
//! files and no environment variables.

use crate::cli::Cli;

/// Application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    /// Build the configuration from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.verbose)
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether log lines should carry the target module
    pub fn show_target(&self) -> bool {
        self.verbose >= 2
    }

    /// Whether log lines should carry thread ids and line numbers
    pub fn show_location(&self) -> bool {
        self.verbose >= 3
    }
}
