//! Logging configuration and initialization
//!
//! Diagnostics always go to stderr; stdout carries only the sheet.

use crate::app::config::AppConfig;
use tracing::{debug, trace};

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) {
    let log_level = config.log_level();

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(config.show_target()) // Show target module for -vv and above
        .with_thread_ids(config.show_location()) // Show thread IDs for -vvv
        .with_line_number(config.show_location()) // Show line numbers for -vvv
        .init();

    debug!("hw05a started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
