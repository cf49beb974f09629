//! # hw05a
//!
//! Prints the expected outputs for the HW 05-A exercises on Python multiple
//! assignment, so students can compare them against their own runs.
//!
//! ## Usage
//!
//! ```bash
//! hw05a [-v]
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration, logging and fatal error handling
//! - `cli` - Command-line argument parsing
//! - `error` - Error type and error codes
//! - `sheet` - The expected-output sheet and its renderer
pub mod app;
pub mod cli;
pub mod error;
pub mod sheet;
