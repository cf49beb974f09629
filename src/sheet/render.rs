//! Writes a [`Sheet`] line by line
//!
//! Layout:
//! - title, blank line
//! - `Instructions:` and its sentences, blank line, separator
//! - per section: `## N. <title>`, `Expected Output:`, the lines, separator

use super::content::{Section, Sheet};
use crate::error::SheetError;
use std::io::Write;
use tracing::trace;

/// Width of the dashed separator line
pub const SEPARATOR_WIDTH: usize = 80;

/// The dashed line printed after the instructions and after every section
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Render the full sheet to `out`
pub fn render_sheet<W: Write>(sheet: &Sheet, out: &mut W) -> Result<(), SheetError> {
    let rule = separator();

    writeln!(out, "{}", sheet.title)?;
    writeln!(out)?;

    writeln!(out, "Instructions:")?;
    for line in sheet.instructions {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", rule)?;

    for section in sheet.sections {
        render_section(section, &rule, out)?;
    }

    Ok(())
}

fn render_section<W: Write>(
    section: &Section,
    rule: &str,
    out: &mut W,
) -> Result<(), SheetError> {
    trace!(
        "Writing section {} ({} lines)",
        section.number,
        section.expected.len()
    );

    writeln!(out, "## {}. {}", section.number, section.title)?;
    writeln!(out, "Expected Output:")?;
    for line in section.expected {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", rule)?;

    Ok(())
}
