//! Expected-output sheet
//!
//! The sheet is a fixed table of literals ([`content::HW05A`]) written in
//! order by [`render::render_sheet`]. Nothing here reads input or keeps state,
//! so every call produces the same bytes.

pub mod content;
pub mod render;

pub use content::{Section, Sheet, HW05A};
pub use render::{render_sheet, separator, SEPARATOR_WIDTH};

use crate::error::SheetError;
use std::io::Write;
use tracing::debug;

/// Render the HW 05-A sheet to any writer
pub fn render<W: Write>(out: &mut W) -> Result<(), SheetError> {
    render_sheet(&HW05A, out)
}

/// Render the HW 05-A sheet into a string
pub fn render_to_string() -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    if render(&mut buf).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the HW 05-A sheet to stdout
pub fn emit() -> Result<(), SheetError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    debug!("Emitting {} sections to stdout", HW05A.sections.len());
    render(&mut handle)?;
    handle.flush().map_err(SheetError::flush)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_to_string_matches_writer_output() {
        let mut buf = Vec::new();
        render(&mut buf).unwrap();
        assert_eq!(render_to_string().as_bytes(), buf.as_slice());
    }

    #[test]
    fn test_render_to_string_is_idempotent() {
        let first = render_to_string();
        let second = render_to_string();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
