/// Error code registry for hw05a
///
/// Error codes are organized by category:
/// - 4000-4999: Output errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Output errors (4000-4999)
    pub const OUTPUT_GENERIC: u16 = 4000;
    pub const OUTPUT_WRITE: u16 = 4008;
    pub const OUTPUT_FLUSH: u16 = 4011;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        4000 => "Generic output error",
        4008 => "Failed to write to the output stream",
        4011 => "Failed to flush the output stream",
        9000 => "Generic error",
        _ => "Unknown error code",
    }
}
