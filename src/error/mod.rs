use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Errors raised while emitting the expected-output sheet
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("[E{code:04}] Output error: {message}")]
    Output {
        code: u16,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl SheetError {
    /// Create an error for a failed write
    pub fn write(source: std::io::Error) -> Self {
        Self::Output {
            code: ErrorCode::OUTPUT_WRITE,
            message: "could not write to stdout".to_string(),
            source,
        }
    }

    /// Create an error for a failed flush
    pub fn flush(source: std::io::Error) -> Self {
        Self::Output {
            code: ErrorCode::OUTPUT_FLUSH,
            message: "could not flush stdout".to_string(),
            source,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Output { code, .. } => *code,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Output { .. } => 1,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Output { message, source, .. } => {
                format!("Error: {} ({})", message, source)
            }
        }
    }

    /// Get a detailed developer message including the code description
    pub fn developer_message(&self) -> String {
        format!("{:#} [{}]", self, describe_error_code(self.code()))
    }
}

impl From<std::io::Error> for SheetError {
    fn from(err: std::io::Error) -> Self {
        Self::write(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_write_error_carries_code() {
        let err = SheetError::write(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.code(), ErrorCode::OUTPUT_WRITE);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("[E4008] Output error:"));
    }

    #[test]
    fn test_io_error_converts_to_write_error() {
        let err: SheetError = io::Error::other("disk gone").into();
        assert_eq!(err.code(), ErrorCode::OUTPUT_WRITE);
        assert!(err.user_message().contains("disk gone"));
    }

    #[test]
    fn test_flush_error_message() {
        let err = SheetError::flush(io::Error::other("flush failed"));
        assert_eq!(err.code(), ErrorCode::OUTPUT_FLUSH);
        assert!(err
            .developer_message()
            .contains("Failed to flush the output stream"));
    }
}
