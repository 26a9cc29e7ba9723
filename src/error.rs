use thiserror::Error;

use crate::types::Offset;

/// Main error type for the scanner
///
/// Oracle rejections during validation are ordinary negative results, not
/// errors. Only input problems and a decode failure on an already accepted
/// run land here.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Memory mapping error: {0}")]
    Mmap(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Accepted run at {offset} failed to decode as {encoding}")]
    Decode {
        offset: Offset,
        encoding: &'static str,
    },
}

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ScanError = io.into();
        assert!(matches!(err, ScanError::Io(_)));
    }

    #[test]
    fn test_decode_error_message() {
        let err = ScanError::Decode {
            offset: Offset::new(0x40),
            encoding: "GBK",
        };
        assert_eq!(
            err.to_string(),
            "Accepted run at 0x00000040 failed to decode as GBK"
        );
    }
}
