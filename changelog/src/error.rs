use thiserror::Error;

/// Errors that can occur when parsing a changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Either changelog text or a changelog path must be provided")]
    InvalidInput,

    #[error("Failed to read changelog file: {0}")]
    ReadError(#[from] std::io::Error),
}

impl ChangelogError {
    /// The I/O error reported by the reader, if that is what failed.
    #[must_use]
    pub const fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::ReadError(e) => Some(e),
            Self::InvalidInput => None,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput => {
                "No changelog given: provide either its text or a file path".to_string()
            }
            Self::ReadError(e) => format!("File operation failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_read_error_keeps_kind() {
        let err = ChangelogError::from(Error::new(ErrorKind::NotFound, "missing"));

        assert_eq!(err.io_error().map(Error::kind), Some(ErrorKind::NotFound));
        assert_eq!(err.user_message(), "File operation failed: missing");
    }

    #[test]
    fn test_invalid_input_has_no_io_error() {
        assert!(ChangelogError::InvalidInput.io_error().is_none());
    }
}
