//! Error types for sbom-sniff.

use thiserror::Error;

/// Errors that can occur during format detection.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SniffError {
    /// The document could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The content was readable but matched no supported combination of
    /// format family, encoding, and spec version.
    #[error("unknown SBOM format - expected CycloneDX or SPDX markers")]
    UnknownFormat,
}

/// Convenient Result type for sbom-sniff operations.
pub type Result<T> = std::result::Result<T, SniffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SniffError::UnknownFormat;
        assert!(err.to_string().contains("unknown SBOM format"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SniffError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }
}
