//! Error types for the docxtext library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docxtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting text from a document package.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    ///
    /// Displays as the bare sentinel so it can be shown in place of text.
    #[error("File not found")]
    NotFound(PathBuf),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// A required archive entry is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// The entry bytes could not be decoded as text.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::ZipArchive(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_bare_sentinel() {
        let err = Error::NotFound(PathBuf::from("missing.docx"));
        assert_eq!(err.to_string(), "File not found");
    }

    #[test]
    fn test_error_display() {
        let err = Error::MissingComponent("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing component: word/document.xml");

        let err = Error::Encoding("invalid utf-8 sequence".to_string());
        assert_eq!(err.to_string(), "Encoding error: invalid utf-8 sequence");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_zip() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::ZipArchive(_)));

        let err: Error =
            zip::result::ZipError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "eof")).into();
        assert!(matches!(err, Error::Io(_)));
    }
}
