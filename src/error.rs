//! Error types for QR generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using qrgen's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unusable input (no text, missing input file)
    #[error("{0}")]
    Usage(String),

    /// Payload rejected before encoding
    #[error("{0}")]
    Validation(String),

    /// Destination directory could not be created
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// QR symbol construction failed (e.g. payload too long)
    #[error("Failed to encode QR code: {0}")]
    Encoding(String),

    /// Color specifier the raster renderer cannot interpret
    #[error("Invalid color: {0}")]
    Color(String),

    /// Image encoding or write error
    #[error("Image error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse failure categories callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad command-line input, reported with usage text
    Usage,
    /// Payload failed validation
    Validation,
    /// Filesystem failure
    Io,
    /// The QR encoder or renderer rejected the request
    Encoding,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) | Error::Config(_) => ErrorKind::Usage,
            Error::Validation(_) => ErrorKind::Validation,
            Error::CreateDir { .. } | Error::Io(_) | Error::Image(_) => ErrorKind::Io,
            Error::Encoding(_) | Error::Color(_) => ErrorKind::Encoding,
        }
    }

    /// Process exit code for this error when it is not routed through the argument parser.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::Encoding(e.to_string())
    }
}
