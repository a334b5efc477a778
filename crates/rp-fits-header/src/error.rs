//! Error types for FITS header reading

/// Errors that can occur while reading or interpreting a FITS header
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid numeric value: '{value}'")]
    InvalidNumber { value: String },
}

/// Result type alias for FITS header operations
pub type Result<T> = std::result::Result<T, HeaderError>;
