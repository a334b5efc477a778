//! Error types for the Stellarium goto tool

use std::path::PathBuf;

use rp_fits_header::HeaderError;

/// Errors that can occur while pointing Stellarium at a FITS file
#[derive(Debug, thiserror::Error)]
pub enum GotoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File {} does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error("FITS header error: {0}")]
    Header(#[from] HeaderError),

    #[error("No {0} value found in FITS file")]
    MissingKeyword(String),

    #[error("Invalid {keyword} value '{value}'")]
    InvalidCoordinate {
        keyword: String,
        value: String,
        #[source]
        source: HeaderError,
    },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GotoError {
    /// Whether the error is an expected operator-facing condition rather
    /// than a failure of the tool itself
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GotoError::FileNotFound(_) | GotoError::MissingKeyword(_)
        )
    }
}

/// Result type alias for Stellarium goto operations
pub type Result<T> = std::result::Result<T, GotoError>;
