use thiserror::Error;

/// petreport error types
#[derive(Error, Debug)]
pub enum PetReportError {
    /// Snapshot JSON was invalid or missing the required shape
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for petreport
pub type Result<T> = std::result::Result<T, PetReportError>;
