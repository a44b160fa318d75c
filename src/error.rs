//! Error types

use rust_xlsxwriter::XlsxError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while building or saving the report. Everything except image
/// embedding is fail-fast and surfaces as one of these.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("workbook error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    CellRef(String),

    #[error("post-build hook failed: {0}")]
    Hook(String),
}

/// Why an image was not embedded
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("image not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to load image '{}': {source}", path.display())]
    Load { path: PathBuf, source: XlsxError },

    #[error("failed to insert image at {anchor}: {source}")]
    Insert { anchor: String, source: XlsxError },

    #[error("invalid anchor: {0}")]
    Anchor(#[from] ReportError),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
