//! Errors raised outside the projection engine (loading, export, service)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("failed to read parameters from {path}: {source}")]
    ParamsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameter data: {0}")]
    ParamsFormat(#[from] serde_json::Error),

    #[error("cycle count {value} exceeds the maximum of {max}")]
    CycleCountOutOfRange { value: f64, max: u32 },

    #[error("unknown parameter field: {0}")]
    UnknownField(String),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
