use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in frn-console
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Duplicate endpoint id: {0}")]
    DuplicateEndpointId(String),

    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),

    #[error("Invalid catalog file {path}: {source}")]
    InvalidCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Mock generation failed: {0}")]
    MockGeneration(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = StdResult<T, CoreError>;
