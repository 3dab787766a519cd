use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run
/// These are system-level errors (I/O, CSV plumbing), never a bad input record
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
