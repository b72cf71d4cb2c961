use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse report {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field {0}")]
    MissingField(String),

    #[error("failed to write comparison output")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    pub fn missing(path: impl Into<String>) -> Self {
        ReportError::MissingField(path.into())
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
