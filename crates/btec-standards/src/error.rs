#![deny(unsafe_code)]

use std::path::PathBuf;

use btec_model::QualificationType;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("no reference table for {qualification} at {path}")]
    MissingTable {
        qualification: QualificationType,
        path: PathBuf,
    },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing column {column} in {path}")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("invalid {column} value {value:?} in {path} at line {line}")]
    InvalidBound {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }
}
