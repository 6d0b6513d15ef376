use std::path::PathBuf;
use thiserror::Error;

/// Fatal document errors. Any of these aborts the pipeline before an output
/// file is produced; extraction/merge anomalies are diagnostics, not errors.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path}: top-level node is not a mapping")]
    NotAMapping { path: PathBuf },

    #[error("failed to serialize document: {0}")]
    Serialize(serde_yaml::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
