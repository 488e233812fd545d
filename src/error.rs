//! Errors for the fallible edges: configuration, replay scripts and JSON output
//!
//! Classification itself never fails.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AvatarError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Script line {line}: {source}")]
    ScriptParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON output: {0}")]
    Output(#[source] serde_json::Error),
}

impl AvatarError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, AvatarError>;

/// Pretty-print a value for the CLI's `--json` modes
pub fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(AvatarError::Output)
}
