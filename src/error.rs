// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CscanError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Input too large: {path} is {size} bytes (limit: {limit})")]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CscanError>;

// Allow `?` on std::io::Error by converting to CscanError::Io with unknown path.
impl From<std::io::Error> for CscanError {
    fn from(source: std::io::Error) -> Self {
        CscanError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for CscanError {
    fn from(e: toml::de::Error) -> Self {
        CscanError::Config(e.to_string())
    }
}
