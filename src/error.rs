//! Error types
//!
//! Animations themselves never fail: bad operands degrade to no-op mutations.
//! Errors only come from loading settings and driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DsvizError {
    #[error("cannot read settings file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DsvizError>;
