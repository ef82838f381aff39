// Error types for paramx

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParamxError {
    #[error("invalid tag '{0}', please use a valid tag like (xss, ssrf, sqli, lfi, rce, idor, ssti, redirect, isubs)")]
    InvalidTag(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rule syntax in {path}: {message}")]
    RuleParse { path: PathBuf, message: String },

    #[error("invalid rule in {path}: {message}")]
    InvalidRule { path: PathBuf, message: String },

    #[error("no input provided, pass a URL list with -l or pipe URLs on stdin")]
    NoInput,
}

impl ParamxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParamxError::Io { path: path.into(), source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParamxError::Write { path: path.into(), source }
    }
}

pub type ParamxResult<T> = Result<T, ParamxError>;
