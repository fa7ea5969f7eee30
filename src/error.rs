//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides semantic variants for argument validation, input pairing, and
//! subprocess launch failures. A plain nonzero exit from the external tool is
//! NOT an error; it is surfaced as an exit code.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("interval file does not exist or is not a regular file: {path}")]
    InvalidPath { path: PathBuf },

    #[error("fastq inputs must come in pairs, got an odd count: {count}")]
    OddInputCount { count: usize },

    #[error("no fastq input files supplied")]
    NoInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external tool error: {message}")]
    ExternalTool { message: String },
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::ExternalTool {
            message: e.to_string(),
        }
    }
}
