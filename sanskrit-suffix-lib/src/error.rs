//! Error types for suffix analysis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty word")]
    EmptyInput,

    #[error("Suffix must not be empty")]
    EmptySuffix,

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Suffix must not contain whitespace: {0:?}")]
    InvalidSuffix(String),

    #[error("Suffix is {len} characters long (max {max})")]
    SuffixTooLong { len: usize, max: usize },

    #[error("Category is {len} characters long (max {max})")]
    CategoryTooLong { len: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
