use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to append to output: {0}")]
    Sink(#[from] fmt::Error),

    #[error("No dictionary term for index {index} (dictionary has {len} entries)")]
    MissingTerm { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, FormatError>;
