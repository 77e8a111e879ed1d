//! Error types for diagen operations.
//!
//! This module provides the main error type [`DiagenError`]. Every stage of
//! the pipeline reports failures through it; none of them are retried.

use std::{error::Error as StdError, io, path::PathBuf};

use thiserror::Error;

use crate::render::RenderError;

/// The main error type for diagen operations.
#[derive(Debug, Error)]
pub enum DiagenError {
    #[error("Unsupported diagram type: {0}")]
    UnsupportedType(String),

    #[error("SVG output not supported for diagram type: {0}")]
    UnsupportedOutput(String),

    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read file {}. Please ensure it's a valid text file.", .0.display())]
    Decode(PathBuf),

    #[error("Input file {} is empty", .0.display())]
    EmptySource(PathBuf),

    #[error("Failed to generate diagram: {0}")]
    Render(#[from] RenderError),

    #[error("Failed to save image to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Unexpected error: {0}")]
    Unexpected(Box<dyn StdError + Send + Sync>),
}

impl From<io::Error> for DiagenError {
    fn from(err: io::Error) -> Self {
        Self::Unexpected(Box::new(err))
    }
}

impl DiagenError {
    /// Create a new `Write` error for the given destination.
    pub fn new_write_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
