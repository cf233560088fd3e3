//! Error types for Cellpack operations.
//!
//! This module provides the main error type [`CellpackError`] which wraps
//! the error conditions that can occur while building and rendering a pack.

use std::io;

use thiserror::Error;

use cellpack_core::LayoutError;

/// The main error type for Cellpack operations.
#[derive(Debug, Error)]
pub enum CellpackError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for CellpackError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
