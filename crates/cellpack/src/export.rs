//! Export functionality for battery packs.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a built [`Pack`] into an output format. It is the final stage
//! of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Pack parameters
//!     ↓ validate
//! PackSpec + CellSpec
//!     ↓ layout
//! Cell placements (LayoutResult)
//!     ↓ model
//! Pack (cylinders)
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — top-view SVG via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`CellpackError::Export`] at the crate
//! boundary.
//!
//! [`CellpackError::Export`]: crate::CellpackError::Export

/// SVG export backend.
pub mod svg;

use std::io;

use thiserror::Error;

use crate::model::Pack;

/// Abstraction for pack export backends.
pub trait Exporter {
    /// Writes `pack` in the backend's output format to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the pack cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_pack(&self, pack: &Pack, writer: &mut dyn io::Write) -> Result<(), Error>;
}

/// Errors raised by export backends.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
