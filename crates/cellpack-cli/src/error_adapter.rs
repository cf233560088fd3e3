//! Error adapter for converting CellpackError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use cellpack::{CellpackError, LayoutError};

/// Adapter that renders a [`CellpackError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CellpackError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CellpackError::Io(_) => "cellpack::io",
            CellpackError::Config(_) => "cellpack::config",
            CellpackError::Layout(_) => "cellpack::layout",
            CellpackError::Export(_) => "cellpack::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CellpackError::Layout(LayoutError::InvalidParameter { name, .. }) => {
                let hint = match *name {
                    "series_count" | "parallel_count" => {
                        format!("set `{name}` to a whole number of at least 1")
                    }
                    _ => format!("set `{name}` to a positive number"),
                };
                Some(Box::new(hint))
            }
            CellpackError::Config(_) => Some(Box::new(
                "check the configuration file; valid stagger modes are none, series and parallel",
            )),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`CellpackError`] for rendering by miette.
pub fn to_reportable(err: &CellpackError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
