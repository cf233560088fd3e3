//! Cellpack Core Types and Layout Engine
//!
//! This crate provides the foundational types and the layout algorithm for
//! battery pack generation. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Specs**: Validated cell and pack parameters ([`spec`] module)
//! - **Stagger**: Hexagonal packing modes ([`stagger::StaggerMode`])
//! - **Layout**: The cell-center layout engine ([`layout`] module)
//! - **Errors**: Parameter validation errors ([`error::LayoutError`])

pub mod error;
pub mod geometry;
pub mod layout;
pub mod spec;
pub mod stagger;

pub use error::LayoutError;
pub use layout::{CellPlacement, LayoutEngine, LayoutResult, compute_layout};
pub use spec::{CellSpec, MAX_CELL_COUNT, PackSpec};
pub use stagger::StaggerMode;
