//! Cellpack - parametric battery pack layouts.
//!
//! Builds series/parallel grids of cylindrical cells (optionally on a
//! staggered hexagonal lattice) and renders them as SVG top views.

pub mod color;
pub mod config;
pub mod export;
pub mod model;

mod error;

pub use cellpack_core::{
    CellPlacement, CellSpec, LayoutEngine, LayoutError, LayoutResult, PackSpec, StaggerMode,
    compute_layout, geometry,
};

pub use error::CellpackError;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, svg::SvgBuilder};
use model::Pack;

/// Builder for laying out and rendering battery packs.
///
/// # Examples
///
/// ```rust
/// use cellpack::{PackBuilder, config::AppConfig};
///
/// let builder = PackBuilder::new(AppConfig::default());
///
/// // Validate parameters, lay out the cells and extrude them
/// let pack = builder.build().expect("Failed to build pack");
/// assert_eq!(pack.name(), "12s8p Pack");
/// assert_eq!(pack.cell_count(), 96);
///
/// // Render the pack to SVG
/// let svg = builder.render_svg(&pack).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct PackBuilder {
    config: AppConfig,
}

impl PackBuilder {
    /// Create a new pack builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate the pack parameters and build the pack model.
    ///
    /// # Errors
    ///
    /// Returns [`CellpackError::Layout`] if any parameter is invalid. Nothing
    /// is laid out in that case.
    pub fn build(&self) -> Result<Pack, CellpackError> {
        let params = self.config.pack();
        let cell = params.cell_spec()?;
        let spec = params.pack_spec()?;
        info!(name = spec.name(), stagger:? = params.stagger(); "Building pack");

        let layout = LayoutEngine::new(cell, params.stagger()).compute(&spec);
        debug!(cells = layout.len(), radius = layout.radius(); "Layout calculated");
        trace!(layout:?; "Cell placements");

        Ok(Pack::from_layout(&spec, &cell, params.stagger(), &layout))
    }

    /// Render a pack to an SVG string using the configured style.
    ///
    /// # Errors
    ///
    /// Returns [`CellpackError::Export`] if the style is invalid or rendering fails.
    pub fn render_svg(&self, pack: &Pack) -> Result<String, CellpackError> {
        let exporter = SvgBuilder::new().with_style(self.config.style()).build()?;

        let mut buffer = Vec::new();
        exporter.export_pack(pack, &mut buffer)?;
        let svg = String::from_utf8(buffer)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
