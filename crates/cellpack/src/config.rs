//! Configuration types for battery pack generation.
//!
//! This module provides the typed parameter record that drives a pack build,
//! together with styling options for the rendered output. All types implement
//! [`serde::Deserialize`] and [`serde::Serialize`] so they can be loaded from
//! and written back to external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining pack and style settings.
//! - [`PackConfig`] - Cell geometry, grid counts and stagger mode.
//! - [`StyleConfig`] - Colors and annotation options for the SVG output.
//!
//! # Example
//!
//! ```
//! # use cellpack::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.pack().series_count(), 12);
//! assert_eq!(config.pack().parallel_count(), 8);
//! assert!(config.style().cell_fill_color().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use cellpack_core::{CellSpec, LayoutError, PackSpec, StaggerMode};

use crate::color::Color;

const DEFAULT_CELL_DIAMETER: f32 = 1.8;
const DEFAULT_CELL_HEIGHT: f32 = 6.5;
const DEFAULT_CELL_SPACING: f32 = 2.0;
const DEFAULT_SERIES_COUNT: i64 = 12;
const DEFAULT_PARALLEL_COUNT: i64 = 8;

/// Top-level configuration combining pack and style settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Pack parameter section.
    #[serde(default)]
    pack: PackConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified pack and style configurations.
    pub fn new(pack: PackConfig, style: StyleConfig) -> Self {
        Self { pack, style }
    }

    /// Returns the pack configuration.
    pub fn pack(&self) -> &PackConfig {
        &self.pack
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Parameters of one battery pack.
///
/// Values are stored unvalidated, exactly as they were read; validation
/// happens in [`PackConfig::cell_spec`] and [`PackConfig::pack_spec`] so that
/// a configuration can always be loaded, inspected and saved back.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PackConfig {
    cell_diameter: f32,
    cell_height: f32,
    cell_spacing: f32,
    series_count: i64,
    parallel_count: i64,
    stagger: StaggerMode,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            cell_diameter: DEFAULT_CELL_DIAMETER,
            cell_height: DEFAULT_CELL_HEIGHT,
            cell_spacing: DEFAULT_CELL_SPACING,
            series_count: DEFAULT_SERIES_COUNT,
            parallel_count: DEFAULT_PARALLEL_COUNT,
            stagger: StaggerMode::default(),
        }
    }
}

impl PackConfig {
    /// Returns the cell diameter
    pub fn cell_diameter(&self) -> f32 {
        self.cell_diameter
    }

    /// Returns the cell height
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Returns the nominal center-to-center spacing
    pub fn cell_spacing(&self) -> f32 {
        self.cell_spacing
    }

    /// Returns the series count
    pub fn series_count(&self) -> i64 {
        self.series_count
    }

    /// Returns the parallel count
    pub fn parallel_count(&self) -> i64 {
        self.parallel_count
    }

    /// Returns the stagger mode
    pub fn stagger(&self) -> StaggerMode {
        self.stagger
    }

    /// Sets the cell diameter (builder style).
    pub fn with_cell_diameter(mut self, diameter: f32) -> Self {
        self.cell_diameter = diameter;
        self
    }

    /// Sets the cell height (builder style).
    pub fn with_cell_height(mut self, height: f32) -> Self {
        self.cell_height = height;
        self
    }

    /// Sets the cell spacing (builder style).
    pub fn with_cell_spacing(mut self, spacing: f32) -> Self {
        self.cell_spacing = spacing;
        self
    }

    /// Sets the series count (builder style).
    pub fn with_series_count(mut self, count: i64) -> Self {
        self.series_count = count;
        self
    }

    /// Sets the parallel count (builder style).
    pub fn with_parallel_count(mut self, count: i64) -> Self {
        self.parallel_count = count;
        self
    }

    /// Sets the stagger mode (builder style).
    pub fn with_stagger(mut self, stagger: StaggerMode) -> Self {
        self.stagger = stagger;
        self
    }

    /// Validates the cell geometry.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] for a non-positive diameter or height.
    pub fn cell_spec(&self) -> Result<CellSpec, LayoutError> {
        CellSpec::new(self.cell_diameter, self.cell_height)
    }

    /// Validates the grid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] for a non-positive spacing
    /// or a count below one.
    pub fn pack_spec(&self) -> Result<PackSpec, LayoutError> {
        PackSpec::new(self.cell_spacing, self.series_count, self.parallel_count)
    }
}

/// Visual styling configuration for rendered packs.
///
/// Color fields hold CSS color strings and are parsed on access.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color; transparent when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    cell_fill_color: String,
    cell_stroke_color: String,
    cell_stroke_width: f32,
    /// Write an `S{i}P{j}` label on every cell.
    label_cells: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            cell_fill_color: "#9ecae1".to_string(),
            cell_stroke_color: "black".to_string(),
            cell_stroke_width: 0.05,
            label_cells: false,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed cell fill [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn cell_fill_color(&self) -> Result<Color, String> {
        Color::new(&self.cell_fill_color)
            .map_err(|err| format!("Invalid cell fill color in config: {err}"))
    }

    /// Returns the parsed cell outline [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn cell_stroke_color(&self) -> Result<Color, String> {
        Color::new(&self.cell_stroke_color)
            .map_err(|err| format!("Invalid cell stroke color in config: {err}"))
    }

    /// Returns the outline width.
    ///
    /// # Errors
    ///
    /// Returns an error if the width is negative or not finite.
    pub fn cell_stroke_width(&self) -> Result<f32, String> {
        let width = self.cell_stroke_width;
        if width.is_finite() && width >= 0.0 {
            Ok(width)
        } else {
            Err(format!(
                "Invalid cell stroke width in config: expected a non-negative number, got {width}"
            ))
        }
    }

    /// Returns `true` if cells should be annotated with their grid indices
    pub fn label_cells(&self) -> bool {
        self.label_cells
    }

    /// Sets the background color string (builder style).
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the outline width (builder style).
    pub fn with_cell_stroke_width(mut self, width: f32) -> Self {
        self.cell_stroke_width = width;
        self
    }

    /// Enables or disables per-cell labels (builder style).
    pub fn with_label_cells(mut self, label_cells: bool) -> Self {
        self.label_cells = label_cells;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_defaults() {
        let pack = PackConfig::default();
        assert_eq!(pack.cell_diameter(), 1.8);
        assert_eq!(pack.cell_height(), 6.5);
        assert_eq!(pack.cell_spacing(), 2.0);
        assert_eq!(pack.series_count(), 12);
        assert_eq!(pack.parallel_count(), 8);
        assert_eq!(pack.stagger(), StaggerMode::None);
    }

    #[test]
    fn test_default_pack_is_valid() {
        let pack = PackConfig::default();
        let spec = pack.pack_spec().unwrap();
        assert_eq!(spec.name(), "12s8p Pack");
        assert_eq!(pack.cell_spec().unwrap().radius(), 0.9);
    }

    #[test]
    fn test_invalid_pack_reports_parameter() {
        let pack = PackConfig::default().with_series_count(0);
        assert_eq!(pack.pack_spec().unwrap_err().parameter(), "series_count");

        let pack = PackConfig::default().with_cell_diameter(-1.0);
        assert_eq!(pack.cell_spec().unwrap_err().parameter(), "diameter");
    }

    #[test]
    fn test_style_defaults_parse() {
        let style = StyleConfig::default();
        assert!(style.background_color().unwrap().is_none());
        assert!(style.cell_fill_color().is_ok());
        assert!(style.cell_stroke_color().is_ok());
        assert_eq!(style.cell_stroke_width(), Ok(0.05));
        assert!(!style.label_cells());
    }

    #[test]
    fn test_style_invalid_color() {
        let style = StyleConfig::default().with_background_color("not-a-color");
        let err = style.background_color().unwrap_err();
        assert!(err.starts_with("Invalid background color in config"));
    }

    #[test]
    fn test_style_invalid_stroke_width() {
        for width in [-0.1, f32::NAN, f32::INFINITY] {
            let style = StyleConfig::default().with_cell_stroke_width(width);
            let err = style.cell_stroke_width().unwrap_err();
            assert!(err.starts_with("Invalid cell stroke width in config"), "{err}");
        }

        let style = StyleConfig::default().with_cell_stroke_width(0.0);
        assert_eq!(style.cell_stroke_width(), Ok(0.0));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [pack]
            series_count = 4
            stagger = "series"
            "#,
        )
        .unwrap();

        assert_eq!(config.pack().series_count(), 4);
        assert_eq!(config.pack().parallel_count(), 8);
        assert_eq!(config.pack().stagger(), StaggerMode::Series);
        assert_eq!(config.style(), &StyleConfig::default());
    }

    #[test]
    fn test_unknown_stagger_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [pack]
            stagger = "diagonal"
            "#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unsupported stagger mode"), "{err}");
    }

    #[test]
    fn test_config_survives_toml_round_trip() {
        let config = AppConfig::new(
            PackConfig::default()
                .with_series_count(3)
                .with_parallel_count(2)
                .with_stagger(StaggerMode::Parallel),
            StyleConfig::default().with_label_cells(true),
        );

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("stagger = \"parallel\""), "{text}");

        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
