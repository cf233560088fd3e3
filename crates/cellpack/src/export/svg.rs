//! SVG top view of a pack.
//!
//! Every cylinder is drawn as a circle in layout order. The layout plane has
//! Y pointing up while SVG has Y pointing down, so Y is negated on output.

use std::io;

use log::{debug, info};
use svg::{
    self, Document, Node,
    node::{Text as SvgText, element as svg_element},
};

use cellpack_core::geometry::{Bounds, Point};

use super::{Error, Exporter};
use crate::{
    color::Color,
    config::StyleConfig,
    model::{Cylinder, Pack},
};

/// Rendered pixels per layout unit, used for the `width`/`height` attributes.
const PIXELS_PER_UNIT: f32 = 20.0;

/// Builder for [`Svg`] exporters.
///
/// Colors and the stroke width are validated in [`SvgBuilder::build`], so a
/// configuration error is reported before anything is rendered.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given style instead of [`StyleConfig::default`].
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the style into an exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color cannot be parsed or the
    /// stroke width is negative or not finite.
    pub fn build(self) -> Result<Svg, Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            background: style.background_color().map_err(Error::Render)?,
            fill: style.cell_fill_color().map_err(Error::Render)?,
            stroke: style.cell_stroke_color().map_err(Error::Render)?,
            stroke_width: style.cell_stroke_width().map_err(Error::Render)?,
            label_cells: style.label_cells(),
        })
    }
}

/// SVG exporter with a resolved style.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    fill: Color,
    stroke: Color,
    stroke_width: f32,
    label_cells: bool,
}

impl Svg {
    /// Renders the pack to an SVG document.
    pub fn render_pack(&self, pack: &Pack) -> Document {
        let radius = pack.cylinders().first().map_or(0.0, Cylinder::radius);
        let view = flip_y(pack.footprint()).expand(radius.max(self.stroke_width));
        debug!(
            width = view.width(),
            height = view.height();
            "Calculated SVG view box"
        );

        let mut title = svg_element::Element::new("title");
        title.append(SvgText::new(pack.name()));

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view.min_x(),
                    view.min_y(),
                    view.width(),
                    view.height()
                ),
            )
            .set("width", view.width() * PIXELS_PER_UNIT)
            .set("height", view.height() * PIXELS_PER_UNIT)
            .add(title);

        if let Some(background) = self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", view.min_x())
                    .set("y", view.min_y())
                    .set("width", view.width())
                    .set("height", view.height())
                    .set("fill", background),
            );
        }

        let mut cells = svg_element::Group::new()
            .set("id", "cells")
            .set("fill", self.fill)
            .set("stroke", self.stroke)
            .set("stroke-width", self.stroke_width);
        for cylinder in pack.cylinders() {
            cells = cells.add(self.render_cell(cylinder));
        }
        doc = doc.add(cells);

        if self.label_cells {
            doc = doc.add(self.render_labels(pack, radius));
        }

        doc
    }

    fn render_cell(&self, cylinder: &Cylinder) -> svg_element::Circle {
        let center = cylinder.base_center();
        svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", -center.y())
            .set("r", cylinder.radius())
            .set("data-cell", cylinder.label())
    }

    fn render_labels(&self, pack: &Pack, radius: f32) -> svg_element::Group {
        let mut labels = svg_element::Group::new()
            .set("id", "labels")
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "sans-serif")
            .set("font-size", radius * 0.6)
            .set("fill", self.stroke);

        for cylinder in pack.cylinders() {
            let center = cylinder.base_center();
            let text = svg_element::Text::new("")
                .set("x", center.x())
                .set("y", -center.y())
                .add(SvgText::new(cylinder.label()));
            labels = labels.add(text);
        }
        labels
    }
}

impl Exporter for Svg {
    fn export_pack(&self, pack: &Pack, writer: &mut dyn io::Write) -> Result<(), Error> {
        info!(name = pack.name(), cells = pack.cell_count(); "Rendering pack to SVG");
        let doc = self.render_pack(pack);
        write!(writer, "{doc}")?;
        debug!("SVG document written");
        Ok(())
    }
}

/// Mirrors bounds across the X axis.
fn flip_y(bounds: Bounds) -> Bounds {
    let center = bounds.center();
    Bounds::new_from_center(
        Point::new(center.x(), -center.y()),
        bounds.to_size(),
    )
}

#[cfg(test)]
mod tests {
    use cellpack_core::{CellSpec, LayoutEngine, PackSpec, StaggerMode, geometry::Size};

    use super::*;

    fn pack(series: i64, parallel: i64) -> Pack {
        let cell = CellSpec::new(1.8, 6.5).unwrap();
        let spec = PackSpec::new(2.0, series, parallel).unwrap();
        let layout = LayoutEngine::new(cell, StaggerMode::Series).compute(&spec);
        Pack::from_layout(&spec, &cell, StaggerMode::Series, &layout)
    }

    fn render(style: &StyleConfig, pack: &Pack) -> String {
        let svg = SvgBuilder::new().with_style(style).build().unwrap();
        let mut out = Vec::new();
        svg.export_pack(pack, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_one_circle_per_cell() {
        let output = render(&StyleConfig::default(), &pack(4, 3));
        assert!(output.contains("<svg"));
        assert_eq!(output.matches("<circle").count(), 12);
        assert!(output.contains("<title>"));
        assert!(output.contains("4s3p Pack"));
        assert!(!output.contains("<text"));
    }

    #[test]
    fn test_labels_when_enabled() {
        let style = StyleConfig::default().with_label_cells(true);
        let output = render(&style, &pack(2, 2));
        assert_eq!(output.matches("<text").count(), 4);
        assert!(output.contains("S2P2"));
    }

    #[test]
    fn test_background_rectangle() {
        let style = StyleConfig::default().with_background_color("white");
        let output = render(&style, &pack(1, 1));
        assert!(output.contains("<rect"));
    }

    #[test]
    fn test_invalid_color_fails_build() {
        let style = StyleConfig::default().with_background_color("nope");
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_invalid_stroke_width_fails_build() {
        for width in [-1.0, f32::NAN] {
            let style = StyleConfig::default().with_cell_stroke_width(width);
            let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
            assert!(matches!(err, Error::Render(_)));
        }
    }

    #[test]
    fn test_flip_y() {
        let bounds = Bounds::new_from_center(Point::new(1.0, 2.0), Size::new(4.0, 2.0));
        let flipped = flip_y(bounds);
        assert_eq!(flipped.min_y(), -3.0);
        assert_eq!(flipped.max_y(), -1.0);
        assert_eq!(flipped.min_x(), bounds.min_x());
    }
}
