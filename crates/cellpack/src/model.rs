//! Pack model: the named component of cylindrical cells built from a layout.
//!
//! A [`Pack`] is the data form of extruding every circle of a
//! [`LayoutResult`] by the cell height. It carries no solid geometry, only
//! one [`Cylinder`] per cell in layout order.

use cellpack_core::{
    CellSpec, LayoutResult, PackSpec, StaggerMode,
    geometry::{Bounds, Point},
};

/// One extruded cell standing on the layout plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    series: usize,
    parallel: usize,
    base_center: Point,
    radius: f32,
    height: f32,
}

impl Cylinder {
    /// Returns the series index of this cell
    pub fn series(&self) -> usize {
        self.series
    }

    /// Returns the parallel index of this cell
    pub fn parallel(&self) -> usize {
        self.parallel
    }

    /// Returns the center of the bottom face
    pub fn base_center(&self) -> Point {
        self.base_center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Short annotation used when labelling cells, e.g. `S3P1` (1-based).
    pub fn label(&self) -> String {
        format!("S{}P{}", self.series + 1, self.parallel + 1)
    }
}

/// A battery pack component made of cylinders.
#[derive(Debug, Clone, PartialEq)]
pub struct Pack {
    name: String,
    stagger: StaggerMode,
    cylinders: Vec<Cylinder>,
    footprint: Bounds,
}

impl Pack {
    /// Builds a pack by extruding every placement of `layout` by the cell height.
    pub fn from_layout(
        pack: &PackSpec,
        cell: &CellSpec,
        stagger: StaggerMode,
        layout: &LayoutResult,
    ) -> Self {
        let cylinders = layout
            .iter()
            .map(|placement| Cylinder {
                series: placement.series(),
                parallel: placement.parallel(),
                base_center: placement.center(),
                radius: layout.radius(),
                height: cell.height(),
            })
            .collect();

        Self {
            name: pack.name(),
            stagger,
            cylinders,
            footprint: layout.bounds(),
        }
    }

    /// Returns the component name, e.g. `"12s8p Pack"`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stagger mode the pack was laid out with
    pub fn stagger(&self) -> StaggerMode {
        self.stagger
    }

    /// Returns the cylinders in layout order
    pub fn cylinders(&self) -> &[Cylinder] {
        &self.cylinders
    }

    /// Returns the number of cells
    pub fn cell_count(&self) -> usize {
        self.cylinders.len()
    }

    /// Returns the top-view footprint of all cells
    pub fn footprint(&self) -> Bounds {
        self.footprint
    }

    /// Returns the extrusion height shared by every cell
    pub fn height(&self) -> f32 {
        self.cylinders.first().map_or(0.0, Cylinder::height)
    }
}

#[cfg(test)]
mod tests {
    use cellpack_core::LayoutEngine;
    use float_cmp::assert_approx_eq;

    use super::*;

    fn build(series: i64, parallel: i64, stagger: StaggerMode) -> Pack {
        let cell = CellSpec::new(1.8, 6.5).unwrap();
        let spec = PackSpec::new(2.0, series, parallel).unwrap();
        let layout = LayoutEngine::new(cell, stagger).compute(&spec);
        Pack::from_layout(&spec, &cell, stagger, &layout)
    }

    #[test]
    fn test_pack_name_and_count() {
        let pack = build(12, 8, StaggerMode::None);
        assert_eq!(pack.name(), "12s8p Pack");
        assert_eq!(pack.cell_count(), 96);
        assert_eq!(pack.stagger(), StaggerMode::None);
    }

    #[test]
    fn test_cylinders_follow_layout_order() {
        let pack = build(2, 2, StaggerMode::None);
        let labels: Vec<_> = pack.cylinders().iter().map(Cylinder::label).collect();
        assert_eq!(labels, vec!["S1P1", "S1P2", "S2P1", "S2P2"]);

        let first = pack.cylinders()[0];
        assert_eq!(first.base_center(), Point::new(-1.0, -1.0));
        assert_eq!(first.radius(), 0.9);
        assert_eq!(first.height(), 6.5);
        assert_eq!(pack.height(), 6.5);
    }

    #[test]
    fn test_footprint() {
        let pack = build(3, 1, StaggerMode::None);
        let footprint = pack.footprint();
        assert_approx_eq!(f32, footprint.width(), 5.8, epsilon = 1e-5);
        assert_approx_eq!(f32, footprint.height(), 1.8, epsilon = 1e-5);
    }
}
