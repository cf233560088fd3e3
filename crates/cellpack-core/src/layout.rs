//! Cell-center layout for series/parallel battery packs.
//!
//! The engine places `S * P` circles on a grid centered on the origin. The
//! series index runs along X and the parallel index along Y. In a staggered
//! layout one axis is compressed to `spacing * sin(60°)` and alternate lines
//! are nudged by `±spacing * cos(60°) / 2` on the other axis, which puts
//! neighbouring cells on a 60° triangular lattice.
//!
//! ```text
//!   StaggerMode::None        StaggerMode::Series
//!
//!   o   o   o                o     o
//!                              o     o
//!   o   o   o                o     o
//!                              o     o
//! ```
//!
//! Placements are produced in row-major order: the outer loop walks the
//! series index and the inner loop the parallel index. Renderers rely on this
//! order for per-cell annotation.

use std::f32::consts::FRAC_PI_3;

use log::{debug, trace, warn};

use crate::{
    error::LayoutError,
    geometry::{Bounds, Point, Size},
    spec::{CellSpec, PackSpec},
    stagger::StaggerMode,
};

/// One cell center together with its grid indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    series: usize,
    parallel: usize,
    center: Point,
}

impl CellPlacement {
    /// Returns the series index of this cell
    pub fn series(self) -> usize {
        self.series
    }

    /// Returns the parallel index of this cell
    pub fn parallel(self) -> usize {
        self.parallel
    }

    /// Returns the cell center
    pub fn center(self) -> Point {
        self.center
    }

    /// Returns the x-coordinate of the cell center
    pub fn x(self) -> f32 {
        self.center.x()
    }

    /// Returns the y-coordinate of the cell center
    pub fn y(self) -> f32 {
        self.center.y()
    }
}

/// The ordered placements of one pack plus the radius shared by every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    placements: Vec<CellPlacement>,
    radius: f32,
}

impl LayoutResult {
    /// Returns the placements in row-major order
    pub fn placements(&self) -> &[CellPlacement] {
        &self.placements
    }

    /// Returns an iterator over the placements
    pub fn iter(&self) -> impl Iterator<Item = &CellPlacement> {
        self.placements.iter()
    }

    /// Returns the cell centers in row-major order
    pub fn centers(&self) -> Vec<Point> {
        self.placements.iter().map(|p| p.center).collect()
    }

    /// Returns the radius shared by all cells, `diameter / 2`
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the number of placements
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if there are no placements
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// The axis-aligned footprint covering every cell circle.
    pub fn bounds(&self) -> Bounds {
        let size = Size::square(self.radius * 2.0);
        let mut circles = self.placements.iter().map(|p| p.center.to_bounds(size));
        let Some(first) = circles.next() else {
            return Bounds::default();
        };
        circles.fold(first, |acc, bounds| acc.merge(&bounds))
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a CellPlacement;
    type IntoIter = std::slice::Iter<'a, CellPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Computes cell layouts for a given cell geometry and stagger mode.
///
/// # Examples
///
/// ```
/// # use cellpack_core::{CellSpec, LayoutEngine, PackSpec, StaggerMode};
/// let cell = CellSpec::new(1.8, 6.5).unwrap();
/// let pack = PackSpec::new(2.0, 2, 2).unwrap();
///
/// let layout = LayoutEngine::new(cell, StaggerMode::None).compute(&pack);
/// assert_eq!(layout.len(), 4);
/// assert_eq!(layout.radius(), 0.9);
/// assert_eq!(layout.placements()[0].x(), -1.0);
/// assert_eq!(layout.placements()[0].y(), -1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    cell: CellSpec,
    stagger: StaggerMode,
}

impl LayoutEngine {
    /// Creates a layout engine for cells of the given geometry.
    pub fn new(cell: CellSpec, stagger: StaggerMode) -> Self {
        Self { cell, stagger }
    }

    /// Returns the stagger mode used by this engine
    pub fn stagger(&self) -> StaggerMode {
        self.stagger
    }

    /// Lays out every cell of `pack`.
    ///
    /// Inputs are already validated by the [`PackSpec`] and [`CellSpec`]
    /// constructors, so this never fails.
    pub fn compute(&self, pack: &PackSpec) -> LayoutResult {
        debug!(
            series_count = pack.series_count(),
            parallel_count = pack.parallel_count(),
            spacing = pack.spacing(),
            stagger:? = self.stagger;
            "Computing cell layout"
        );

        // Nearest neighbours sit exactly `spacing` apart in every mode.
        if self.cell.diameter() > pack.spacing() {
            warn!(
                diameter = self.cell.diameter(),
                spacing = pack.spacing();
                "Cell diameter exceeds spacing, cells will overlap"
            );
        }

        let placements = place_cells(pack, self.stagger);
        trace!(count = placements.len(); "Cell placements computed");

        LayoutResult {
            placements,
            radius: self.cell.radius(),
        }
    }
}

/// Computes cell centers straight from raw parameters.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidParameter`] if `spacing <= 0`,
/// `series_count < 1`, `parallel_count < 1` or the pack would hold more than
/// [`MAX_CELL_COUNT`](crate::MAX_CELL_COUNT) cells. No placements are
/// produced in that case.
///
/// # Examples
///
/// ```
/// # use cellpack_core::{StaggerMode, compute_layout, geometry::Point};
/// let centers = compute_layout(2.0, 3, 1, StaggerMode::None).unwrap();
/// assert_eq!(
///     centers,
///     vec![Point::new(-2.0, 0.0), Point::new(0.0, 0.0), Point::new(2.0, 0.0)]
/// );
///
/// assert!(compute_layout(0.0, 3, 1, StaggerMode::None).is_err());
/// ```
pub fn compute_layout(
    spacing: f32,
    series_count: i64,
    parallel_count: i64,
    stagger: StaggerMode,
) -> Result<Vec<Point>, LayoutError> {
    let pack = PackSpec::new(spacing, series_count, parallel_count)?;
    Ok(place_cells(&pack, stagger)
        .into_iter()
        .map(CellPlacement::center)
        .collect())
}

/// Step and alternating offset of the grid along each axis.
///
/// Computed in `f32`, so `cos(60°)` comes out as `0.49999997` rather than
/// `0.5`. Staggered coordinates carry a relative error around `1e-7`.
#[derive(Debug, Clone, Copy)]
struct Lattice {
    spacing_x: f32,
    spacing_y: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Lattice {
    fn new(spacing: f32, stagger: StaggerMode) -> Self {
        let step = spacing * FRAC_PI_3.sin();
        let offset = spacing * FRAC_PI_3.cos();

        match stagger {
            StaggerMode::None => Self {
                spacing_x: spacing,
                spacing_y: spacing,
                offset_x: 0.0,
                offset_y: 0.0,
            },
            StaggerMode::Series => Self {
                spacing_x: step,
                spacing_y: spacing,
                offset_x: 0.0,
                offset_y: offset,
            },
            StaggerMode::Parallel => Self {
                spacing_x: spacing,
                spacing_y: step,
                offset_x: offset,
                offset_y: 0.0,
            },
        }
    }
}

/// Half of `offset`, positive on even indices and negative on odd ones.
fn bump(offset: f32, index: usize) -> f32 {
    if index % 2 == 0 {
        offset / 2.0
    } else {
        -offset / 2.0
    }
}

fn place_cells(pack: &PackSpec, stagger: StaggerMode) -> Vec<CellPlacement> {
    let lattice = Lattice::new(pack.spacing(), stagger);
    let series_count = pack.series_count();
    let parallel_count = pack.parallel_count();

    let start_x = lattice.spacing_x * (series_count - 1) as f32 / 2.0;
    let start_y = lattice.spacing_y * (parallel_count - 1) as f32 / 2.0;

    let mut placements = Vec::with_capacity(pack.cell_count());
    for series in 0..series_count {
        let y_bump = bump(lattice.offset_y, series);
        for parallel in 0..parallel_count {
            let x_bump = bump(lattice.offset_x, parallel);
            let center = Point::new(
                -start_x + series as f32 * lattice.spacing_x + x_bump,
                -start_y + parallel as f32 * lattice.spacing_y + y_bump,
            );
            placements.push(CellPlacement {
                series,
                parallel,
                center,
            });
        }
    }
    placements
}
