//! Validated cell and pack parameters.
//!
//! [`CellSpec`] describes a single cylindrical cell and [`PackSpec`] the
//! series/parallel grid it is arranged in. Both are plain value types whose
//! constructors enforce the invariants the layout engine relies on.

use crate::error::LayoutError;

/// Geometry of a single cylindrical cell.
///
/// # Examples
///
/// ```
/// # use cellpack_core::CellSpec;
/// let cell = CellSpec::new(1.8, 6.5).unwrap();
/// assert_eq!(cell.radius(), 0.9);
///
/// assert!(CellSpec::new(0.0, 6.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSpec {
    diameter: f32,
    height: f32,
}

impl CellSpec {
    /// Creates a cell specification.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] if `diameter` or `height`
    /// is not a finite value greater than zero.
    pub fn new(diameter: f32, height: f32) -> Result<Self, LayoutError> {
        ensure_positive("diameter", diameter)?;
        ensure_positive("height", height)?;
        Ok(Self { diameter, height })
    }

    /// Returns the cell diameter
    pub fn diameter(self) -> f32 {
        self.diameter
    }

    /// Returns the cell height
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the cell radius, `diameter / 2`
    pub fn radius(self) -> f32 {
        self.diameter / 2.0
    }
}

/// Largest number of cells a single pack may hold.
pub const MAX_CELL_COUNT: usize = 1 << 20;

/// A series/parallel grid of cells with a nominal center-to-center spacing.
///
/// Counts are accepted as signed integers so that negative values coming from
/// user input are reported as [`LayoutError::InvalidParameter`] instead of
/// wrapping around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackSpec {
    spacing: f32,
    series_count: usize,
    parallel_count: usize,
}

impl PackSpec {
    /// Creates a pack specification.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] if `spacing` is not a finite
    /// value greater than zero, if either count is less than one, or if
    /// `S * P` exceeds [`MAX_CELL_COUNT`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cellpack_core::PackSpec;
    /// let pack = PackSpec::new(2.0, 12, 8).unwrap();
    /// assert_eq!(pack.cell_count(), 96);
    ///
    /// assert!(PackSpec::new(2.0, 12, -1).is_err());
    /// ```
    pub fn new(spacing: f32, series_count: i64, parallel_count: i64) -> Result<Self, LayoutError> {
        ensure_positive("spacing", spacing)?;
        let series_count = ensure_count("series_count", series_count)?;
        let parallel_count = ensure_count("parallel_count", parallel_count)?;
        let within_limit = series_count
            .checked_mul(parallel_count)
            .is_some_and(|count| count <= MAX_CELL_COUNT);
        if !within_limit {
            return Err(LayoutError::invalid_parameter(
                "parallel_count",
                format!(
                    "{series_count}s{parallel_count}p exceeds the maximum of {MAX_CELL_COUNT} cells"
                ),
            ));
        }

        Ok(Self {
            spacing,
            series_count,
            parallel_count,
        })
    }

    /// Returns the nominal center-to-center spacing
    pub fn spacing(self) -> f32 {
        self.spacing
    }

    /// Returns the number of cells in series (S)
    pub fn series_count(self) -> usize {
        self.series_count
    }

    /// Returns the number of cells in parallel (P)
    pub fn parallel_count(self) -> usize {
        self.parallel_count
    }

    /// Returns the total number of cells, `S * P`
    pub fn cell_count(self) -> usize {
        self.series_count * self.parallel_count
    }

    /// Returns the conventional pack name, e.g. `"12s8p Pack"`.
    pub fn name(self) -> String {
        format!("{}s{}p Pack", self.series_count, self.parallel_count)
    }
}

fn ensure_positive(name: &'static str, value: f32) -> Result<(), LayoutError> {
    if !value.is_finite() {
        return Err(LayoutError::invalid_parameter(
            name,
            format!("must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(LayoutError::invalid_parameter(
            name,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(())
}

fn ensure_count(name: &'static str, value: i64) -> Result<usize, LayoutError> {
    if value < 1 {
        return Err(LayoutError::invalid_parameter(
            name,
            format!("must be at least 1, got {value}"),
        ));
    }
    usize::try_from(value)
        .map_err(|_| LayoutError::invalid_parameter(name, format!("{value} is too large")))
}
