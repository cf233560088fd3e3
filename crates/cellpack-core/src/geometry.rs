//! Geometric primitives for cell layout.
//!
//! - [`Point`] - A 2D coordinate on the layout plane
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Layouts are centered on the origin of a right-handed plane:
//!
//! ```text
//!           +Y
//!            ▲
//!            │
//!   ─────────┼────────► +X
//!            │
//! ```
//!
//! The series axis runs along X and the parallel axis along Y. Renderers with a
//! downward Y axis (such as SVG) are responsible for flipping.

/// A 2D point on the layout plane.
///
/// # Examples
///
/// ```
/// # use cellpack_core::geometry::Point;
/// let p1 = Point::new(1.0, 2.0);
/// let p2 = Point::new(4.0, 6.0);
///
/// assert_eq!(p1.distance(p2), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size with equal width and height
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cellpack_core::geometry::{Bounds, Point, Size};
    /// let left = Bounds::new_from_center(Point::new(-1.0, 0.0), Size::square(2.0));
    /// let right = Bounds::new_from_center(Point::new(1.0, 0.0), Size::square(2.0));
    ///
    /// let combined = left.merge(&right);
    /// assert_eq!(combined.min_x(), -2.0);
    /// assert_eq!(combined.max_x(), 2.0);
    /// assert_eq!(combined.height(), 2.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}
