//! Axis-aligned rectangles over FungeSpace coordinates.

use std::fmt;

use crate::value::Value;
use crate::vector::Vector;

/// An inclusive, non-empty, axis-aligned rectangle.
///
/// Extents are reported as `i64` because a rectangle spanning the whole
/// `i32` axis is one cell wider than `u32::MAX`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Least (north-west) corner, inclusive.
    pub min: Vector,
    /// Greatest (south-east) corner, inclusive.
    pub max: Vector,
}

impl Rect {
    /// Creates a rectangle from two inclusive corners, in any order.
    #[must_use]
    pub fn from_corners(a: Vector, b: Vector) -> Self {
        Self {
            min: Vector::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a rectangle covering a single point.
    #[must_use]
    pub const fn point(p: Vector) -> Self {
        Self { min: p, max: p }
    }

    /// Creates a rectangle from an origin and a size.
    ///
    /// Returns `None` if either extent is not positive or the far corner
    /// would leave the `i32` range.
    #[must_use]
    pub fn with_size(origin: Vector, width: Value, height: Value) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let max_x = origin.x.checked_add(width - 1)?;
        let max_y = origin.y.checked_add(height - 1)?;
        Some(Self {
            min: origin,
            max: Vector::new(max_x, max_y),
        })
    }

    /// The conventional 80x25 Befunge-93 board at the origin.
    #[must_use]
    pub const fn befunge93_board() -> Self {
        Self {
            min: Vector::ZERO,
            max: Vector::new(79, 24),
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x) + 1
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y) + 1
    }

    /// Number of cells covered.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn area(&self) -> u128 {
        self.width() as u128 * self.height() as u128
    }

    /// Returns true if the point lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, p: Vector) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns the smallest rectangle covering both this one and `p`.
    #[must_use]
    pub fn include(&self, p: Vector) -> Self {
        Self {
            min: Vector::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Vector::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the smallest rectangle covering both rectangles.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Self {
        self.include(other.min).include(other.max)
    }

    /// Returns the extent as a vector (`width - 1`, `height - 1`), the form
    /// Funge-98 `y` reports as the greatest point relative to the least.
    #[must_use]
    pub fn span(&self) -> Vector {
        self.max - self.min
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect[{:?}..={:?}]", self.min, self.max)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at {}", self.width(), self.height(), self.min)
    }
}
