//! Row-major enumeration of a rectangle of FungeSpace.

use toroid_foundation::{Rect, Value, Vector};

use crate::space::FungeSpace;

/// A lazy, finite walk over every coordinate of a rectangle, row-major.
///
/// Unwritten coordinates are visited too (reading as a space). Cloning a
/// region, or calling [`Region::restart`], yields a fresh walk from the
/// first cell.
#[derive(Clone, Debug)]
pub struct Region<'a> {
    space: &'a FungeSpace,
    rect: Rect,
    next: Option<Vector>,
}

impl<'a> Region<'a> {
    pub(crate) fn new(space: &'a FungeSpace, rect: Rect) -> Self {
        Self {
            space,
            rect,
            next: Some(rect.min),
        }
    }

    /// The rectangle being enumerated.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns a walk starting again from the first cell.
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::new(self.space, self.rect)
    }
}

impl Iterator for Region<'_> {
    type Item = (Vector, Value);

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.next?;
        self.next = if p.x < self.rect.max.x {
            Some(Vector::new(p.x + 1, p.y))
        } else if p.y < self.rect.max.y {
            Some(Vector::new(self.rect.min.x, p.y + 1))
        } else {
            None
        };
        Some((p, self.space.read(p)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(p) = self.next else {
            return (0, Some(0));
        };
        let remaining_rows = u128::try_from(i64::from(self.rect.max.y) - i64::from(p.y)).unwrap_or(0);
        let in_row = u128::try_from(i64::from(self.rect.max.x) - i64::from(p.x) + 1).unwrap_or(0);
        let width = u128::try_from(self.rect.width()).unwrap_or(0);
        let total = remaining_rows * width + in_row;
        match usize::try_from(total) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
