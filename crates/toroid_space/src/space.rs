//! The sparse FungeSpace.
//!
//! FungeSpace is addressed over the full `i32` range on both axes. Only
//! written cells cost memory; every other coordinate reads as a space.
//! Cells are never removed, so clearing a cell means writing [`SPACE`].
//!
//! The backing store is a persistent hash map, which makes
//! [`FungeSpace::snapshot`] an O(1) operation. The interpreter uses that to
//! restore the program text after a run is stopped.
//!
//! Positions are plain coordinates, so a position held by an instruction
//! pointer keeps naming the same logical cell however the rest of the space
//! changes.

use toroid_foundation::{Rect, SPACE, Value, Vector};

use crate::region::Region;

/// A sparse 2D store of integer cells.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FungeSpace {
    /// Written cells keyed by coordinate.
    cells: im::HashMap<Vector, Value>,
    /// Minimal rectangle covering every written coordinate.
    bounds: Option<Rect>,
}

impl FungeSpace {
    /// Creates an empty space.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a space holding `text` at the origin.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut space = Self::new();
        space.load_text(Vector::ZERO, text);
        space
    }

    /// Reads a cell; never-written cells read as a space.
    #[must_use]
    #[inline]
    pub fn read(&self, p: Vector) -> Value {
        self.cells.get(&p).copied().unwrap_or(SPACE)
    }

    /// Writes a cell, growing the bounds to cover it.
    pub fn write(&mut self, p: Vector, value: Value) {
        self.cells.insert(p, value);
        self.bounds = Some(match self.bounds {
            Some(b) if b.contains(p) => b,
            Some(b) => b.include(p),
            None => Rect::point(p),
        });
    }

    /// Returns true if the coordinate has ever been written.
    #[must_use]
    pub fn is_written(&self, p: Vector) -> bool {
        self.cells.contains_key(&p)
    }

    /// Number of materialized cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The minimal rectangle enclosing every written coordinate.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Steps from `from` by `delta`.
    ///
    /// Dense semantics: the result is the arithmetically adjacent coordinate
    /// whether or not it has been written. No wrapping is applied here.
    #[must_use]
    #[inline]
    pub fn step(from: Vector, delta: Vector) -> Vector {
        from + delta
    }

    /// Enumerates a rectangle row-major, visiting every coordinate once.
    #[must_use]
    pub fn region(&self, rect: Rect) -> Region<'_> {
        Region::new(self, rect)
    }

    /// Iterates written cells in no particular order.
    pub fn written(&self) -> impl Iterator<Item = (Vector, Value)> + '_ {
        self.cells.iter().map(|(p, v)| (*p, *v))
    }

    /// Returns an independent copy sharing structure with this space.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Folds a coordinate into a finite rectangle, toroidally.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn wrap(rect: Rect, p: Vector) -> Vector {
        let fold = |c: Value, min: Value, extent: i64| -> Value {
            let offset = (i64::from(c) - i64::from(min)).rem_euclid(extent);
            (i64::from(min) + offset) as Value
        };
        Vector::new(
            fold(p.x, rect.min.x, rect.width()),
            fold(p.y, rect.min.y, rect.height()),
        )
    }

    /// Wraps an out-of-bounds position back into the written bounds the way
    /// Funge-98 ("Lahey-space") prescribes: retrace along `-delta` to the last
    /// in-bounds cell on the far side.
    ///
    /// Positions already inside the bounds are returned unchanged, as are
    /// positions whose line of travel never crosses the bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn wrap_lahey(&self, p: Vector, delta: Vector) -> Vector {
        let Some(bounds) = self.bounds else {
            return p;
        };
        if bounds.contains(p) || delta.is_zero() {
            return p;
        }

        // Range of k >= 1 for which p - k*delta stays inside the bounds.
        let mut k_min: i64 = 1;
        let mut k_max: i64 = i64::MAX;
        for (c, d, lo, hi) in [
            (p.x, delta.x, bounds.min.x, bounds.max.x),
            (p.y, delta.y, bounds.min.y, bounds.max.y),
        ] {
            let (c, d, lo, hi) = (i64::from(c), i64::from(d), i64::from(lo), i64::from(hi));
            if d == 0 {
                if c < lo || c > hi {
                    return p;
                }
                continue;
            }
            // lo <= c - k*d <= hi
            let (low, high) = if d > 0 {
                (div_ceil(c - hi, d), (c - lo).div_euclid(d))
            } else {
                let e = -d;
                (div_ceil(lo - c, e), (hi - c).div_euclid(e))
            };
            k_min = k_min.max(low);
            k_max = k_max.min(high);
        }

        if k_max < k_min {
            return p;
        }
        Vector::new(
            (i64::from(p.x) - k_max * i64::from(delta.x)) as Value,
            (i64::from(p.y) - k_max * i64::from(delta.y)) as Value,
        )
    }

    /// Places text at `origin`, one line per row.
    ///
    /// Accepts LF, CR, and CRLF line endings and ignores form feeds. Spaces
    /// are transparent: they never overwrite an existing cell. Returns the
    /// size of the rectangle the text occupies (widest line by line count),
    /// which is `(0, 0)` for empty text.
    pub fn load_text(&mut self, origin: Vector, text: &str) -> Vector {
        let mut x: Value = 0;
        let mut y: Value = 0;
        let mut width: Value = 0;
        let mut chars = text.chars().peekable();
        let mut line_has_content = false;

        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    y += 1;
                    x = 0;
                    line_has_content = false;
                }
                '\n' => {
                    y += 1;
                    x = 0;
                    line_has_content = false;
                }
                '\x0c' => {}
                _ => {
                    #[allow(clippy::cast_possible_wrap)]
                    let value = c as Value;
                    if value != SPACE {
                        self.write(origin + Vector::new(x, y), value);
                    }
                    x += 1;
                    width = width.max(x);
                    line_has_content = true;
                }
            }
        }

        let height = if line_has_content { y + 1 } else { y };
        if width == 0 {
            return Vector::ZERO;
        }
        Vector::new(width, height)
    }

    /// Places bytes linearly along the x axis starting at `origin`.
    ///
    /// Line breaks get no special treatment; spaces stay transparent.
    /// Returns the size `(len, 1)`, or `(0, 0)` for no bytes.
    pub fn load_binary(&mut self, origin: Vector, bytes: &[u8]) -> Vector {
        let mut x: Value = 0;
        for &b in bytes {
            let value = Value::from(b);
            if value != SPACE {
                self.write(origin + Vector::new(x, 0), value);
            }
            x = x.wrapping_add(1);
        }
        if bytes.is_empty() {
            Vector::ZERO
        } else {
            Vector::new(x, 1)
        }
    }

    /// Renders a rectangle as text lines.
    ///
    /// Cells without a printable character render as `?`. With `strip`,
    /// trailing spaces on each line and trailing empty lines are removed.
    #[must_use]
    pub fn region_text(&self, rect: Rect, strip: bool) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut line = String::new();
        let mut row = rect.min.y;
        for (p, value) in self.region(rect) {
            if p.y != row {
                lines.push(std::mem::take(&mut line));
                row = p.y;
            }
            line.push(toroid_foundation::glyph_of(value).unwrap_or('?'));
        }
        lines.push(line);

        if strip {
            for l in &mut lines {
                let trimmed = l.trim_end_matches(' ').len();
                l.truncate(trimmed);
            }
            while lines.last().is_some_and(String::is_empty) {
                lines.pop();
            }
        }

        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

fn div_ceil(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}
