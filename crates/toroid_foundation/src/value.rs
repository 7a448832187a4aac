//! The cell value type.
//!
//! Every FungeSpace cell and every stack slot holds a [`Value`]. Most cells
//! hold character codes, but any integer can be computed and stored.

/// A FungeSpace cell or stack entry.
pub type Value = i32;

/// The space character; every never-written cell reads as this.
pub const SPACE: Value = 32;

/// Returns true for cells the tick loop skips while resolving the next
/// instruction (space only; other control characters are instructions).
#[must_use]
#[inline]
pub const fn is_whitespace(value: Value) -> bool {
    value == SPACE
}

/// Returns the printable character for a cell, if it has one.
///
/// Values outside the Unicode scalar range (or negative) yield `None`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn glyph_of(value: Value) -> Option<char> {
    if value < 0 {
        return None;
    }
    char::from_u32(value as u32)
}
