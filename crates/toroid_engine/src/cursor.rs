//! The interactive edit cursor.
//!
//! The cursor is a pointer that never executes. It lives on the fixed
//! board, moves one cell at a time along its heading, and wraps
//! toroidally at the board edges.

use toroid_foundation::{Rect, SPACE, Value, Vector};
use toroid_space::FungeSpace;

/// Cursor used to type program text into FungeSpace.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EditCursor {
    position: Vector,
    heading: Vector,
    board: Rect,
}

impl EditCursor {
    /// Creates a cursor at the board origin heading east.
    #[must_use]
    pub fn new(board: Rect) -> Self {
        Self {
            position: board.min,
            heading: Vector::EAST,
            board,
        }
    }

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Direction of travel.
    #[must_use]
    pub fn heading(&self) -> Vector {
        self.heading
    }

    /// The board the cursor is confined to.
    #[must_use]
    pub fn board(&self) -> Rect {
        self.board
    }

    /// Moves one cell along the heading.
    pub fn step(&mut self) {
        self.position = FungeSpace::wrap(self.board, self.position + self.heading);
    }

    /// Moves one cell against the heading.
    pub fn step_back(&mut self) {
        self.position = FungeSpace::wrap(self.board, self.position - self.heading);
    }

    /// Changes the heading. Only cardinal headings are accepted.
    ///
    /// Returns false and leaves the heading alone for anything else.
    pub fn set_heading(&mut self, heading: Vector) -> bool {
        if heading.is_cardinal() {
            self.heading = heading;
            true
        } else {
            false
        }
    }

    /// Jumps to a cell, folded onto the board.
    pub fn move_to(&mut self, position: Vector) {
        self.position = FungeSpace::wrap(self.board, position);
    }

    /// Writes a cell under the cursor and steps.
    pub fn put(&mut self, space: &mut FungeSpace, value: Value) {
        space.write(self.position, value);
        self.step();
    }

    /// Types a string, one cell per character.
    pub fn type_str(&mut self, space: &mut FungeSpace, text: &str) {
        for c in text.chars() {
            #[allow(clippy::cast_possible_wrap)]
            self.put(space, c as Value);
        }
    }

    /// Steps back and clears the cell there.
    pub fn backspace(&mut self, space: &mut FungeSpace) {
        self.step_back();
        space.write(self.position, SPACE);
    }
}
