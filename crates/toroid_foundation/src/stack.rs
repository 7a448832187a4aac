//! Stacks and the stack-of-stacks.
//!
//! A [`Stack`] behaves as if an infinite supply of zeros sat beneath its
//! visible top: popping an empty stack yields `0`, and [`Stack::ensure`]
//! materializes those zeros at the bottom so an instruction can rely on a
//! minimum depth.
//!
//! A [`StackStack`] is never empty. The last stack is the TOSS (top of stack
//! stack) and the one beneath it, if any, is the SOSS.

use std::fmt;

use crate::value::Value;
use crate::vector::Vector;

/// A stack of cells with zero-padding underflow semantics.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    /// Cells, bottom first.
    cells: Vec<Value>,
}

impl Stack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Creates a stack from cells listed bottom first.
    #[must_use]
    pub fn from_bottom(cells: Vec<Value>) -> Self {
        Self { cells }
    }

    /// Number of materialized cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cells are materialized.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pushes a cell.
    #[inline]
    pub fn push(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// Pops a cell, yielding `0` when empty.
    #[inline]
    pub fn pop(&mut self) -> Value {
        self.cells.pop().unwrap_or(0)
    }

    /// Returns the top cell without popping (`0` when empty).
    #[must_use]
    #[inline]
    pub fn peek(&self) -> Value {
        self.cells.last().copied().unwrap_or(0)
    }

    /// Pops a vector pushed as `x` then `y`.
    pub fn pop_vector(&mut self) -> Vector {
        let y = self.pop();
        let x = self.pop();
        Vector::new(x, y)
    }

    /// Pushes a vector as `x` then `y`.
    pub fn push_vector(&mut self, v: Vector) {
        self.push(v.x);
        self.push(v.y);
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Zero-pads at the bottom until at least `required` cells exist.
    ///
    /// Existing cells keep their relative order on top of the new zeros.
    pub fn ensure(&mut self, required: usize) {
        let missing = required.saturating_sub(self.cells.len());
        if missing > 0 {
            self.cells.splice(0..0, std::iter::repeat_n(0, missing));
        }
    }

    /// Removes the top `n` cells and returns them bottom first, with zeros
    /// standing in for cells below the bottom.
    pub fn take_top(&mut self, n: usize) -> Vec<Value> {
        let available = n.min(self.cells.len());
        let split = self.cells.len() - available;
        let mut taken = vec![0; n - available];
        taken.extend(self.cells.drain(split..));
        taken
    }

    /// Discards up to `n` cells from the top.
    pub fn discard(&mut self, n: usize) {
        let keep = self.cells.len().saturating_sub(n);
        self.cells.truncate(keep);
    }

    /// Pushes cells given bottom first.
    pub fn extend_from_bottom(&mut self, cells: impl IntoIterator<Item = Value>) {
        self.cells.extend(cells);
    }

    /// Pops a zero-terminated string (a "0gnirts"), top character first.
    ///
    /// An empty stack terminates the string, since it yields zeros.
    pub fn pop_string(&mut self) -> String {
        let mut s = String::new();
        loop {
            let c = self.pop();
            if c == 0 {
                break;
            }
            s.push(crate::value::glyph_of(c).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        s
    }

    /// Pushes a string so that it pops back in reading order, terminated by `0`.
    pub fn push_string(&mut self, s: &str) {
        self.push(0);
        for c in s.chars().rev() {
            #[allow(clippy::cast_possible_wrap)]
            self.push(c as Value);
        }
    }

    /// Iterates cells top first.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.cells.iter().rev().copied()
    }

    /// Returns cells bottom first.
    #[must_use]
    pub fn as_bottom_slice(&self) -> &[Value] {
        &self.cells
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

/// A non-empty ordered collection of stacks.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackStack {
    /// Stacks, bottom first. Never empty.
    stacks: Vec<Stack>,
}

impl Default for StackStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StackStack {
    /// Creates a stack-stack holding one empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stacks: vec![Stack::new()],
        }
    }

    /// Number of stacks (always at least one).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stacks.len()
    }

    /// Top of stack-stack.
    #[must_use]
    pub fn toss(&self) -> &Stack {
        &self.stacks[self.stacks.len() - 1]
    }

    /// Mutable top of stack-stack.
    pub fn toss_mut(&mut self) -> &mut Stack {
        let top = self.stacks.len() - 1;
        &mut self.stacks[top]
    }

    /// Second stack, if one exists.
    #[must_use]
    pub fn soss(&self) -> Option<&Stack> {
        self.stacks.len().checked_sub(2).map(|i| &self.stacks[i])
    }

    /// Mutable second stack, if one exists.
    pub fn soss_mut(&mut self) -> Option<&mut Stack> {
        let i = self.stacks.len().checked_sub(2)?;
        Some(&mut self.stacks[i])
    }

    /// Mutable TOSS and SOSS together, if a SOSS exists.
    pub fn toss_and_soss(&mut self) -> Option<(&mut Stack, &mut Stack)> {
        if self.stacks.len() < 2 {
            return None;
        }
        let last = self.stacks.len() - 1;
        let (below, top) = self.stacks.split_at_mut(last);
        let soss = below.last_mut()?;
        Some((&mut top[0], soss))
    }

    /// Sizes of every stack, top stack first.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.stacks.iter().rev().map(Stack::len).collect()
    }

    /// Opens a new block (`{`).
    ///
    /// With `n >= 0`, the top `n` cells of the current TOSS move onto the new
    /// TOSS in their original order, zero-padded if fewer are available.
    /// With `n < 0`, `|n|` cells are discarded from the current TOSS instead.
    /// The old `storage_offset` is then pushed onto what becomes the SOSS.
    pub fn begin_block(&mut self, n: Value, storage_offset: Vector) {
        let old = self.toss_mut();
        let moved = if n >= 0 {
            old.take_top(n.unsigned_abs() as usize)
        } else {
            old.discard(n.unsigned_abs() as usize);
            Vec::new()
        };
        old.push_vector(storage_offset);
        self.stacks.push(Stack::from_bottom(moved));
    }

    /// Closes the current block (`}`), returning the restored storage offset.
    ///
    /// Returns `None`, leaving everything untouched, when only one stack
    /// exists; the caller reflects.
    pub fn end_block(&mut self, n: Value) -> Option<Vector> {
        let (toss, soss) = self.toss_and_soss()?;
        let offset = soss.pop_vector();
        if n >= 0 {
            let moved = toss.take_top(n.unsigned_abs() as usize);
            soss.extend_from_bottom(moved);
        } else {
            soss.discard(n.unsigned_abs() as usize);
        }
        self.stacks.pop();
        Some(offset)
    }

    /// Moves cells one at a time between SOSS and TOSS (`u`).
    ///
    /// A positive count pops from SOSS and pushes onto TOSS; a negative count
    /// goes the other way. Returns `false` when there is no SOSS.
    pub fn transfer_under(&mut self, count: Value) -> bool {
        let Some((toss, soss)) = self.toss_and_soss() else {
            return false;
        };
        if count >= 0 {
            for _ in 0..count {
                toss.push(soss.pop());
            }
        } else {
            for _ in 0..count.unsigned_abs() {
                soss.push(toss.pop());
            }
        }
        true
    }

    /// Iterates stacks, top stack first.
    pub fn iter(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().rev()
    }
}

impl fmt::Debug for StackStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stacks.iter().rev()).finish()
    }
}
