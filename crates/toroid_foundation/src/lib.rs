//! Core types for Toroid.
//!
//! This crate provides:
//! - [`Value`] - The integer cell type stored in FungeSpace and on stacks
//! - [`Vector`] - 2D integer vectors for positions, deltas, and offsets
//! - [`Rect`] - Axis-aligned rectangles over FungeSpace coordinates
//! - [`Stack`] and [`StackStack`] - Zero-padding stacks and the stack-of-stacks
//! - [`Dialect`] - Befunge-93 compatibility versus Funge-98
//! - [`Error`] - Host-level error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dialect;
pub mod error;
pub mod rect;
pub mod stack;
pub mod value;
pub mod vector;

pub use dialect::Dialect;
pub use error::{Error, ErrorContext, ErrorKind};
pub use rect::Rect;
pub use stack::{Stack, StackStack};
pub use value::{SPACE, Value, glyph_of, is_whitespace};
pub use vector::Vector;

/// Result type alias using the Toroid error type.
pub type Result<T> = std::result::Result<T, Error>;
