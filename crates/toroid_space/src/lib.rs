//! FungeSpace for Toroid.
//!
//! This crate provides:
//! - [`FungeSpace`] - Sparse 2D cell store addressed over the full `i32` range
//! - [`Region`] - Lazy, restartable row-major enumeration of a rectangle
//! - [`Encoding`] - Byte-order-mark detection and source text codec

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod region;
pub mod source;
pub mod space;

pub use region::Region;
pub use source::{Encoding, read_text_file, write_text_file};
pub use space::FungeSpace;
