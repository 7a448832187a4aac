//! Integration tests for Layer 1: Space
//!
//! Tests for FungeSpace storage, wrapping, enumeration, and source files.

mod cells;
mod source;
mod wrapping;
