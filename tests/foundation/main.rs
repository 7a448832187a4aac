//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Vector, Rect, Stack, StackStack, and Error.

mod errors;
mod geometry;
mod stacks;
