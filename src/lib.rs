//! Toroid - Befunge-93 and Funge-98 runtime
//!
//! This crate re-exports all layers of the Toroid system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: toroid_runtime     — CLI, interactive editor session, host I/O
//! Layer 4: toroid_debug       — Tick tracing and trace formatting
//! Layer 3: toroid_engine      — Interpreter, tick loop, run modes, edit cursor
//! Layer 2: toroid_language    — Instruction catalog, IPs, fingerprints
//! Layer 1: toroid_space       — Sparse toroidal FungeSpace, source codec
//! Layer 0: toroid_foundation  — Core types (Value, Vector, Stack, Error)
//! ```

pub use toroid_debug as debug;
pub use toroid_engine as engine;
pub use toroid_foundation as foundation;
pub use toroid_language as language;
pub use toroid_runtime as runtime;
pub use toroid_space as space;
