//! Interpreter and tick loop for Toroid.
//!
//! This crate provides:
//! - [`Interpreter`] - owns FungeSpace, the IP list, and the run state
//! - [`Config`] - dialect, seed, limits, and host information
//! - [`TickReport`] - what one tick did, for hosts and tracers
//! - [`EditCursor`] - the interactive cursor, which never executes
//! - [`QueuedInput`] - an in-memory input channel

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod cursor;
pub mod input;
pub mod interpreter;
pub mod report;

pub use config::{Config, RunMode};
pub use cursor::EditCursor;
pub use input::{QueuedInput, SharedInput};
pub use interpreter::{Interpreter, RunState};
pub use report::{FingerprintAction, FingerprintStep, RunSignal, StepRecord, TickReport};
pub use toroid_language::{InputPoll, InputSource, Outcome};
