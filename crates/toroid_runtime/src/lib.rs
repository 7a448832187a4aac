//! CLI, interactive session, and snapshots for Toroid.
//!
//! This crate provides:
//! - [`Repl`] - the interactive editor session loop
//! - [`Session`] - interpreter, tracer, and input queue behind `:` commands
//! - [`serialize`] - `MessagePack` snapshots of FungeSpace and the cursor
//! - [`host`] - blocking stdin input and a stderr log backend

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod editor;
pub mod host;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod view;

pub use command::Command;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use host::{StdinInput, init_logging};
pub use repl::Repl;
pub use serialize::SavedState;
pub use session::Session;
