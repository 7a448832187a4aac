//! Instruction layer for Toroid.
//!
//! This crate turns FungeSpace cells into behavior:
//! - [`catalog`]: one immutable [`Instruction`] descriptor per cell value
//! - [`Ip`]: an instruction pointer with its stack-stack and fingerprints
//! - [`Environment`]: host-facing state shared by every IP of a run
//! - [`execute`]: the single dispatch function over [`Op`]
//! - [`motion`]: movement, wrapping, and transparent-cell resolution
//! - [`fingerprint`]: loadable letter-instruction bundles
//!
//! Language-level failures never surface as [`toroid_foundation::Error`];
//! an instruction that cannot complete reflects its IP instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod environment;
pub mod exec;
pub mod fingerprint;
pub mod ip;
pub mod motion;
mod ops;

pub use catalog::{Category, Instruction, Op, catalog, lookup};
pub use environment::{Environment, InputPoll, InputSource, ReferenceTable};
pub use exec::{ExecContext, Outcome, execute};
pub use fingerprint::{Fingerprint, FingerprintRegistry, LetterFn, fingerprint_id};
pub use ip::{Ip, IpId};
