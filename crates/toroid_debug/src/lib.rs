//! Tracing for Toroid.
//!
//! This crate provides:
//! - [`Tracer`] - turns tick reports into trace records
//! - [`TraceBuffer`] - a bounded ring of recent records
//! - [`HumanFormatter`] and [`JsonFormatter`] - record output
//!
//! The engine never calls into this crate; hosts hand each
//! [`toroid_engine::TickReport`] to [`Tracer::observe`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod trace;

pub use config::{TraceOutput, TracerConfig, Verbosity};
pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceEvent, TraceFormatter,
    TraceRecord, TraceSummary, Tracer,
};
