//! Integration tests for Layer 3: Engine
//!
//! Tests for whole-program runs: the reference scenarios, concurrency,
//! fingerprints, input, and run control.

mod concurrency;
mod programs;
mod run_control;

use toroid_engine::{Config, Interpreter, RunSignal};

/// Runs `source` to completion and returns the output and final signal.
pub fn run(config: Config, source: &str) -> (String, RunSignal) {
    let mut interpreter = Interpreter::with_source(config.with_max_ticks(Some(10_000)), source);
    let signal = interpreter.run_to_idle();
    (interpreter.take_output(), signal)
}

/// Runs a Funge-98 program and returns its output.
pub fn output_of(source: &str) -> String {
    run(Config::default(), source).0
}
