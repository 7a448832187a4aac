//! Integration tests for starting, stopping, pacing, and feeding input.

use std::time::Duration;

use toroid_engine::{Config, Interpreter, QueuedInput, RunMode, RunSignal, RunState, SharedInput};
use toroid_foundation::{Value, Vector};

use crate::run;

fn cell(interpreter: &Interpreter, x: i32, y: i32) -> Value {
    interpreter.space().read(Vector::new(x, y))
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn input_suspends_until_text_arrives() {
    let input = SharedInput::new();
    let mut interpreter =
        Interpreter::with_source(Config::default().with_echo_input(false), "~,@");
    interpreter.set_input(Box::new(input.clone()));

    assert_eq!(interpreter.run_to_idle(), RunSignal::AwaitingInput);
    assert!(interpreter.is_running());
    assert_eq!(interpreter.tick_count(), 1);

    input.push_str("a");
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "a");
    // the suspended tick was finished, not counted twice
    assert_eq!(interpreter.tick_count(), 3);
    assert!(input.is_empty());
}

#[test]
fn end_of_input_reflects() {
    let mut interpreter =
        Interpreter::with_source(Config::default().with_echo_input(false), "~.@");
    interpreter.set_input(Box::new(QueuedInput::closed("z")));
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "122");

    // the second run finds the queue drained and bounces west onto `@`
    let mut interpreter =
        Interpreter::with_source(Config::default().with_echo_input(false), "~.@");
    interpreter.set_input(Box::new(QueuedInput::closed("")));
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "");
}

#[test]
fn echoed_input_reaches_the_output_log() {
    let mut interpreter = Interpreter::with_source(Config::default(), "~~,,@");
    interpreter.set_input(Box::new(QueuedInput::closed("ok")));
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "okko");
}

// =============================================================================
// Stopping
// =============================================================================

#[test]
fn tick_limit_stops_the_run() {
    let (output, signal) = run(Config::default(), ">");
    assert_eq!(signal, RunSignal::Stopped);
    assert_eq!(output, "");

    let mut interpreter = Interpreter::with_source(Config::default().with_max_ticks(Some(50)), ">");
    assert_eq!(interpreter.run_to_idle(), RunSignal::Stopped);
    assert_eq!(interpreter.tick_count(), 50);
    assert_eq!(interpreter.run_state(), RunState::Edit);
    assert_eq!(interpreter.active_ips(), 0);
}

#[test]
fn stop_only_applies_to_a_running_program() {
    let mut interpreter = Interpreter::with_source(Config::default(), ">");
    assert!(!interpreter.stop());
    interpreter.start();
    interpreter.tick();
    assert!(interpreter.stop());
    assert!(!interpreter.is_running());
    assert!(!interpreter.stop());
}

#[test]
fn stopping_can_restore_the_program() {
    let source = "'X00p>";
    let config = Config::default().with_max_ticks(Some(20));

    let mut kept = Interpreter::with_source(config.clone(), source);
    assert_eq!(kept.run_to_idle(), RunSignal::Stopped);
    assert_eq!(cell(&kept, 0, 0), Value::from(b'X'));

    let mut restored = Interpreter::with_source(config.with_restore_on_stop(true), source);
    assert_eq!(restored.run_to_idle(), RunSignal::Stopped);
    assert_eq!(cell(&restored, 0, 0), Value::from(b'\''));
}

#[test]
fn restore_after_a_finished_run() {
    let mut interpreter = Interpreter::with_source(Config::default(), "'X00p@");
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(cell(&interpreter, 0, 0), Value::from(b'X'));
    assert!(interpreter.restore());
    assert_eq!(cell(&interpreter, 0, 0), Value::from(b'\''));
    assert!(!interpreter.restore());
}

#[test]
fn reset_clears_everything() {
    let mut interpreter = Interpreter::with_source(Config::default(), "1.@");
    interpreter.run_to_idle();
    interpreter.reset();
    assert!(interpreter.space().is_empty());
    assert_eq!(interpreter.output(), "");
    assert_eq!(interpreter.tick_count(), 0);
    assert_eq!(interpreter.cursor().position(), Vector::ZERO);
}

#[test]
fn ticking_in_edit_state_does_nothing() {
    let mut interpreter = Interpreter::with_source(Config::default(), "1.@");
    let report = interpreter.tick();
    assert_eq!(report.signal, Some(RunSignal::Idle));
    assert_eq!(interpreter.tick_count(), 0);
    assert_eq!(interpreter.output(), "");
}

// =============================================================================
// Pacing
// =============================================================================

#[test]
fn pace_follows_the_mode() {
    let mut interpreter = Interpreter::new(Config::default());
    assert_eq!(interpreter.pace(), Some(Duration::ZERO));

    interpreter.set_mode(RunMode::Delayed(Duration::from_millis(40)));
    assert_eq!(interpreter.pace(), Some(Duration::from_millis(40)));

    interpreter.set_mode(RunMode::SingleStep);
    assert_eq!(interpreter.pace(), None);
    assert_eq!(interpreter.mode(), RunMode::SingleStep);
}

#[test]
fn modes_do_not_change_results() {
    let source = "\"!iH\",,,@";
    for mode in [
        RunMode::Continuous,
        RunMode::Delayed(Duration::from_millis(1)),
        RunMode::SingleStep,
    ] {
        let (output, signal) = run(Config::default().with_mode(mode), source);
        assert_eq!(signal, RunSignal::Idle);
        assert_eq!(output, "Hi!");
    }
}

// =============================================================================
// Edit cursor
// =============================================================================

#[test]
fn typed_programs_run() {
    let mut interpreter = Interpreter::new(Config::default());
    interpreter.type_at_cursor("52*.@");
    assert_eq!(interpreter.cursor().position(), Vector::new(5, 0));
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "10");
}

#[test]
fn cursor_heading_and_board_wrap() {
    let mut interpreter = Interpreter::new(Config::default());
    assert!(interpreter.cursor_mut().set_heading(Vector::SOUTH));
    interpreter.type_at_cursor("ab");
    assert_eq!(cell(&interpreter, 0, 0), Value::from(b'a'));
    assert_eq!(cell(&interpreter, 0, 1), Value::from(b'b'));

    assert!(!interpreter.cursor_mut().set_heading(Vector::new(1, 1)));
    interpreter.cursor_mut().set_heading(Vector::EAST);
    interpreter.cursor_mut().move_to(Vector::new(79, 3));
    interpreter.type_at_cursor("xy");
    assert_eq!(cell(&interpreter, 79, 3), Value::from(b'x'));
    assert_eq!(cell(&interpreter, 0, 3), Value::from(b'y'));
}
