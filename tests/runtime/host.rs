//! Tests for blocking host input and log level parsing.

use toroid_engine::{Config, Interpreter, RunSignal};
use toroid_runtime::StdinInput;
use toroid_runtime::host::parse_level;

#[test]
fn batch_input_never_suspends() {
    let mut interpreter =
        Interpreter::with_source(Config::default().with_echo_input(false), "~~,,@");
    interpreter.set_input(Box::new(StdinInput::from_reader("ab".as_bytes())));
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "ba");

    // end of input reflects `~` west onto `@`
    let mut interpreter =
        Interpreter::with_source(Config::default().with_echo_input(false), "~.@");
    interpreter.set_input(Box::new(StdinInput::from_reader("".as_bytes())));
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "");
}

#[test]
fn numbers_read_from_lines() {
    let mut interpreter =
        Interpreter::with_source(Config::default().with_echo_input(false), "&&+.@");
    interpreter.set_input(Box::new(StdinInput::from_reader("19\n23\n".as_bytes())));
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.take_output(), "42");
}

#[test]
fn log_levels_parse() {
    assert_eq!(parse_level("debug").unwrap(), log::LevelFilter::Debug);
    assert_eq!(parse_level("OFF").unwrap(), log::LevelFilter::Off);
    assert!(parse_level("loud").is_err());
}
