//! Integration tests for complete programs.

use toroid_engine::{Config, FingerprintAction, Interpreter, RunSignal};
use toroid_foundation::Vector;

use crate::{output_of, run};

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn scenario_a_adds_and_prints() {
    let mut interpreter = Interpreter::with_source(Config::default(), "55+.@");
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.output(), "10");
    assert_eq!(interpreter.active_ips(), 0);
}

#[test]
fn scenario_b_subtract_on_empty_stack() {
    let mut interpreter = Interpreter::with_source(Config::default().with_record_steps(true), "-@");
    interpreter.start();
    let report = interpreter.tick();
    assert_eq!(report.executed.len(), 1);
    assert_eq!(interpreter.ips()[0].stacks.toss().as_bottom_slice(), &[0]);
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
}

#[test]
fn scenario_c_horizontal_if_zero_goes_east() {
    let mut interpreter = Interpreter::with_source(Config::default(), "0_@");
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.tick_count(), 3);
    assert_eq!(interpreter.ips()[0].delta, Vector::EAST);
}

#[test]
fn scenario_d_space_run_costs_one_tick() {
    let mut interpreter = Interpreter::with_source(Config::default(), "1  .@");
    assert_eq!(interpreter.run_to_idle(), RunSignal::Idle);
    assert_eq!(interpreter.output(), "1");
    assert_eq!(interpreter.tick_count(), 3);
}

// =============================================================================
// Classic programs
// =============================================================================

#[test]
fn hello_world() {
    let source = "\"!dlroW ,olleH\">:#,_@";
    assert_eq!(output_of(source), "Hello, World!");
}

#[test]
fn countdown_loop() {
    let source = "5>:.1-:v\n ^     _@";
    assert_eq!(output_of(source), "54321");
}

#[test]
fn self_modifying_put() {
    // writes '.' into the blank at (6, 0) before reaching it
    assert_eq!(output_of("'.60p9 @"), "9");
}

#[test]
fn funge98_wraps_around_the_bounds() {
    // leaves west through x=0 and comes back in at the east end of the line
    assert_eq!(output_of("<@.7"), "7");
}

#[test]
fn iterate_repeats_the_next_instruction() {
    assert_eq!(output_of("13k:....@"), "1111");
}

#[test]
fn jump_over_skips_cells() {
    assert_eq!(output_of("2j12..@"), "00");
    assert_eq!(output_of("1;2 3;.@"), "1");
}

#[test]
fn fingerprint_program() {
    assert_eq!(output_of("\"AMOR\"4($$ XI+.@"), "11");
}

#[test]
fn sysinfo_picks_single_cells() {
    // flags (t, i, o implemented), bytes per cell, dimensions
    assert_eq!(output_of("1y.2y.7y.@"), "742");
}

#[test]
fn befunge93_board_wraps_at_80_columns() {
    let (out, signal) = run(Config::befunge93(), "<@.2");
    assert_eq!(out, "2");
    assert_eq!(signal, RunSignal::Idle);
}

#[test]
fn block_on_last_written_column_offsets_past_it() {
    let mut interpreter = Interpreter::with_source(Config::default(), "0{");
    interpreter.start();
    interpreter.tick();
    interpreter.tick();
    assert_eq!(interpreter.ips()[0].storage_offset, Vector::new(2, 0));
    assert_eq!(interpreter.ips()[0].stacks.depth(), 2);
}

#[test]
fn fingerprint_changes_are_reported_without_step_records() {
    let mut interpreter = Interpreter::with_source(Config::default(), "\"AMOR\"4(@");
    let mut changes = Vec::new();
    interpreter.run_with(|report, _| changes.extend(report.fingerprints.iter().copied()));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].action, FingerprintAction::Loaded("ROMA"));
    assert_eq!(changes[0].position, Vector::new(7, 0));
}
