//! Integration tests for single-instruction semantics.

use toroid_foundation::{Dialect, Vector};
use toroid_language::Outcome;

use crate::Machine;

#[test]
fn subtract_on_empty_stack_pads_with_zeros() {
    let mut m = Machine::funge98();
    assert_eq!(m.exec('-'), Outcome::Done);
    assert_eq!(m.stack(), vec![0]);
}

#[test]
fn division_by_zero_pushes_zero() {
    let mut m = Machine::funge98();
    m.push(&[7, 0]);
    m.exec('/');
    m.push(&[7, 0]);
    m.exec('%');
    assert_eq!(m.stack(), vec![0, 0]);

    let mut m = Machine::funge98();
    m.push(&[i32::MIN, -1]);
    m.exec('/');
    assert_eq!(m.stack(), vec![i32::MIN]);
}

#[test]
fn horizontal_if_branches_on_zero() {
    let mut m = Machine::funge98();
    m.ip.delta = Vector::WEST;
    m.exec('_');
    assert_eq!(m.ip.delta, Vector::EAST);
    m.push(&[3]);
    m.exec('_');
    assert_eq!(m.ip.delta, Vector::WEST);
}

#[test]
fn compare_turns() {
    let mut m = Machine::funge98();
    m.push(&[1, 2]);
    m.exec('w');
    assert_eq!(m.ip.delta, Vector::NORTH);
    m.push(&[2, 1]);
    m.exec('w');
    assert_eq!(m.ip.delta, Vector::EAST);
}

#[test]
fn get_and_put_use_the_storage_offset() {
    let mut m = Machine::funge98();
    m.ip.storage_offset = Vector::new(10, 20);
    m.push(&[65, 1, 2]);
    m.exec('p');
    assert_eq!(m.space.read(Vector::new(11, 22)), 65);
    m.push(&[1, 2]);
    m.exec('g');
    assert_eq!(m.stack(), vec![65]);
}

#[test]
fn block_instructions_round_trip() {
    let mut m = Machine::funge98();
    m.ip.position = Vector::new(4, 4);
    m.push(&[1, 2, 3, 2]);
    m.exec('{');
    assert_eq!(m.ip.stacks.depth(), 2);
    assert_eq!(m.stack(), vec![2, 3]);
    assert_eq!(m.ip.storage_offset, Vector::new(5, 4));

    m.push(&[1]);
    m.exec('}');
    assert_eq!(m.ip.stacks.depth(), 1);
    assert_eq!(m.ip.storage_offset, Vector::ZERO);
    assert_eq!(m.stack(), vec![1, 3]);
}

#[test]
fn end_block_without_soss_reflects() {
    let mut m = Machine::funge98();
    assert_eq!(m.exec('}'), Outcome::Reflect);
    assert_eq!(m.ip.delta, Vector::WEST);
    assert_eq!(m.exec('u'), Outcome::Reflect);
}

#[test]
fn fork_copies_stacks_and_reverses_delta() {
    let mut m = Machine::funge98();
    m.space = toroid_space::FungeSpace::from_text("1t2");
    m.ip.position = Vector::new(1, 0);
    m.push(&[4, 5]);
    let parent_id = m.ip.id();
    m.exec('t');

    assert_eq!(m.forks.len(), 1);
    let child = &m.forks[0];
    assert!(child.id() > parent_id);
    assert_eq!(child.stacks, m.ip.stacks);
    assert_eq!(child.delta, m.ip.delta.reversed());
    assert!(child.is_active() && m.ip.is_active());
}

#[test]
fn funge98_only_instructions_reflect_in_befunge93() {
    let mut m = Machine::new(Dialect::Befunge93);
    for c in ['t', 'k', 'n', 'y', '('] {
        m.ip.delta = Vector::EAST;
        assert_eq!(m.exec(c), Outcome::Reflect, "{c}");
    }
}

#[test]
fn input_eof_reflects() {
    let mut m = Machine::funge98();
    assert_eq!(m.exec('~'), Outcome::Reflect);
    assert_eq!(m.exec('&'), Outcome::Reflect);
    assert!(m.stack().is_empty());
}

#[test]
fn output_goes_to_the_environment() {
    let mut m = Machine::funge98();
    m.push(&[72, -5]);
    m.exec('.');
    m.exec(',');
    assert_eq!(m.env.output(), "-5H");
}
