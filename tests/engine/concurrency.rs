//! Integration tests for forking IPs.

use proptest::prelude::*;
use toroid_engine::{Config, Interpreter, RunSignal};

use crate::output_of;

#[test]
fn fork_yields_two_ips_with_equal_stacks() {
    let mut interpreter = Interpreter::with_source(Config::default(), "12t>#<");
    interpreter.start();
    for _ in 0..3 {
        interpreter.tick();
    }
    let ips = interpreter.ips();
    assert_eq!(ips.len(), 2);
    assert_eq!(interpreter.active_ips(), 2);

    let parent = &ips[0];
    let child = &ips[1];
    assert_eq!(parent.stacks, child.stacks);
    assert_eq!(child.delta, parent.delta.reversed());
    assert!(child.id() > parent.id());
    assert_eq!(child.parent(), Some(parent.id()));
}

#[test]
fn child_runs_before_its_parent() {
    // the child wraps to the east end of the line and prints 3 first
    assert_eq!(output_of("t2.@@.3"), "32");
}

#[test]
fn quit_ends_every_ip() {
    // the child lands back on `7`; the parent quits on the following tick
    let mut interpreter = Interpreter::with_source(Config::default(), "7tq");
    assert_eq!(interpreter.run_to_idle(), RunSignal::Quit(7));
    assert_eq!(interpreter.ips().len(), 2);
    assert_eq!(interpreter.active_ips(), 0);
    assert_eq!(interpreter.quit_code(), Some(7));
}

#[test]
fn fork_report_lists_the_child() {
    let mut interpreter = Interpreter::with_source(Config::default(), "t@");
    interpreter.start();
    let report = interpreter.tick();
    assert_eq!(report.forked, vec![1]);
    let report = interpreter.tick();
    // child (id 1) runs first, then the parent
    assert_eq!(report.terminated, vec![1, 0]);
    assert_eq!(report.signal, Some(RunSignal::Idle));
}

proptest! {
    #[test]
    fn every_fork_gets_a_fresh_id(forks in 1usize..6) {
        // the parent hops over each `@`; every child steps back onto one
        let source = format!("{}@", "#@t".repeat(forks));
        let mut interpreter = Interpreter::with_source(
            Config::default().with_max_ticks(Some(1_000)),
            &source,
        );
        let signal = interpreter.run_to_idle();
        prop_assert_eq!(signal, RunSignal::Idle);

        let mut ids: Vec<u64> = interpreter.ips().iter().map(|ip| ip.id()).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
        prop_assert_eq!(count, forks + 1);
        prop_assert!(interpreter.ips().iter().all(|ip| ip.stacks.toss().is_empty()));
    }
}
