//! Integration tests for Stack and StackStack.

use proptest::prelude::*;
use toroid_foundation::{Stack, StackStack, Vector};

// =============================================================================
// Stack
// =============================================================================

#[test]
fn empty_stack_pops_zero() {
    let mut s = Stack::new();
    assert_eq!(s.pop(), 0);
    assert_eq!(s.pop_vector(), Vector::ZERO);
    assert!(s.is_empty());
}

#[test]
fn ensure_pads_at_the_bottom() {
    let mut s = Stack::from_bottom(vec![5, 6]);
    s.ensure(4);
    assert_eq!(s.as_bottom_slice(), &[0, 0, 5, 6]);
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![6, 5, 0, 0]);
}

#[test]
fn strings_pop_in_reading_order() {
    let mut s = Stack::new();
    s.push_string("Funge");
    assert_eq!(s.len(), 6);
    assert_eq!(s.pop_string(), "Funge");
    assert!(s.is_empty());
}

// =============================================================================
// StackStack
// =============================================================================

#[test]
fn block_round_trip_restores_offset() {
    let mut ss = StackStack::new();
    ss.toss_mut().extend_from_bottom([1, 2, 3]);
    ss.begin_block(2, Vector::new(7, 8));
    assert_eq!(ss.depth(), 2);
    assert_eq!(ss.toss().as_bottom_slice(), &[2, 3]);
    assert_eq!(ss.sizes(), vec![2, 3]);

    let offset = ss.end_block(1);
    assert_eq!(offset, Some(Vector::new(7, 8)));
    assert_eq!(ss.depth(), 1);
    assert_eq!(ss.toss().as_bottom_slice(), &[1, 3]);
}

#[test]
fn end_block_without_soss_fails() {
    let mut ss = StackStack::new();
    ss.toss_mut().push(9);
    assert_eq!(ss.end_block(1), None);
    assert_eq!(ss.toss().as_bottom_slice(), &[9]);
}

#[test]
fn negative_block_counts_discard() {
    let mut ss = StackStack::new();
    ss.toss_mut().extend_from_bottom([1, 2, 3]);
    ss.begin_block(-2, Vector::ZERO);
    assert!(ss.toss().is_empty());
    assert_eq!(ss.soss().map(Stack::len), Some(3)); // 1 plus the offset vector
}

#[test]
fn transfer_under_moves_one_at_a_time() {
    let mut ss = StackStack::new();
    ss.toss_mut().extend_from_bottom([1, 2]);
    ss.begin_block(0, Vector::ZERO);
    ss.toss_mut().push(9);
    // the SOSS holds 1 2 0 0 with the offset on top
    assert!(ss.transfer_under(3));
    assert_eq!(ss.toss().as_bottom_slice(), &[9, 0, 0, 2]);
    assert!(ss.transfer_under(-1));
    assert_eq!(ss.soss().map(|s| s.as_bottom_slice().to_vec()), Some(vec![1, 2]));
    assert!(!StackStack::new().transfer_under(1));
}

proptest! {
    #[test]
    fn ensure_keeps_existing_cells_on_top(cells in prop::collection::vec(any::<i32>(), 0..20), want in 0usize..40) {
        let mut s = Stack::from_bottom(cells.clone());
        s.ensure(want);
        prop_assert_eq!(s.len(), cells.len().max(want));
        let top: Vec<i32> = s.as_bottom_slice()[s.len() - cells.len()..].to_vec();
        prop_assert_eq!(top, cells);
    }
}
