//! Integration tests for toroidal and Lahey-space wrapping.

use toroid_foundation::{Rect, Vector};
use toroid_space::FungeSpace;

#[test]
fn board_wrap_folds_both_axes() {
    let board = Rect::befunge93_board();
    assert_eq!(FungeSpace::wrap(board, Vector::new(80, 0)), Vector::new(0, 0));
    assert_eq!(FungeSpace::wrap(board, Vector::new(-1, -1)), Vector::new(79, 24));
    assert_eq!(FungeSpace::wrap(board, Vector::new(165, 51)), Vector::new(5, 1));
}

#[test]
fn lahey_wrap_retraces_to_the_far_side() {
    let space = FungeSpace::from_text("abcd\nefgh\nijkl");
    assert_eq!(
        space.wrap_lahey(Vector::new(4, 1), Vector::EAST),
        Vector::new(0, 1)
    );
    assert_eq!(
        space.wrap_lahey(Vector::new(1, -1), Vector::NORTH),
        Vector::new(1, 2)
    );
    // diagonal travel lands on the last cell of the line inside the bounds
    assert_eq!(
        space.wrap_lahey(Vector::new(4, 3), Vector::new(1, 1)),
        Vector::new(1, 0)
    );
}

#[test]
fn lahey_wrap_leaves_in_bounds_positions_alone() {
    let space = FungeSpace::from_text("ab");
    assert_eq!(space.wrap_lahey(Vector::new(1, 0), Vector::EAST), Vector::new(1, 0));
    assert_eq!(FungeSpace::new().wrap_lahey(Vector::new(9, 9), Vector::EAST), Vector::new(9, 9));
}
