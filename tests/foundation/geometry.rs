//! Integration tests for Vector and Rect.

use toroid_foundation::{Rect, Vector};

// =============================================================================
// Vector
// =============================================================================

#[test]
fn turning_cycles_through_cardinals() {
    let mut d = Vector::EAST;
    for _ in 0..4 {
        d = d.turn_right();
    }
    assert_eq!(d, Vector::EAST);
    assert_eq!(Vector::EAST.turn_right(), Vector::SOUTH);
    assert_eq!(Vector::EAST.turn_left(), Vector::NORTH);
    assert_eq!(Vector::new(2, -3).reversed(), Vector::new(-2, 3));
}

#[test]
fn vector_arithmetic() {
    let a = Vector::new(3, 4);
    let b = Vector::new(-1, 2);
    assert_eq!(a + b, Vector::new(2, 6));
    assert_eq!(a - b, Vector::new(4, 2));
    assert_eq!(-a, Vector::new(-3, -4));
    assert_eq!(b * 3, Vector::new(-3, 6));
    assert!(Vector::SOUTH.is_cardinal());
    assert!(!Vector::new(1, 1).is_cardinal());
    assert_eq!(Vector::new(1, -1).to_string(), "(1, -1)");
}

// =============================================================================
// Rect
// =============================================================================

#[test]
fn rect_grows_to_cover_points() {
    let r = Rect::from_corners(Vector::new(2, 5), Vector::new(-1, 3));
    assert_eq!(r.min, Vector::new(-1, 3));
    assert_eq!(r.max, Vector::new(2, 5));
    assert_eq!((r.width(), r.height()), (4, 3));
    assert_eq!(r.area(), 12);

    let grown = r.include(Vector::new(10, 0));
    assert!(grown.contains(Vector::new(10, 0)));
    assert!(grown.contains(Vector::new(-1, 5)));
    assert!(!grown.contains(Vector::new(11, 0)));
}

#[test]
fn befunge93_board_is_80_by_25() {
    let board = Rect::befunge93_board();
    assert_eq!(board.min, Vector::ZERO);
    assert_eq!((board.width(), board.height()), (80, 25));
    assert_eq!(board.span(), Vector::new(79, 24));
}

#[test]
fn full_axis_width_does_not_overflow() {
    let r = Rect::from_corners(Vector::new(i32::MIN, 0), Vector::new(i32::MAX, 0));
    assert_eq!(r.width(), 1_i64 << 32);
}
