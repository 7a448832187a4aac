//! Integration tests for FungeSpace storage and enumeration.

use proptest::prelude::*;
use toroid_foundation::{Rect, SPACE, Value, Vector};
use toroid_space::FungeSpace;

#[test]
fn unwritten_cells_read_as_space() {
    let space = FungeSpace::new();
    assert_eq!(space.read(Vector::new(i32::MIN, i32::MAX)), SPACE);
    assert!(space.bounds().is_none());
    assert!(space.is_empty());
}

#[test]
fn writing_a_space_keeps_the_cell_written() {
    let mut space = FungeSpace::new();
    space.write(Vector::new(-4, 9), SPACE);
    assert!(space.is_written(Vector::new(-4, 9)));
    assert_eq!(
        space.bounds(),
        Some(Rect::from_corners(Vector::new(-4, 9), Vector::new(-4, 9)))
    );
}

#[test]
fn load_text_skips_spaces_and_reports_size() {
    let mut space = FungeSpace::from_text("ab\n  c");
    let size = space.load_text(Vector::ZERO, "x y\r\nz\r\x0c");
    assert_eq!(size, Vector::new(3, 2));
    assert_eq!(space.read(Vector::new(0, 0)), Value::from(b'x'));
    assert_eq!(space.read(Vector::new(1, 0)), Value::from(b'b'));
    assert_eq!(space.read(Vector::new(0, 1)), Value::from(b'z'));
    assert_eq!(space.read(Vector::new(2, 1)), Value::from(b'c'));
}

#[test]
fn region_walks_row_major_including_blanks() {
    let space = FungeSpace::from_text("ab\n c");
    let rect = Rect::from_corners(Vector::ZERO, Vector::new(1, 1));
    let cells: Vec<(Vector, Value)> = space.region(rect).collect();
    assert_eq!(
        cells,
        vec![
            (Vector::new(0, 0), Value::from(b'a')),
            (Vector::new(1, 0), Value::from(b'b')),
            (Vector::new(0, 1), SPACE),
            (Vector::new(1, 1), Value::from(b'c')),
        ]
    );
    let region = space.region(rect);
    assert_eq!(region.restart().count(), 4);
}

#[test]
fn region_text_strips_trailing_blanks() {
    let mut space = FungeSpace::from_text("ab  \n\n");
    space.write(Vector::new(0, 3), SPACE);
    let rect = space.bounds().expect("bounds");
    assert_eq!(space.region_text(rect, true), "ab\n");
    assert_eq!(space.region_text(rect, false), "ab\n  \n  \n  \n");
}

#[test]
fn snapshot_is_independent() {
    let mut space = FungeSpace::from_text("12");
    let before = space.snapshot();
    space.write(Vector::ZERO, Value::from(b'9'));
    assert_eq!(before.read(Vector::ZERO), Value::from(b'1'));
    assert_eq!(space.read(Vector::ZERO), Value::from(b'9'));
}

proptest! {
    #[test]
    fn bounds_cover_exactly_the_written_cells(
        points in prop::collection::vec((-50i32..50, -50i32..50), 1..30)
    ) {
        let mut space = FungeSpace::new();
        for &(x, y) in &points {
            space.write(Vector::new(x, y), 1);
        }
        let bounds = space.bounds().expect("bounds");
        let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
        prop_assert_eq!(bounds.min.x, min_x);
        prop_assert_eq!(bounds.max.y, max_y);
        for &(x, y) in &points {
            prop_assert!(bounds.contains(Vector::new(x, y)));
        }
    }

    #[test]
    fn enumeration_visits_every_cell_once(w in 1i32..20, h in 1i32..20) {
        let space = FungeSpace::new();
        let rect = Rect::with_size(Vector::new(-3, 7), w, h).expect("non-empty");
        let count = space.region(rect).count();
        prop_assert_eq!(count, usize::try_from(w * h).unwrap_or(0));
    }
}
