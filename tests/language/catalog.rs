//! Integration tests for the instruction catalog.

use toroid_foundation::{Dialect, Value};
use toroid_language::{Category, Op, catalog, lookup};

fn glyph(c: char) -> Value {
    c as Value
}

#[test]
fn every_byte_has_a_descriptor() {
    let table = catalog();
    assert_eq!(table.len(), 256);
    for (i, instruction) in table.iter().enumerate() {
        assert_eq!(u32::from(instruction.glyph), u32::try_from(i).unwrap());
    }
}

#[test]
fn descriptors_carry_arity_and_category() {
    let add = lookup(glyph('+'));
    assert_eq!(add.op, Op::Add);
    assert_eq!(add.min_stack, 2);
    assert_eq!(add.category, Category::Arithmetic);

    assert_eq!(lookup(glyph('7')).op, Op::Push(7));
    assert_eq!(lookup(glyph('e')).op, Op::Push(14));
    assert_eq!(lookup(glyph(' ')).category, Category::Nop);
    assert_eq!(lookup(glyph('t')).category, Category::Concurrency);
}

#[test]
fn funge98_entries_are_marked() {
    assert!(lookup(glyph('+')).available_in(Dialect::Befunge93));
    for c in ['t', 'q', 'k', '{', 'y', '(', 'a'] {
        let instruction = lookup(glyph(c));
        assert!(!instruction.available_in(Dialect::Befunge93), "{c}");
        assert!(instruction.available_in(Dialect::Funge98), "{c}");
    }
}

#[test]
fn values_outside_the_table_are_unknown() {
    for v in [-1, 256, 0x1F600] {
        assert_eq!(lookup(v).op, Op::Unknown);
    }
}
