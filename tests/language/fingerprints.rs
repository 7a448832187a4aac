//! Integration tests for fingerprint loading and letter resolution.

use toroid_foundation::Vector;
use toroid_language::fingerprint::{MODU, ROMA};
use toroid_language::{FingerprintRegistry, Outcome, fingerprint_id};

use crate::Machine;

#[test]
fn ids_fold_the_name() {
    assert_eq!(fingerprint_id("NULL"), 0x4E55_4C4C);
    assert_eq!(ROMA.id, fingerprint_id("ROMA"));
    let registry = FingerprintRegistry::standard();
    assert_eq!(registry.len(), 7);
    assert!(registry.lookup_name("HRTI").is_some());
    assert!(registry.lookup_name("NOPE").is_none());
}

#[test]
fn load_pushes_id_and_one() {
    let mut m = Machine::funge98();
    m.push_name("ROMA");
    assert_eq!(m.exec('('), Outcome::Done);
    assert_eq!(m.stack(), vec![ROMA.id, 1]);
    m.exec('$');
    m.exec('$');
    m.exec('X');
    m.exec('I');
    m.exec('+');
    assert_eq!(m.stack(), vec![11]);
}

#[test]
fn unknown_fingerprint_reflects() {
    let mut m = Machine::funge98();
    m.push_name("NOPE");
    assert_eq!(m.exec('('), Outcome::Reflect);
    assert_eq!(m.ip.delta, Vector::WEST);
    assert!(m.stack().is_empty());
}

#[test]
fn unloading_reveals_the_fingerprint_below() {
    let mut m = Machine::funge98();
    m.push_name("ROMA");
    m.exec('(');
    m.push_name("MODU");
    m.exec('(');
    m.ip.stacks.toss_mut().clear();

    // MODU's M is modulo
    m.push(&[7, 3]);
    m.exec('M');
    assert_eq!(m.stack(), vec![1]);
    m.ip.stacks.toss_mut().clear();

    m.push_name("MODU");
    assert_eq!(m.exec(')'), Outcome::Done);
    m.exec('M');
    assert_eq!(m.stack(), vec![1000]);
    m.ip.stacks.toss_mut().clear();

    m.push_name("ROMA");
    m.exec(')');
    assert_eq!(m.exec('M'), Outcome::Reflect);
    assert_eq!(m.ip.fingerprints().count(), 0);
}

#[test]
fn unloading_a_fingerprint_that_is_not_loaded_reflects() {
    let mut m = Machine::funge98();
    m.push_name("MODU");
    assert_eq!(m.exec(')'), Outcome::Reflect);
    assert_eq!(MODU.name, "MODU");
}

#[test]
fn letters_without_fingerprints_reflect() {
    let mut m = Machine::funge98();
    assert_eq!(m.exec('A'), Outcome::Reflect);
    assert_eq!(m.ip.delta, Vector::WEST);
}
