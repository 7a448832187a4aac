//! Integration tests for reading and writing program files.

use std::fs;
use std::path::PathBuf;

use toroid_space::{Encoding, read_text_file, write_text_file};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("toroid-space-{}-{name}", std::process::id()))
}

#[test]
fn latin1_files_round_trip_byte_for_byte() {
    let path = scratch("latin1.bf");
    let bytes = b"\"\xE9t\xE9\",,,@\n".to_vec();
    fs::write(&path, &bytes).unwrap();

    let (text, encoding) = read_text_file(&path).unwrap();
    assert_eq!(encoding, Encoding::Latin1);
    assert_eq!(text, "\"\u{e9}t\u{e9}\",,,@\n");

    write_text_file(&path, &text, encoding).unwrap();
    assert_eq!(fs::read(&path).unwrap(), bytes);
    fs::remove_file(&path).unwrap();
}

#[test]
fn utf16_files_keep_their_bom() {
    let path = scratch("utf16.bf");
    write_text_file(&path, "1.@", Encoding::Utf16Be).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0xFE, 0xFF]);

    let (text, encoding) = read_text_file(&path).unwrap();
    assert_eq!((text.as_str(), encoding), ("1.@", Encoding::Utf16Be));
    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_files_are_io_errors() {
    let err = read_text_file(&scratch("does-not-exist.bf")).unwrap_err();
    assert!(matches!(err.kind, toroid_foundation::ErrorKind::Io(_)));
}
