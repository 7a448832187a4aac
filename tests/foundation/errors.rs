//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use toroid_foundation::{Error, ErrorContext, ErrorKind, Vector};

#[test]
fn error_kinds_display_their_message() {
    let err = Error::io("disk on fire");
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(err.to_string(), "i/o error: disk on fire");

    let err = Error::encoding("bad UTF-8");
    assert!(matches!(err.kind, ErrorKind::Encoding(_)));
    assert!(err.to_string().contains("bad UTF-8"));

    let err = Error::new(ErrorKind::UnknownCommand(":frob".into()));
    assert_eq!(err.to_string(), "unknown command: :frob");
}

#[test]
fn error_context_is_attached() {
    let err = Error::invalid_argument("no such cell").with_context(
        ErrorContext::new()
            .with_source("life.bf")
            .with_position(Vector::new(3, -2))
            .with_ip(4),
    );
    let context = err.context.expect("context");
    assert_eq!(context.source.as_deref(), Some("life.bf"));
    assert_eq!(context.position, Some(Vector::new(3, -2)));
    assert_eq!(context.ip, Some(4));
    assert_eq!(context.to_string(), "in life.bf at (3, -2) (ip 4)");
}

#[test]
fn errors_box_as_std_errors() {
    let boxed: Box<dyn std::error::Error> = Error::internal("boom").into();
    assert_eq!(boxed.to_string(), "internal error: boom");
}
