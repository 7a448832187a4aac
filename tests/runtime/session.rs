//! Tests for editing, running, and saving through `:` commands.

use std::fs;

use toroid_debug::{TraceEvent, TracerConfig};
use toroid_engine::{Config, RunMode};
use toroid_foundation::{ErrorKind, Value, Vector};
use toroid_runtime::serialize::{self, SavedState};
use toroid_runtime::{Command, Repl, Session};
use toroid_space::FungeSpace;

use crate::{ScriptedEditor, repl, scratch, send};

#[test]
fn load_run_and_save() {
    let path = scratch("hello.bf");
    fs::write(&path, "\"olleh\",,,,,@\n").unwrap();

    let mut r = repl();
    let loaded = send(&mut r, &format!(":load {}", path.display()));
    assert!(loaded.starts_with("loaded "));
    assert_eq!(send(&mut r, ":run"), "hello\nidle after 13 ticks");

    let copy = scratch("hello-copy.bf");
    send(&mut r, &format!(":save {}", copy.display()));
    assert_eq!(r.session().path(), Some(copy.as_path()));
    assert_eq!(fs::read_to_string(&copy).unwrap().trim_end(), "\"olleh\",,,,,@");

    fs::remove_file(&path).unwrap();
    fs::remove_file(&copy).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let mut r = repl();
    let err = r
        .handle_line(&format!(":load {}", scratch("absent.bf").display()))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn typed_lines_follow_the_cursor() {
    let mut r = repl();
    send(&mut r, "v");
    send(&mut r, ":cursor 0 1");
    send(&mut r, ">3.@");
    assert_eq!(send(&mut r, ":show").lines().take(2).collect::<Vec<_>>(), vec!["v", ">3.@_"]);
    assert_eq!(send(&mut r, ":run"), "3\nidle after 5 ticks");
}

#[test]
fn forked_ips_are_listed() {
    let mut r = repl();
    assert_eq!(send(&mut r, ":ips"), "no IPs");
    send(&mut r, "t>#<");
    send(&mut r, ":step");
    assert_eq!(send(&mut r, ":ips").lines().count(), 2);
    assert_eq!(r.session().interpreter().active_ips(), 2);
    assert_eq!(send(&mut r, ":stop"), "stopped after 1 ticks");
}

#[test]
fn traced_run_names_every_loaded_fingerprint() {
    let mut r = repl();
    send(&mut r, "\"AMOR\"4(\"LOOB\"4(@");
    send(&mut r, ":trace on");
    send(&mut r, ":run");
    let names: Vec<_> = r
        .session()
        .tracer()
        .buffer()
        .by_event_type("fingerprint-load")
        .iter()
        .filter_map(|record| match record.event {
            TraceEvent::FingerprintLoad { name, .. } => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(names, ["ROMA", "BOOL"]);
}

#[test]
fn input_drives_a_waiting_program() {
    let mut r = repl();
    send(&mut r, "&.@");
    assert_eq!(send(&mut r, ":run"), "awaiting input; use :input TEXT");
    assert_eq!(r.handle_line(":input 42").unwrap().as_deref(), Some("42\n42\nidle after 3 ticks"));
}

#[test]
fn single_step_mode_waits_for_step() {
    let session = Session::new(
        Config::default().with_mode(RunMode::SingleStep),
        TracerConfig::default(),
    );
    let mut r = Repl::with_editor(ScriptedEditor::new(&[])).with_session(session).without_banner();
    send(&mut r, "1.@");
    assert_eq!(send(&mut r, ":run"), "single-step mode; use :step");
    assert!(r.session().interpreter().is_running());
    assert_eq!(send(&mut r, ":step 10"), "1\nidle after 3 ticks");
}

#[test]
fn reset_forgets_the_program() {
    let mut r = repl();
    send(&mut r, "1.@");
    assert_eq!(send(&mut r, ":reset"), "reset");
    assert!(r.session().interpreter().space().is_empty());
    assert!(r.session().path().is_none());
}

#[test]
fn scripted_session_runs_to_the_end() {
    let mut r = Repl::with_editor(ScriptedEditor::new(&["9.@", ":bogus", ":run", ":quit", "1.@"]))
        .without_banner();
    r.run().unwrap();
    assert_eq!(r.session().interpreter().tick_count(), 3);
    // the line after :quit was never read
    assert_eq!(
        r.session().interpreter().space().read(Vector::ZERO),
        Value::from(b'9')
    );
}

#[test]
fn snapshots_keep_space_and_cursor() {
    let mut space = FungeSpace::new();
    space.write(Vector::new(-4, 2), Value::from(b'@'));
    space.write(Vector::new(7, -1), 1_000_000);
    let state = SavedState::new(space, Vector::new(1, 1), Vector::SOUTH);

    let restored = serialize::from_bytes(&serialize::to_bytes(&state).unwrap()).unwrap();
    assert_eq!(restored.space.read(Vector::new(-4, 2)), Value::from(b'@'));
    assert_eq!(restored.space.read(Vector::new(7, -1)), 1_000_000);
    assert_eq!(restored.space.len(), 2);
    assert_eq!(restored.heading, Vector::SOUTH);

    assert!(serialize::from_bytes(b"not a snapshot").is_err());
}

#[test]
fn quit_is_left_to_the_caller() {
    let mut session = Session::default();
    assert_eq!(session.execute(Command::Quit).unwrap(), "");
    assert_eq!(repl().handle_line(":q").unwrap(), None);
}
