//! Integration tests for Layer 5: Runtime
//!
//! Tests for the interactive session driven line by line, snapshots, and
//! host input.

mod host;
mod session;

use std::path::PathBuf;

use toroid_foundation::Result;
use toroid_runtime::{LineEditor, ReadResult, Repl};

/// Replays a fixed list of lines, then reports end of input.
pub struct ScriptedEditor {
    lines: Vec<String>,
}

impl ScriptedEditor {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().rev().map(|l| (*l).to_string()).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}

/// A REPL with no banner and nothing scripted.
pub fn repl() -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(&[])).without_banner()
}

/// Feeds one line and returns what the REPL would print.
pub fn send(repl: &mut Repl<ScriptedEditor>, line: &str) -> String {
    repl.handle_line(line).unwrap().unwrap_or_default()
}

/// A per-process scratch path in the temp directory.
pub fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("toroid-it-{}-{name}", std::process::id()))
}
