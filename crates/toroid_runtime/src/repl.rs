//! The interactive editor loop.

use std::io::{self, Write};

use toroid_foundation::{Error, Result};

use crate::command::Command;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive editor session.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Interpreter, tracer, and input queue.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::default(),
            show_banner: true,
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until `:quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let prompt = self.prompt();
        let line = match self.editor.read_line(prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                if self.session.interpreter().is_running() {
                    let message = self.session.execute(Command::Stop)?;
                    println!("{message}");
                }
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };
        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        match self.handle_line(&line) {
            Ok(Some(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => {
                print_error(&e);
                Ok(true)
            }
        }
    }

    /// Parses and carries out one line.
    ///
    /// Returns the program output followed by the command's message, or
    /// `None` for `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not parse or the command fails.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>> {
        let command = Command::parse(line)?;
        if command == Command::Quit {
            return Ok(None);
        }
        let message = self.session.execute(command)?;
        let mut text = self.session.take_output();
        if !message.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&message);
        }
        Ok(Some(text))
    }

    fn prompt(&self) -> &'static str {
        if self.session.interpreter().is_running() {
            "run> "
        } else {
            "edit> "
        }
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

/// Prints the welcome banner.
fn print_banner() {
    println!("\x1b[1;36mtoroid\x1b[0m {}", env!("CARGO_PKG_VERSION"));
    println!("Type program text to place it at the cursor, or :help for commands.");
    println!("Use Ctrl+D to exit.\n");

    let _ = io::stdout().flush();
}
