//! Session state for the interactive editor.
//!
//! A [`Session`] owns the interpreter, the tracer, and the queue that feeds
//! program input, and carries out one [`Command`] at a time. Every command
//! returns the text to show the user; program output is drained separately
//! with [`Session::take_output`].

use std::path::{Path, PathBuf};
use std::thread;

use toroid_debug::{Tracer, TracerConfig};
use toroid_engine::{Config, Interpreter, RunMode, RunSignal, SharedInput};
use toroid_foundation::{Error, Result, Value, Vector};
use toroid_space::{Encoding, read_text_file, write_text_file};

use crate::command::{Command, HELP, TraceSwitch};
use crate::serialize::{self, SavedState};
use crate::view;

/// Session state for an interactive editor session.
#[derive(Debug)]
pub struct Session {
    /// The interpreter holding the program.
    interpreter: Interpreter,

    /// Tracer fed from tick reports.
    tracer: Tracer,

    /// Input queue shared with the interpreter.
    input: SharedInput,

    /// File the program was loaded from.
    path: Option<PathBuf>,

    /// Encoding the program was loaded with; `:save` writes it back.
    encoding: Encoding,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default(), TracerConfig::default())
    }
}

impl Session {
    /// Creates a session with an empty program.
    #[must_use]
    pub fn new(config: Config, tracer_config: TracerConfig) -> Self {
        let mut interpreter = Interpreter::new(config);
        let input = SharedInput::new();
        interpreter.set_input(Box::new(input.clone()));
        Self {
            interpreter,
            tracer: Tracer::new(tracer_config),
            input,
            path: None,
            encoding: Encoding::default(),
        }
    }

    /// Returns the interpreter.
    #[must_use]
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Returns the interpreter mutably.
    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// The file the program was last loaded from or saved to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The encoding `:save` writes.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Drains program output produced since the last call.
    pub fn take_output(&mut self) -> String {
        self.interpreter.take_output()
    }

    /// Loads a program file, detecting its encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load_file(&mut self, path: &Path) -> Result<String> {
        let (text, encoding) = read_text_file(path)?;
        let size = self.interpreter.load_source(&text);
        self.path = Some(path.to_path_buf());
        self.encoding = encoding;
        log::info!("loaded {} ({encoding})", path.display());
        Ok(format!(
            "loaded {} ({}x{}, {encoding})",
            path.display(),
            size.x,
            size.y
        ))
    }

    /// Carries out one command.
    ///
    /// [`Command::Quit`] does nothing here; ending the session is up to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns an error if a file operation fails, a command needs a stopped
    /// program, or `:save` has no path.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Load(path) => self.load_file(&path),
            Command::Save(path) => self.save(path),
            Command::Run => Ok(self.run()),
            Command::Step(count) => Ok(self.step(count)),
            Command::Stop => Ok(if self.interpreter.stop() {
                format!("stopped after {} ticks", self.interpreter.tick_count())
            } else {
                "not running".to_string()
            }),
            Command::Reset => {
                self.interpreter.reset();
                self.tracer.clear();
                self.path = None;
                self.encoding = Encoding::default();
                Ok("reset".to_string())
            }
            Command::Show => Ok(self.show()),
            Command::Ips => Ok(if self.interpreter.ips().is_empty() {
                "no IPs".to_string()
            } else {
                view::describe_ips(self.interpreter.ips())
            }),
            Command::Put(at, text) => {
                self.ensure_editable()?;
                let space = self.interpreter.space_mut();
                let mut p = at;
                for c in text.chars() {
                    space.write(p, Value::try_from(u32::from(c)).unwrap_or(Value::MAX));
                    p += Vector::EAST;
                }
                Ok(String::new())
            }
            Command::Cursor(at) => {
                self.interpreter.cursor_mut().move_to(at);
                Ok(format!("cursor at {}", self.interpreter.cursor().position()))
            }
            Command::Type(text) => {
                self.ensure_editable()?;
                self.interpreter.type_at_cursor(&text);
                Ok(String::new())
            }
            Command::Input(text) => Ok(self.queue_input(&text)),
            Command::Trace(switch) => {
                match switch {
                    TraceSwitch::On => {
                        self.tracer.enable();
                        self.tracer.set_json_format(false);
                    }
                    TraceSwitch::Json => {
                        self.tracer.enable();
                        self.tracer.set_json_format(true);
                    }
                    TraceSwitch::Off => self.tracer.disable(),
                }
                Ok(format!("tracing {switch}"))
            }
            Command::Traces(count) => {
                let records = self.tracer.buffer().recent(count);
                if records.is_empty() {
                    Ok("no trace records".to_string())
                } else {
                    Ok(self.tracer.format_records(&records))
                }
            }
            Command::SaveState(path) => {
                let cursor = self.interpreter.cursor();
                let state = SavedState::new(
                    self.interpreter.space().snapshot(),
                    cursor.position(),
                    cursor.heading(),
                );
                serialize::save_to_file(&state, &path)?;
                Ok(format!("saved state to {}", path.display()))
            }
            Command::LoadState(path) => {
                let state = serialize::load_from_file(&path)?;
                self.interpreter.stop();
                *self.interpreter.space_mut() = state.space;
                let cursor = self.interpreter.cursor_mut();
                cursor.move_to(state.cursor);
                cursor.set_heading(state.heading);
                Ok(format!("loaded state from {}", path.display()))
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.interpreter.is_running() {
            Err(Error::invalid_argument(
                "the program is running; use :stop first",
            ))
        } else {
            Ok(())
        }
    }

    fn save(&mut self, path: Option<PathBuf>) -> Result<String> {
        let path = path
            .or_else(|| self.path.clone())
            .ok_or_else(|| Error::invalid_argument(":save needs a path"))?;
        let space = self.interpreter.space();
        let text = space
            .bounds()
            .map(|b| space.region_text(b.include(Vector::ZERO), true))
            .unwrap_or_default();
        write_text_file(&path, &text, self.encoding)?;
        let message = format!("saved {} ({})", path.display(), self.encoding);
        self.path = Some(path);
        Ok(message)
    }

    fn show(&self) -> String {
        let space = self.interpreter.space();
        let cursor = self.interpreter.cursor();
        let rect = view::view_rect(space, cursor.board());
        let marker = (!self.interpreter.is_running()).then(|| cursor.position());
        view::render(space, rect, marker)
    }

    fn queue_input(&mut self, text: &str) -> String {
        self.input.push_str(text);
        self.input.push_str("\n");
        if self.interpreter.is_running() && self.interpreter.mode() != RunMode::SingleStep {
            self.run()
        } else {
            format!("{} characters queued", self.input.len())
        }
    }

    /// Runs until the program stops, waits for input, or hits the tick limit.
    ///
    /// In single-step mode the run is only started.
    fn run(&mut self) -> String {
        self.interpreter.set_record_steps(self.tracer.wants_steps());
        let Some(delay) = self.interpreter.pace() else {
            if !self.interpreter.is_running() {
                self.interpreter.start();
            }
            return "single-step mode; use :step".to_string();
        };

        let tracer = &mut self.tracer;
        let signal = self.interpreter.run_with(|report, ips| {
            tracer.observe(report, ips);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        });
        self.describe(signal)
    }

    fn step(&mut self, count: u64) -> String {
        self.interpreter.set_record_steps(self.tracer.wants_steps());
        if !self.interpreter.is_running() {
            self.interpreter.start();
        }
        let mut last = None;
        for _ in 0..count {
            let report = self.interpreter.tick();
            self.tracer.observe(&report, self.interpreter.ips());
            last = report.signal;
            if last.is_some() {
                break;
            }
        }
        match last {
            Some(signal) => self.describe(signal),
            None => format!(
                "tick {}, {} active",
                self.interpreter.tick_count(),
                self.interpreter.active_ips()
            ),
        }
    }

    fn describe(&self, signal: RunSignal) -> String {
        match signal {
            RunSignal::AwaitingInput => "awaiting input; use :input TEXT".to_string(),
            signal => format!("{signal} after {} ticks", self.interpreter.tick_count()),
        }
    }
}
