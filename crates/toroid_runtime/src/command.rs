//! Session commands.
//!
//! A line starting with `:` is a command; any other line is program text
//! typed at the edit cursor.

use std::fmt;
use std::path::PathBuf;

use toroid_foundation::{Error, ErrorKind, Result, Value, Vector};

/// How `:trace` changes the tracer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceSwitch {
    /// Human-readable tracing.
    On,
    /// Tracing off.
    Off,
    /// JSON tracing.
    Json,
}

/// A parsed session command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `:load PATH`
    Load(PathBuf),
    /// `:save [PATH]`
    Save(Option<PathBuf>),
    /// `:run`
    Run,
    /// `:step [N]`
    Step(u64),
    /// `:stop`
    Stop,
    /// `:reset`
    Reset,
    /// `:show`
    Show,
    /// `:ips`
    Ips,
    /// `:put X Y TEXT`
    Put(Vector, String),
    /// `:cursor X Y`
    Cursor(Vector),
    /// `:type TEXT`, or a line without a leading `:`.
    Type(String),
    /// `:input TEXT`
    Input(String),
    /// `:trace on|off|json`
    Trace(TraceSwitch),
    /// `:traces [N]`
    Traces(usize),
    /// `:save-state PATH`
    SaveState(PathBuf),
    /// `:load-state PATH`
    LoadState(PathBuf),
    /// `:help`
    Help,
    /// `:quit`
    Quit,
}

/// Names of every command, for completion.
pub const COMMAND_NAMES: &[&str] = &[
    ":load",
    ":save",
    ":run",
    ":step",
    ":stop",
    ":reset",
    ":show",
    ":ips",
    ":put",
    ":cursor",
    ":type",
    ":input",
    ":trace",
    ":traces",
    ":save-state",
    ":load-state",
    ":help",
    ":quit",
];

/// Text shown by `:help`.
pub const HELP: &str = "\
:load PATH          load a program (encoding is detected)
:save [PATH]        save the program in its original encoding
:run                run until every IP stops or input is needed
:step [N]           run N ticks (default 1)
:stop               stop the running program
:reset              clear the program, output, and cursor
:show               show the board
:ips                list instruction pointers
:put X Y TEXT       write TEXT starting at (X, Y)
:cursor X Y         move the edit cursor
:type TEXT          type TEXT at the cursor (same as a line without ':')
:input TEXT         queue TEXT and a newline as program input
:trace on|off|json  control tracing
:traces [N]         show the last N trace records (default 20)
:save-state PATH    save the board and cursor
:load-state PATH    restore a saved board and cursor
:help               show this help
:quit               leave the session";

fn invalid(message: impl Into<String>) -> Error {
    Error::invalid_argument(message)
}

fn coordinate(word: Option<&str>, name: &str) -> Result<Value> {
    let word = word.ok_or_else(|| invalid(format!("missing {name} coordinate")))?;
    word.parse()
        .map_err(|_| invalid(format!("invalid {name} coordinate: {word}")))
}

/// Splits off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

fn word(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// The rest of a line after one separating space, so leading spaces in
/// program text survive.
fn text_argument(rest: &str) -> &str {
    rest.strip_prefix(' ').unwrap_or(rest)
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns an unknown-command error for an unrecognized `:` word, or an
    /// invalid-argument error for bad arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let Some(body) = line.strip_prefix(':') else {
            return Ok(Self::Type(line.to_string()));
        };
        let (name, rest) = split_word(body);
        let arg = rest.trim();
        let path = |what: &str| -> Result<PathBuf> {
            if arg.is_empty() {
                Err(invalid(format!("{what} needs a path")))
            } else {
                Ok(PathBuf::from(arg))
            }
        };

        match name {
            "load" => Ok(Self::Load(path(":load")?)),
            "save" => Ok(Self::Save((!arg.is_empty()).then(|| PathBuf::from(arg)))),
            "run" => Ok(Self::Run),
            "step" => {
                if arg.is_empty() {
                    Ok(Self::Step(1))
                } else {
                    arg.parse()
                        .map(Self::Step)
                        .map_err(|_| invalid(format!("invalid step count: {arg}")))
                }
            }
            "stop" => Ok(Self::Stop),
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "ips" => Ok(Self::Ips),
            "put" => {
                let (x, rest) = split_word(rest);
                let (y, rest) = split_word(rest);
                let at = Vector::new(coordinate(word(x), "x")?, coordinate(word(y), "y")?);
                Ok(Self::Put(at, text_argument(rest).to_string()))
            }
            "cursor" => {
                let mut words = arg.split_whitespace();
                let x = coordinate(words.next(), "x")?;
                let y = coordinate(words.next(), "y")?;
                Ok(Self::Cursor(Vector::new(x, y)))
            }
            "type" => Ok(Self::Type(text_argument(rest).to_string())),
            "input" => Ok(Self::Input(text_argument(rest).to_string())),
            "trace" => match arg {
                "on" => Ok(Self::Trace(TraceSwitch::On)),
                "off" => Ok(Self::Trace(TraceSwitch::Off)),
                "json" => Ok(Self::Trace(TraceSwitch::Json)),
                other => Err(invalid(format!("expected on, off, or json, got '{other}'"))),
            },
            "traces" => {
                if arg.is_empty() {
                    Ok(Self::Traces(20))
                } else {
                    arg.parse()
                        .map(Self::Traces)
                        .map_err(|_| invalid(format!("invalid record count: {arg}")))
                }
            }
            "save-state" => Ok(Self::SaveState(path(":save-state")?)),
            "load-state" => Ok(Self::LoadState(path(":load-state")?)),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(Error::new(ErrorKind::UnknownCommand(format!(":{other}")))),
        }
    }
}

impl fmt::Display for TraceSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
            Self::Json => write!(f, "json"),
        }
    }
}
