//! Host-side I/O: blocking stdin input and a stderr log backend.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{LevelFilter, Log, Metadata, Record};
use toroid_foundation::{Error, Result};
use toroid_language::{InputPoll, InputSource};

// =============================================================================
// Stdin Input
// =============================================================================

/// Program input read line by line from a buffered reader, blocking until
/// a line is available.
///
/// Never reports [`InputPoll::Pending`], so batch runs never suspend.
pub struct StdinInput<R = io::StdinLock<'static>> {
    reader: R,
    buffered: VecDeque<char>,
    eof: bool,
}

impl StdinInput {
    /// Reads from the process's standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin().lock())
    }
}

impl<R: BufRead> StdinInput<R> {
    /// Reads from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            buffered: VecDeque::new(),
            eof: false,
        }
    }

    /// Reads one line. Lines that are not valid UTF-8 are taken as Latin-1,
    /// one character per byte.
    fn fill(&mut self) {
        let _ = io::stdout().flush();
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => self.eof = true,
            Ok(_) => match std::str::from_utf8(&line) {
                Ok(text) => self.buffered.extend(text.chars()),
                Err(_) => self.buffered.extend(line.iter().map(|&b| char::from(b))),
            },
            Err(e) => {
                log::warn!("input closed after read error: {e}");
                self.eof = true;
            }
        }
    }
}

impl<R: BufRead> InputSource for StdinInput<R> {
    fn poll_char(&mut self) -> InputPoll {
        if self.buffered.is_empty() && !self.eof {
            self.fill();
        }
        match self.buffered.pop_front() {
            Some(c) => InputPoll::Ready(c),
            None => InputPoll::Eof,
        }
    }
}

// =============================================================================
// Logging
// =============================================================================

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                io::stderr(),
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Parses a `--log-level` value.
///
/// # Errors
///
/// Returns an invalid-argument error for anything but
/// `off|error|warn|info|debug|trace`.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .parse()
        .map_err(|_| Error::invalid_argument(format!("unknown log level: {level}")))
}

/// Installs the stderr log backend at the given level.
///
/// Calling it again only changes the level.
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
