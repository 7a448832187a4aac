//! Interpreter configuration.

use std::time::Duration;

use toroid_foundation::{Dialect, Rect};

/// Host pacing between ticks. Modes never change what a tick does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Tick as fast as possible.
    #[default]
    Continuous,
    /// Sleep between ticks.
    Delayed(Duration),
    /// Tick only when the host asks.
    SingleStep,
}

/// Configuration for one [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug)]
pub struct Config {
    /// Befunge-93 compatibility or Funge-98.
    pub dialect: Dialect,

    /// Seed for the random source behind `?`.
    pub seed: u64,

    /// Include per-step records in every tick report.
    pub record_steps: bool,

    /// `run_to_idle` stops the run after this many ticks.
    pub max_ticks: Option<u64>,

    /// Appended after every number printed by `.`.
    pub number_separator: Option<char>,

    /// Program arguments reported by `y`.
    pub args: Vec<String>,

    /// Environment variables reported by `y`.
    pub env: Vec<(String, String)>,

    /// Finite board for Befunge-93 mode and the edit cursor.
    pub board: Rect,

    /// Copy consumed input into the output log.
    pub echo_input: bool,

    /// Allow `i` and `o` to touch the host filesystem.
    pub file_io: bool,

    /// Put back the pre-run program when a run is stopped.
    pub restore_on_stop: bool,

    /// Host pacing.
    pub mode: RunMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::Funge98,
            seed: 0,
            record_steps: false,
            max_ticks: None,
            number_separator: None,
            args: Vec::new(),
            env: Vec::new(),
            board: Rect::befunge93_board(),
            echo_input: true,
            file_io: true,
            restore_on_stop: false,
            mode: RunMode::Continuous,
        }
    }
}

impl Config {
    /// A Befunge-93 compatibility configuration.
    #[must_use]
    pub fn befunge93() -> Self {
        Self {
            dialect: Dialect::Befunge93,
            ..Self::default()
        }
    }

    /// Builder method to set the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to enable per-step records.
    #[must_use]
    pub fn with_record_steps(mut self, record: bool) -> Self {
        self.record_steps = record;
        self
    }

    /// Builder method to set the tick limit.
    #[must_use]
    pub fn with_max_ticks(mut self, max: Option<u64>) -> Self {
        self.max_ticks = max;
        self
    }

    /// Builder method to set the number separator.
    #[must_use]
    pub fn with_number_separator(mut self, separator: Option<char>) -> Self {
        self.number_separator = separator;
        self
    }

    /// Builder method to set program arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Builder method to set environment variables.
    #[must_use]
    pub fn with_env(mut self, env: Vec<(String, String)>) -> Self {
        self.env = env;
        self
    }

    /// Builder method to set the board.
    #[must_use]
    pub fn with_board(mut self, board: Rect) -> Self {
        self.board = board;
        self
    }

    /// Builder method to control input echo.
    #[must_use]
    pub fn with_echo_input(mut self, echo: bool) -> Self {
        self.echo_input = echo;
        self
    }

    /// Builder method to enable or disable file I/O.
    #[must_use]
    pub fn with_file_io(mut self, enabled: bool) -> Self {
        self.file_io = enabled;
        self
    }

    /// Builder method to restore the program on stop.
    #[must_use]
    pub fn with_restore_on_stop(mut self, restore: bool) -> Self {
        self.restore_on_stop = restore;
        self
    }

    /// Builder method to set the run mode.
    #[must_use]
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }
}
