//! Configuration for the tracer.

/// How much of each tick is recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Tick boundaries, forks, terminations, fingerprints, and input waits.
    #[default]
    Ticks,
    /// Everything in [`Verbosity::Ticks`] plus one record per executed cell.
    Steps,
}

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (records are still kept in the buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled (false = zero overhead).
    pub enabled: bool,
    /// What gets recorded.
    pub verbosity: Verbosity,
    /// Maximum records kept in the ring buffer.
    pub buffer_size: usize,
    /// Where records are echoed.
    pub output: TraceOutput,
    /// Use JSON instead of human-readable lines.
    pub json_format: bool,
    /// Event types to keep (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            verbosity: Verbosity::Ticks,
            buffer_size: 10_000,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a disabled configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enabled, recording every step, echoing to stderr.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            verbosity: Verbosity::Steps,
            output: TraceOutput::Stderr,
            ..Self::default()
        }
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Builder method to set the buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to echo records to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON output.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to keep only some event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }

    /// Returns true if the engine should produce per-step records.
    #[must_use]
    pub fn records_steps(&self) -> bool {
        self.enabled && self.verbosity == Verbosity::Steps
    }
}
