//! Tracing of interpreter runs.
//!
//! A [`Tracer`] turns the [`TickReport`] of every tick into
//! [`TraceRecord`]s kept in a bounded [`TraceBuffer`]. Disabled tracers
//! return from every call immediately.
//!
//! # Example
//!
//! ```text
//! :trace on          turn tracing on
//! :step 3            run three ticks; records are echoed to stderr
//! :traces 20         show the last twenty records
//! :trace off
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceSummary};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use toroid_engine::{FingerprintAction, RunSignal, TickReport};
use toroid_language::{Ip, IpId};

use crate::config::{TraceOutput, TracerConfig};

// =============================================================================
// Tracer
// =============================================================================

/// Records what an interpreter run does, tick by tick.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_tick: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_tick: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a disabled tracer.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sets whether to use JSON output.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the echo destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Returns true if the engine should record per-step detail.
    #[must_use]
    pub fn wants_steps(&self) -> bool {
        self.config.records_steps()
    }

    /// Returns the current tick number.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }
        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        let timestamp_ns = u64::try_from(self.start_time.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.buffer.push(self.current_tick, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Records everything a tick report describes.
    ///
    /// `ips` is the interpreter's IP list right after the tick; it supplies
    /// fork parents. Fingerprint changes are recorded at every verbosity.
    pub fn observe(&mut self, report: &TickReport, ips: &[Ip]) {
        if !self.config.enabled {
            return;
        }
        let find = |id: IpId| ips.iter().find(|ip| ip.id() == id);

        self.tick_start(report.tick);
        for step in &report.executed {
            if step.string_mode {
                self.record(TraceEvent::StringPush {
                    ip: step.ip,
                    position: step.position,
                    value: step.value,
                });
            } else if self.config.records_steps() {
                self.record(TraceEvent::Step {
                    ip: step.ip,
                    position: step.position,
                    value: step.value,
                    outcome: step.outcome,
                });
            }
        }
        for change in &report.fingerprints {
            let ip = change.ip;
            let event = match change.action {
                FingerprintAction::Loaded(name) => TraceEvent::FingerprintLoad { ip, name },
                FingerprintAction::Unloaded => TraceEvent::FingerprintUnload { ip },
                FingerprintAction::Failed { load } => TraceEvent::FingerprintFail { ip, load },
            };
            self.record(event);
        }
        for &child in &report.forked {
            let parent = find(child).and_then(Ip::parent);
            self.record(TraceEvent::Fork { parent, child });
        }
        for &ip in &report.terminated {
            self.record(TraceEvent::Terminate { ip });
        }
        if report.signal == Some(RunSignal::AwaitingInput) {
            self.record(TraceEvent::InputWait { tick: report.tick });
        }
        self.tick_end(report.tick, report.signal);
    }

    /// Records a tick start event.
    #[inline]
    pub fn tick_start(&mut self, tick: u64) {
        self.current_tick = tick;
        self.record(TraceEvent::TickStart { tick });
    }

    /// Records a tick end event.
    #[inline]
    pub fn tick_end(&mut self, tick: u64, signal: Option<RunSignal>) {
        self.record(TraceEvent::TickEnd { tick, signal });
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Counts over the buffered records.
    #[must_use]
    pub fn summary(&self) -> TraceSummary {
        self.buffer.summary()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Tests
// =============================================================================
