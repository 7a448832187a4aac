//! Trace output formatters.

use std::fmt::Write as _;

use toroid_language::Outcome;

use super::record::{Glyph, TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Done => "done",
        Outcome::Reflect => "reflect",
        Outcome::Suspend => "suspend",
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records as aligned text lines.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats a timestamp with a readable unit.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut line = String::new();
        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }
        let _ = write!(line, "T{:04} ", record.tick);
        if self.show_timestamps {
            let _ = write!(line, "{:>10} ", Self::format_timestamp(record.timestamp_ns));
        }

        let _ = match &record.event {
            TraceEvent::TickStart { tick } => write!(line, "=== TICK {tick} ==="),
            TraceEvent::TickEnd { tick, signal } => match signal {
                Some(signal) => write!(line, "=== END {tick} ({signal}) ==="),
                None => write!(line, "=== END {tick} ==="),
            },
            TraceEvent::Step {
                ip,
                position,
                value,
                outcome,
            } => {
                let _ = write!(line, "  ip#{ip} {position} {}", Glyph(*value));
                match outcome {
                    Outcome::Done => Ok(()),
                    other => write!(line, " {}", outcome_name(*other)),
                }
            }
            TraceEvent::StringPush {
                ip,
                position,
                value,
            } => write!(line, "  ip#{ip} {position} push {}", Glyph(*value)),
            TraceEvent::Fork { parent, child } => match parent {
                Some(parent) => write!(line, "  FORK ip#{parent} -> ip#{child}"),
                None => write!(line, "  FORK ip#{child}"),
            },
            TraceEvent::Terminate { ip } => write!(line, "  STOP ip#{ip}"),
            TraceEvent::FingerprintLoad { ip, name } => write!(line, "  LOAD ip#{ip} {name}"),
            TraceEvent::FingerprintUnload { ip } => write!(line, "  UNLOAD ip#{ip}"),
            TraceEvent::FingerprintFail { ip, load } => {
                let op = if *load { "LOAD" } else { "UNLOAD" };
                write!(line, "  {op} ip#{ip} failed")
            }
            TraceEvent::InputWait { tick } => write!(line, "  WAIT input (tick {tick})"),
        };
        line
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON objects, one per record.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether `format_many` puts each record on its own line.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for one record per line in arrays.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(out, "\\u{:04x}", u32::from(c));
                }
                c => out.push(c),
            }
        }
        out
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::TickStart { tick } | TraceEvent::InputWait { tick } => {
                format!("\"tick\":{tick}")
            }
            TraceEvent::TickEnd { tick, signal } => {
                let signal = signal.map_or_else(
                    || "null".to_string(),
                    |s| format!("\"{}\"", Self::escape_string(&s.to_string())),
                );
                format!("\"tick\":{tick},\"signal\":{signal}")
            }
            TraceEvent::Step {
                ip,
                position,
                value,
                outcome,
            } => format!(
                "\"ip\":{ip},\"x\":{},\"y\":{},\"value\":{value},\"outcome\":\"{}\"",
                position.x,
                position.y,
                outcome_name(*outcome)
            ),
            TraceEvent::StringPush {
                ip,
                position,
                value,
            } => format!(
                "\"ip\":{ip},\"x\":{},\"y\":{},\"value\":{value}",
                position.x, position.y
            ),
            TraceEvent::Fork { parent, child } => {
                let parent = parent.map_or_else(|| "null".to_string(), |p| p.to_string());
                format!("\"parent\":{parent},\"child\":{child}")
            }
            TraceEvent::Terminate { ip } | TraceEvent::FingerprintUnload { ip } => {
                format!("\"ip\":{ip}")
            }
            TraceEvent::FingerprintLoad { ip, name } => {
                format!("\"ip\":{ip},\"name\":\"{}\"", Self::escape_string(name))
            }
            TraceEvent::FingerprintFail { ip, load } => format!("\"ip\":{ip},\"load\":{load}"),
        };

        format!(
            "{{\"id\":{},\"tick\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.tick,
            record.timestamp_ns,
            record.event_type(),
            event_data
        )
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
