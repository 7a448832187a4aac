//! Trace event and record types.

use std::fmt;

use toroid_engine::RunSignal;
use toroid_foundation::{Value, Vector, glyph_of};
use toroid_language::{IpId, Outcome};

// =============================================================================
// Trace Event
// =============================================================================

/// Events recorded while a program runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A tick has started (or resumed after an input wait).
    TickStart {
        /// The tick number.
        tick: u64,
    },

    /// A tick has ended.
    TickEnd {
        /// The tick number.
        tick: u64,
        /// Why the run paused or ended, if it did.
        signal: Option<RunSignal>,
    },

    /// An IP dispatched a cell.
    Step {
        /// The IP.
        ip: IpId,
        /// The dispatched cell.
        position: Vector,
        /// Its value.
        value: Value,
        /// How it finished.
        outcome: Outcome,
    },

    /// An IP in string mode pushed a cell.
    StringPush {
        /// The IP.
        ip: IpId,
        /// The pushed cell.
        position: Vector,
        /// Its value.
        value: Value,
    },

    /// `t` created an IP.
    Fork {
        /// The forking IP, when it is still known.
        parent: Option<IpId>,
        /// The new IP.
        child: IpId,
    },

    /// An IP stopped.
    Terminate {
        /// The IP.
        ip: IpId,
    },

    /// `(` loaded a fingerprint.
    FingerprintLoad {
        /// The IP.
        ip: IpId,
        /// The fingerprint name.
        name: &'static str,
    },

    /// `)` unloaded a fingerprint.
    FingerprintUnload {
        /// The IP.
        ip: IpId,
    },

    /// `(` or `)` reflected.
    FingerprintFail {
        /// The IP.
        ip: IpId,
        /// True for `(`, false for `)`.
        load: bool,
    },

    /// The tick is suspended until input arrives.
    InputWait {
        /// The suspended tick.
        tick: u64,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TickStart { .. } => "tick-start",
            Self::TickEnd { .. } => "tick-end",
            Self::Step { .. } => "step",
            Self::StringPush { .. } => "string-push",
            Self::Fork { .. } => "fork",
            Self::Terminate { .. } => "terminate",
            Self::FingerprintLoad { .. } => "fingerprint-load",
            Self::FingerprintUnload { .. } => "fingerprint-unload",
            Self::FingerprintFail { .. } => "fingerprint-fail",
            Self::InputWait { .. } => "input-wait",
        }
    }

    /// Returns true if this is a tick boundary event.
    #[must_use]
    pub fn is_tick_boundary(&self) -> bool {
        matches!(self, Self::TickStart { .. } | Self::TickEnd { .. })
    }

    /// Returns true if this event is about an IP's lifecycle.
    #[must_use]
    pub fn is_lifecycle_event(&self) -> bool {
        matches!(self, Self::Fork { .. } | Self::Terminate { .. })
    }

    /// Returns true if this is a fingerprint event.
    #[must_use]
    pub fn is_fingerprint_event(&self) -> bool {
        matches!(
            self,
            Self::FingerprintLoad { .. }
                | Self::FingerprintUnload { .. }
                | Self::FingerprintFail { .. }
        )
    }

    /// The IP this event concerns, if any.
    #[must_use]
    pub fn ip(&self) -> Option<IpId> {
        match self {
            Self::Step { ip, .. }
            | Self::StringPush { ip, .. }
            | Self::Terminate { ip }
            | Self::FingerprintLoad { ip, .. }
            | Self::FingerprintUnload { ip }
            | Self::FingerprintFail { ip, .. } => Some(*ip),
            Self::Fork { child, .. } => Some(*child),
            Self::TickStart { .. } | Self::TickEnd { .. } | Self::InputWait { .. } => None,
        }
    }
}

/// Renders a cell for trace output.
pub(crate) struct Glyph(pub(crate) Value);

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match glyph_of(self.0) {
            Some(c) if !c.is_control() => write!(f, "'{c}'"),
            _ => write!(f, "#{}", self.0),
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The tick when this event occurred.
    pub tick: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, tick: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            tick,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
