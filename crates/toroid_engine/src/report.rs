//! What a tick did.

use std::fmt;

use toroid_foundation::{Value, Vector, glyph_of};
use toroid_language::{Ip, IpId, Outcome};

const LOAD: Value = b'(' as Value;
const UNLOAD: Value = b')' as Value;

/// Why a run paused or ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunSignal {
    /// Every IP stopped.
    Idle,
    /// The host stopped the run, or the tick limit was reached.
    Stopped,
    /// `q` ended the run with an exit code.
    Quit(Value),
    /// An input instruction is waiting; the next tick resumes at that IP.
    AwaitingInput,
}

impl fmt::Display for RunSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Stopped => write!(f, "stopped"),
            Self::Quit(code) => write!(f, "quit with code {code}"),
            Self::AwaitingInput => write!(f, "awaiting input"),
        }
    }
}

/// One IP's step within a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// The stepping IP.
    pub ip: IpId,
    /// Cell that was dispatched or pushed.
    pub position: Vector,
    /// Its value.
    pub value: Value,
    /// How the instruction finished.
    pub outcome: Outcome,
    /// The cell was pushed as a string character rather than executed.
    pub string_mode: bool,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = glyph_of(self.value).unwrap_or('?');
        write!(f, "ip#{} {} '{glyph}'", self.ip, self.position)?;
        if self.string_mode {
            write!(f, " (string)")
        } else {
            match self.outcome {
                Outcome::Done => Ok(()),
                Outcome::Reflect => write!(f, " reflect"),
                Outcome::Suspend => write!(f, " waiting"),
            }
        }
    }
}

/// What a `(` or `)` did to an IP's fingerprint list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FingerprintAction {
    /// A fingerprint was loaded.
    Loaded(&'static str),
    /// The most recent occurrence of a fingerprint was removed.
    Unloaded,
    /// The id was unknown or not loaded; the IP reflected.
    Failed {
        /// True for `(`, false for `)`.
        load: bool,
    },
}

impl FingerprintAction {
    /// Classifies an executed instruction; `ip` is the IP right after it ran.
    pub(crate) fn of(ip: &Ip, value: Value, outcome: Outcome) -> Option<Self> {
        match (value, outcome) {
            (LOAD, Outcome::Done) => Some(Self::Loaded(
                ip.fingerprints().next().map_or("?", |f| f.name),
            )),
            (UNLOAD, Outcome::Done) => Some(Self::Unloaded),
            (LOAD | UNLOAD, Outcome::Reflect) => Some(Self::Failed {
                load: value == LOAD,
            }),
            _ => None,
        }
    }
}

/// A fingerprint change made by one IP during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FingerprintStep {
    /// The IP whose list changed.
    pub ip: IpId,
    /// Position of the `(` or `)`.
    pub position: Vector,
    /// What happened.
    pub action: FingerprintAction,
}

/// Result of one call to [`Interpreter::tick`](crate::Interpreter::tick).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1 for the first tick of a run.
    pub tick: u64,
    /// Per-step records, when enabled in the config.
    pub executed: Vec<StepRecord>,
    /// Fingerprint loads and unloads, recorded whether or not steps are.
    pub fingerprints: Vec<FingerprintStep>,
    /// IPs created during the tick.
    pub forked: Vec<IpId>,
    /// IPs that stopped during the tick.
    pub terminated: Vec<IpId>,
    /// Set when the run paused or ended.
    pub signal: Option<RunSignal>,
}

impl TickReport {
    /// An empty report for tick `tick`.
    #[must_use]
    pub fn new(tick: u64) -> Self {
        Self {
            tick,
            ..Self::default()
        }
    }

    /// Returns true if the run is over after this tick.
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(
            self.signal,
            Some(RunSignal::Idle | RunSignal::Stopped | RunSignal::Quit(_))
        )
    }
}
