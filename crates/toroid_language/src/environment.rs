//! Run-wide state shared by every IP.
//!
//! The [`Environment`] owns everything an instruction may touch besides its
//! own IP and FungeSpace: the input channel, the output log, the random
//! source, host information reported by `y`, the fingerprint registry, and
//! fingerprint state such as the REFC reference table. Each interpreter owns
//! its own environment, so independent runs never share state.

use std::collections::HashMap;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use toroid_foundation::{Dialect, Rect, Value, Vector};

use crate::fingerprint::FingerprintRegistry;
use crate::ip::IpId;

// =============================================================================
// Input
// =============================================================================

/// Result of polling an input channel for one character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputPoll {
    /// A character is available and has been consumed.
    Ready(char),
    /// Nothing yet; the run suspends until input arrives.
    Pending,
    /// The channel is closed.
    Eof,
}

/// A program's input channel.
pub trait InputSource {
    /// Consumes one character if available.
    fn poll_char(&mut self) -> InputPoll;
}

/// An input channel that is always closed.
#[derive(Debug, Default)]
struct ClosedInput;

impl InputSource for ClosedInput {
    fn poll_char(&mut self) -> InputPoll {
        InputPoll::Eof
    }
}

// =============================================================================
// REFC reference table
// =============================================================================

/// Maps vectors to small integer references and back.
#[derive(Clone, Debug, Default)]
pub struct ReferenceTable {
    vectors: Vec<Vector>,
    refs: HashMap<Vector, Value>,
}

impl ReferenceTable {
    /// Returns the reference for `v`, issuing a new one on first use.
    pub fn reference(&mut self, v: Vector) -> Value {
        if let Some(&r) = self.refs.get(&v) {
            return r;
        }
        let r = Value::try_from(self.vectors.len()).unwrap_or(Value::MAX);
        self.vectors.push(v);
        self.refs.insert(v, r);
        r
    }

    /// Dereferences a reference issued by [`ReferenceTable::reference`].
    #[must_use]
    pub fn dereference(&self, r: Value) -> Option<Vector> {
        usize::try_from(r).ok().and_then(|i| self.vectors.get(i)).copied()
    }

    /// Number of issued references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Returns true if no reference has been issued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

// =============================================================================
// Environment
// =============================================================================

/// Host-facing state for one run.
pub struct Environment {
    dialect: Dialect,
    board: Rect,
    input: Box<dyn InputSource>,
    echo_input: bool,
    output: String,
    number_separator: Option<char>,
    rng: ChaCha8Rng,
    seed: u64,
    args: Vec<String>,
    vars: Vec<(String, String)>,
    file_io: bool,
    registry: FingerprintRegistry,
    references: ReferenceTable,
    next_id: IpId,
    /// Digits read so far by an `&` that is waiting for more input.
    pending_number: Option<PendingNumber>,
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct PendingNumber {
    pub(crate) value: Value,
    pub(crate) negative: bool,
    pub(crate) digits: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl Environment {
    /// Creates an environment with a closed input channel and the standard
    /// fingerprint registry.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            board: Rect::befunge93_board(),
            input: Box::new(ClosedInput),
            echo_input: true,
            output: String::new(),
            number_separator: None,
            rng: ChaCha8Rng::seed_from_u64(0),
            seed: 0,
            args: Vec::new(),
            vars: Vec::new(),
            file_io: true,
            registry: FingerprintRegistry::standard(),
            references: ReferenceTable::default(),
            next_id: 0,
            pending_number: None,
        }
    }

    /// Sets the finite board used by Befunge-93 mode.
    #[must_use]
    pub fn with_board(mut self, board: Rect) -> Self {
        self.board = board;
        self
    }

    /// Sets the input channel.
    #[must_use]
    pub fn with_input(mut self, input: Box<dyn InputSource>) -> Self {
        self.input = input;
        self
    }

    /// Controls whether consumed input is copied to the output log.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo_input = echo;
        self
    }

    /// Sets a character appended after every `.` output.
    #[must_use]
    pub fn with_number_separator(mut self, separator: Option<char>) -> Self {
        self.number_separator = separator;
        self
    }

    /// Seeds the random source used by `?`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Sets the program arguments reported by `y`.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Sets the environment variables reported by `y`.
    #[must_use]
    pub fn with_vars(mut self, vars: Vec<(String, String)>) -> Self {
        self.vars = vars;
        self
    }

    /// Enables or disables the `i` and `o` instructions.
    #[must_use]
    pub fn with_file_io(mut self, enabled: bool) -> Self {
        self.file_io = enabled;
        self
    }

    /// Replaces the fingerprint registry.
    #[must_use]
    pub fn with_registry(mut self, registry: FingerprintRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The dialect in force.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The finite board.
    #[must_use]
    pub fn board(&self) -> Rect {
        self.board
    }

    /// Returns true if `i` and `o` may touch the host filesystem.
    #[must_use]
    pub fn file_io(&self) -> bool {
        self.file_io
    }

    /// Program arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Environment variables.
    #[must_use]
    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    /// The fingerprint registry.
    #[must_use]
    pub fn registry(&self) -> &FingerprintRegistry {
        &self.registry
    }

    /// The REFC reference table.
    pub fn references(&mut self) -> &mut ReferenceTable {
        &mut self.references
    }

    /// Replaces the input channel.
    pub fn set_input(&mut self, input: Box<dyn InputSource>) {
        self.input = input;
    }

    /// Polls the input channel, echoing a consumed character.
    pub fn poll_char(&mut self) -> InputPoll {
        let poll = self.input.poll_char();
        if let InputPoll::Ready(c) = poll {
            if self.echo_input {
                self.output.push(c);
            }
        }
        poll
    }

    /// Appends a character to the output log.
    pub fn write_char(&mut self, c: char) {
        self.output.push(c);
    }

    /// Appends a number to the output log.
    pub fn write_number(&mut self, n: Value) {
        use std::fmt::Write as _;
        let _ = write!(self.output, "{n}");
        if let Some(sep) = self.number_separator {
            self.output.push(sep);
        }
    }

    /// Appends text to the output log.
    pub fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// The output log.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drains the output log.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// The random source.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Issues a fresh IP id.
    pub fn issue_id(&mut self) -> IpId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The id the next call to [`Environment::issue_id`] returns.
    #[must_use]
    pub fn peek_id(&self) -> IpId {
        self.next_id
    }

    /// Resets per-run state: ids, the random source, pending input, and
    /// fingerprint tables. The output log and input channel are kept.
    pub fn reset_run(&mut self) {
        self.next_id = 0;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.references = ReferenceTable::default();
        self.pending_number = None;
    }

    pub(crate) fn pending_number(&mut self) -> &mut Option<PendingNumber> {
        &mut self.pending_number
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("dialect", &self.dialect)
            .field("board", &self.board)
            .field("output_len", &self.output.len())
            .field("seed", &self.seed)
            .field("file_io", &self.file_io)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
