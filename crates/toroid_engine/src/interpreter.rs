//! The interpreter and its tick loop.
//!
//! One tick steps every IP that was active when the tick began, exactly
//! once, scanning the IP list from the highest index down to zero:
//! 1. In string mode, any cell but `"` is pushed raw
//! 2. Otherwise spaces and `;` comments are skipped and the instruction
//!    found is dispatched
//! 3. The IP then moves one step along its (possibly new) delta
//!
//! A fork inserts the child directly after its parent. Because the scan
//! runs downward, that slot has already been visited, so a child first
//! executes on the tick after its birth and from then on runs before its
//! parent in every tick.
//!
//! An input instruction with nothing to read suspends the whole tick at
//! that IP. The next call to [`Interpreter::tick`] resumes with the same IP
//! and never repeats the IPs that already stepped.

use std::time::Duration;

use toroid_foundation::{Dialect, Value, Vector};
use toroid_language::motion::{advance, resolve};
use toroid_language::{Environment, ExecContext, InputSource, Ip, Outcome, execute};
use toroid_space::FungeSpace;

use crate::config::{Config, RunMode};
use crate::cursor::EditCursor;
use crate::report::{FingerprintAction, FingerprintStep, RunSignal, StepRecord, TickReport};

const QUOTE: Value = b'"' as Value;

// =============================================================================
// Run State
// =============================================================================

/// Whether a program is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunState {
    /// No program IP is active; only the edit cursor is live.
    Edit,
    /// At least one program IP is active.
    Run,
}

/// What happened to one IP during a tick.
enum Step {
    Continue,
    Suspend,
    Quit(Value),
}

// =============================================================================
// Interpreter
// =============================================================================

/// Owns one FungeSpace, the run's IPs, and the edit cursor.
#[derive(Debug)]
pub struct Interpreter {
    config: Config,
    space: FungeSpace,
    /// Program text as it was when the current run started.
    pristine: Option<FungeSpace>,
    ips: Vec<Ip>,
    env: Environment,
    state: RunState,
    mode: RunMode,
    tick: u64,
    /// Index one past the IP to resume with after an input suspension.
    resume_at: Option<usize>,
    quit_code: Option<Value>,
    cursor: EditCursor,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Interpreter {
    /// Creates an interpreter in the edit state with an empty space.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let env = Environment::new(config.dialect)
            .with_board(config.board)
            .with_echo(config.echo_input)
            .with_number_separator(config.number_separator)
            .with_seed(config.seed)
            .with_args(config.args.clone())
            .with_vars(config.env.clone())
            .with_file_io(config.file_io);
        Self {
            space: FungeSpace::new(),
            pristine: None,
            ips: Vec::new(),
            env,
            state: RunState::Edit,
            mode: config.mode,
            tick: 0,
            resume_at: None,
            quit_code: None,
            cursor: EditCursor::new(config.board),
            config,
        }
    }

    /// Creates an interpreter holding `source` at the origin.
    #[must_use]
    pub fn with_source(config: Config, source: &str) -> Self {
        let mut interpreter = Self::new(config);
        interpreter.load_source(source);
        interpreter
    }

    /// The configuration this interpreter was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Turns per-step records in tick reports on or off.
    pub fn set_record_steps(&mut self, record: bool) {
        self.config.record_steps = record;
    }

    // -------------------------------------------------------------------------
    // Program text
    // -------------------------------------------------------------------------

    /// Replaces the program with `source`, placed at the origin.
    ///
    /// A running program is stopped first. Returns the size of the loaded
    /// text.
    pub fn load_source(&mut self, source: &str) -> Vector {
        self.halt();
        self.space = FungeSpace::new();
        self.pristine = None;
        self.space.load_text(Vector::ZERO, source)
    }

    /// The FungeSpace.
    #[must_use]
    pub fn space(&self) -> &FungeSpace {
        &self.space
    }

    /// Mutable access to the FungeSpace.
    pub fn space_mut(&mut self) -> &mut FungeSpace {
        &mut self.space
    }

    /// The edit cursor.
    #[must_use]
    pub fn cursor(&self) -> &EditCursor {
        &self.cursor
    }

    /// Mutable access to the edit cursor.
    pub fn cursor_mut(&mut self) -> &mut EditCursor {
        &mut self.cursor
    }

    /// Types text at the edit cursor.
    pub fn type_at_cursor(&mut self, text: &str) {
        self.cursor.type_str(&mut self.space, text);
    }

    /// Restores the program text saved when the last run started.
    ///
    /// Returns false if there is nothing to restore or a run is active.
    pub fn restore(&mut self) -> bool {
        if self.state == RunState::Run {
            return false;
        }
        match self.pristine.take() {
            Some(space) => {
                self.space = space;
                true
            }
            None => false,
        }
    }

    /// Stops any run and clears the space, output, and cursor.
    pub fn reset(&mut self) {
        self.halt();
        self.ips.clear();
        self.space = FungeSpace::new();
        self.pristine = None;
        self.tick = 0;
        self.quit_code = None;
        self.env.take_output();
        self.env.reset_run();
        self.cursor = EditCursor::new(self.config.board);
    }

    // -------------------------------------------------------------------------
    // Host I/O
    // -------------------------------------------------------------------------

    /// Replaces the input channel.
    pub fn set_input(&mut self, input: Box<dyn InputSource>) {
        self.env.set_input(input);
    }

    /// Output written so far.
    #[must_use]
    pub fn output(&self) -> &str {
        self.env.output()
    }

    /// Drains the output log.
    pub fn take_output(&mut self) -> String {
        self.env.take_output()
    }

    /// Run-wide state shared by the IPs.
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    // -------------------------------------------------------------------------
    // Run control
    // -------------------------------------------------------------------------

    /// Edit or run.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// Returns true while a program is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Run
    }

    /// The IPs of the current or last run, stopped ones included.
    #[must_use]
    pub fn ips(&self) -> &[Ip] {
        &self.ips
    }

    /// Number of IPs still active.
    #[must_use]
    pub fn active_ips(&self) -> usize {
        self.ips.iter().filter(|ip| ip.is_active()).count()
    }

    /// Ticks completed in the current or last run.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Exit code of the last run, if it ended with `q`.
    #[must_use]
    pub fn quit_code(&self) -> Option<Value> {
        self.quit_code
    }

    /// Host pacing.
    #[must_use]
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Changes host pacing. Takes effect between ticks.
    pub fn set_mode(&mut self, mode: RunMode) {
        self.mode = mode;
    }

    /// How long the host should wait before the next tick.
    ///
    /// `None` in single-step mode, where the host ticks only on request.
    #[must_use]
    pub fn pace(&self) -> Option<Duration> {
        match self.mode {
            RunMode::Continuous => Some(Duration::ZERO),
            RunMode::Delayed(delay) => Some(delay),
            RunMode::SingleStep => None,
        }
    }

    /// Starts a run: one IP at the origin heading east with an empty stack.
    ///
    /// A run already in progress is discarded first.
    pub fn start(&mut self) {
        self.halt();
        self.env.reset_run();
        self.pristine = Some(self.space.snapshot());
        self.ips = vec![Ip::new(self.env.issue_id())];
        self.tick = 0;
        self.resume_at = None;
        self.quit_code = None;
        self.state = RunState::Run;
        log::info!(
            "run started ({:?}, {} cells)",
            self.config.dialect,
            self.space.len()
        );
    }

    /// Stops the run at a tick boundary.
    ///
    /// With `restore_on_stop` set, the program text from before the run is
    /// put back. Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        if self.state != RunState::Run {
            return false;
        }
        self.halt();
        log::info!("run stopped after {} ticks", self.tick);
        if self.config.restore_on_stop {
            self.restore();
        }
        true
    }

    fn halt(&mut self) {
        for ip in &mut self.ips {
            ip.deactivate();
        }
        self.resume_at = None;
        self.state = RunState::Edit;
    }

    /// Runs until every IP stops, input is needed, or the tick limit is hit.
    ///
    /// Starts a run first if none is active.
    pub fn run_to_idle(&mut self) -> RunSignal {
        self.run_with(|_, _| {})
    }

    /// Like [`Interpreter::run_to_idle`], handing every tick report and the
    /// IP list as it stands after that tick to `observe`.
    pub fn run_with(&mut self, mut observe: impl FnMut(&TickReport, &[Ip])) -> RunSignal {
        if self.state == RunState::Edit {
            self.start();
        }
        loop {
            if self.resume_at.is_none()
                && self.config.max_ticks.is_some_and(|max| self.tick >= max)
            {
                self.stop();
                return RunSignal::Stopped;
            }
            let report = self.tick();
            observe(&report, &self.ips);
            if let Some(signal) = report.signal {
                return signal;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------------

    /// Executes one tick.
    ///
    /// In the edit state nothing happens and the report carries
    /// [`RunSignal::Idle`].
    pub fn tick(&mut self) -> TickReport {
        if self.state == RunState::Edit {
            let mut report = TickReport::new(self.tick);
            report.signal = Some(RunSignal::Idle);
            return report;
        }

        let start = match self.resume_at.take() {
            Some(index) => index,
            None => {
                self.tick += 1;
                self.ips.len()
            }
        };
        let mut report = TickReport::new(self.tick);

        for index in (0..start).rev() {
            match self.step(index, &mut report) {
                Step::Continue => {}
                Step::Suspend => {
                    log::debug!("tick {} waiting for input at ip index {index}", self.tick);
                    self.resume_at = Some(index + 1);
                    report.signal = Some(RunSignal::AwaitingInput);
                    return report;
                }
                Step::Quit(code) => {
                    for ip in &mut self.ips {
                        if ip.is_active() {
                            ip.deactivate();
                            report.terminated.push(ip.id());
                        }
                    }
                    self.quit_code = Some(code);
                    break;
                }
            }
        }

        if self.ips.iter().all(|ip| !ip.is_active()) {
            self.state = RunState::Edit;
            let signal = match self.quit_code {
                Some(code) => RunSignal::Quit(code),
                None => RunSignal::Idle,
            };
            log::info!("run ended after {} ticks: {signal}", self.tick);
            report.signal = Some(signal);
        }
        report
    }

    /// Steps the IP at `index` once.
    fn step(&mut self, index: usize, report: &mut TickReport) -> Step {
        let Some(ip) = self.ips.get_mut(index) else {
            return Step::Continue;
        };
        if !ip.is_active() {
            return Step::Continue;
        }
        let id = ip.id();

        let cell = self.space.read(ip.position);
        if ip.string_mode && cell != QUOTE {
            ip.stacks.toss_mut().push(cell);
            if self.config.record_steps {
                report.executed.push(StepRecord {
                    ip: id,
                    position: ip.position,
                    value: cell,
                    outcome: Outcome::Done,
                    string_mode: true,
                });
            }
            advance(ip, &self.space, &self.env);
            return Step::Continue;
        }

        let value = resolve(ip, &self.space, &self.env);
        let position = ip.position;
        let mut ctx = ExecContext::new(ip, &mut self.space, &mut self.env);
        let outcome = execute(&mut ctx, value);
        let forks = std::mem::take(&mut ctx.forks);
        let quit = ctx.quit;

        if self.config.record_steps {
            report.executed.push(StepRecord {
                ip: id,
                position,
                value,
                outcome,
                string_mode: false,
            });
        }
        if self.config.dialect == Dialect::Funge98 {
            if let Some(action) = FingerprintAction::of(ip, value, outcome) {
                report.fingerprints.push(FingerprintStep {
                    ip: id,
                    position,
                    action,
                });
            }
        }
        if outcome == Outcome::Suspend {
            return Step::Suspend;
        }

        advance(ip, &self.space, &self.env);
        if !ip.is_active() {
            report.terminated.push(id);
        }

        for (offset, child) in forks.into_iter().enumerate() {
            report.forked.push(child.id());
            self.ips.insert(index + 1 + offset, child);
        }

        match quit {
            Some(code) => Step::Quit(code),
            None => Step::Continue,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
