//! Integration tests for Layer 2: Language
//!
//! Tests for the instruction catalog, single-instruction semantics, forking,
//! and fingerprint loading.

mod catalog;
mod fingerprints;
mod instructions;

use toroid_foundation::{Dialect, Value};
use toroid_language::{Environment, ExecContext, Ip, Outcome, execute};
use toroid_space::FungeSpace;

/// One IP over a private space and environment, driven one instruction at
/// a time.
pub struct Machine {
    pub ip: Ip,
    pub space: FungeSpace,
    pub env: Environment,
    pub forks: Vec<Ip>,
}

impl Machine {
    pub fn new(dialect: Dialect) -> Self {
        let mut env = Environment::new(dialect);
        let ip = Ip::new(env.issue_id());
        Self {
            ip,
            space: FungeSpace::new(),
            env,
            forks: Vec::new(),
        }
    }

    pub fn funge98() -> Self {
        Self::new(Dialect::Funge98)
    }

    pub fn push(&mut self, values: &[Value]) -> &mut Self {
        for &v in values {
            self.ip.stacks.toss_mut().push(v);
        }
        self
    }

    /// Pushes a fingerprint name so `(` or `)` pops it back.
    pub fn push_name(&mut self, name: &str) -> &mut Self {
        for b in name.bytes().rev() {
            self.ip.stacks.toss_mut().push(Value::from(b));
        }
        self.ip
            .stacks
            .toss_mut()
            .push(Value::try_from(name.len()).unwrap());
        self
    }

    pub fn exec(&mut self, glyph: char) -> Outcome {
        let mut ctx = ExecContext::new(&mut self.ip, &mut self.space, &mut self.env);
        let outcome = execute(&mut ctx, glyph as Value);
        self.forks.append(&mut ctx.forks);
        outcome
    }

    /// The TOSS, bottom first.
    pub fn stack(&self) -> Vec<Value> {
        self.ip.stacks.toss().as_bottom_slice().to_vec()
    }
}
