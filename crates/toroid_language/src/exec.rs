//! Instruction dispatch.
//!
//! [`execute`] looks up a cell's descriptor, pads the TOSS to the
//! descriptor's minimum depth, and runs the operation through one `match`.
//! Operations report an [`Outcome`]; a [`Outcome::Reflect`] is applied to
//! the IP before `execute` returns.

use toroid_foundation::{Stack, Value, Vector};
use toroid_space::FungeSpace;

use crate::catalog::{Op, lookup};
use crate::environment::Environment;
use crate::ip::Ip;
use crate::ops;

/// How an instruction finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The instruction completed.
    Done,
    /// The instruction failed and the IP was reflected.
    Reflect,
    /// The instruction is waiting for input. Nothing was changed; the IP
    /// must execute the same cell again once input may be available.
    Suspend,
}

/// Everything one instruction may read or modify.
pub struct ExecContext<'a> {
    /// The executing IP.
    pub ip: &'a mut Ip,
    /// The shared FungeSpace.
    pub space: &'a mut FungeSpace,
    /// Run-wide state.
    pub env: &'a mut Environment,
    /// IPs created by `t`, in creation order.
    pub forks: Vec<Ip>,
    /// Exit code requested by `q`.
    pub quit: Option<Value>,
}

impl<'a> ExecContext<'a> {
    /// Creates a context for one step of `ip`.
    pub fn new(ip: &'a mut Ip, space: &'a mut FungeSpace, env: &'a mut Environment) -> Self {
        Self {
            ip,
            space,
            env,
            forks: Vec::new(),
            quit: None,
        }
    }

    /// The executing IP's TOSS.
    pub fn toss(&mut self) -> &mut Stack {
        self.ip.stacks.toss_mut()
    }

    /// Pops from the TOSS.
    pub fn pop(&mut self) -> Value {
        self.toss().pop()
    }

    /// Pushes onto the TOSS.
    pub fn push(&mut self, value: Value) {
        self.toss().push(value);
    }

    /// Pops a vector from the TOSS.
    pub fn pop_vector(&mut self) -> Vector {
        self.toss().pop_vector()
    }

    /// Pushes a vector onto the TOSS.
    pub fn push_vector(&mut self, v: Vector) {
        self.toss().push_vector(v);
    }

    /// Pushes a boolean as `1` or `0`.
    pub fn push_bool(&mut self, b: bool) {
        self.push(Value::from(b));
    }
}

/// Executes the instruction bound to `value` for `ctx.ip`.
///
/// Instructions missing from the current dialect reflect. The IP is never
/// moved past the cell here; that is the tick's job.
pub fn execute(ctx: &mut ExecContext<'_>, value: Value) -> Outcome {
    let instruction = lookup(value);
    let outcome = if instruction.available_in(ctx.env.dialect()) {
        ctx.toss().ensure(instruction.min_stack);
        dispatch(ctx, instruction.op)
    } else {
        Outcome::Reflect
    };
    if outcome == Outcome::Reflect {
        ctx.ip.reflect();
    }
    outcome
}

fn dispatch(ctx: &mut ExecContext<'_>, op: Op) -> Outcome {
    use ops::{arithmetic, concurrency, flow, io, semantics, space, stack, system};

    match op {
        Op::Push(n) => {
            ctx.push(n);
            Outcome::Done
        }
        Op::StringMode => {
            ctx.ip.string_mode = !ctx.ip.string_mode;
            Outcome::Done
        }
        Op::FetchChar => space::fetch_char(ctx),
        Op::StoreChar => space::store_char(ctx),

        Op::Add => arithmetic::binary(ctx, Value::wrapping_add),
        Op::Sub => arithmetic::binary(ctx, Value::wrapping_sub),
        Op::Mul => arithmetic::binary(ctx, Value::wrapping_mul),
        Op::Div => arithmetic::binary(ctx, arithmetic::div),
        Op::Rem => arithmetic::binary(ctx, arithmetic::rem),
        Op::Not => arithmetic::not(ctx),
        Op::Greater => arithmetic::binary(ctx, |a, b| Value::from(a > b)),

        Op::Go(direction) => flow::go(ctx, direction),
        Op::GoAway => flow::go_away(ctx),
        Op::TurnLeft => flow::turn(ctx, Vector::turn_left),
        Op::TurnRight => flow::turn(ctx, Vector::turn_right),
        Op::Reflect | Op::Execute | Op::ThreeD | Op::Unknown => Outcome::Reflect,
        Op::HorizontalIf => flow::branch(ctx, Vector::EAST, Vector::WEST),
        Op::VerticalIf => flow::branch(ctx, Vector::SOUTH, Vector::NORTH),
        Op::Compare => flow::compare(ctx),
        Op::AbsoluteDelta => flow::absolute_delta(ctx),
        Op::Trampoline => flow::trampoline(ctx),
        Op::Jump => flow::jump(ctx),
        Op::Iterate => flow::iterate(ctx),
        Op::Stop => {
            ctx.ip.deactivate();
            Outcome::Done
        }
        Op::Quit => concurrency::quit(ctx),

        Op::Duplicate => stack::duplicate(ctx),
        Op::Swap => stack::swap(ctx),
        Op::Discard => {
            ctx.pop();
            Outcome::Done
        }
        Op::Clear => {
            ctx.toss().clear();
            Outcome::Done
        }
        Op::BeginBlock => stack::begin_block(ctx),
        Op::EndBlock => stack::end_block(ctx),
        Op::StackUnder => stack::under(ctx),

        Op::Get => space::get(ctx),
        Op::Put => space::put(ctx),

        Op::OutputChar => io::output_char(ctx),
        Op::OutputNumber => io::output_number(ctx),
        Op::InputChar => io::input_char(ctx),
        Op::InputNumber => io::input_number(ctx),
        Op::FileInput => io::file_input(ctx),
        Op::FileOutput => io::file_output(ctx),

        Op::Split => concurrency::split(ctx),
        Op::SysInfo => system::sysinfo(ctx),

        Op::LoadSemantics => semantics::load(ctx),
        Op::UnloadSemantics => semantics::unload(ctx),
        Op::Letter(index) => semantics::letter(ctx, index),

        Op::JumpOver | Op::Nop => Outcome::Done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_foundation::Dialect;

    fn run(ip: &mut Ip, space: &mut FungeSpace, env: &mut Environment, glyph: char) -> Outcome {
        let mut ctx = ExecContext::new(ip, space, env);
        execute(&mut ctx, glyph as Value)
    }

    #[test]
    fn unknown_instruction_reflects() {
        let mut ip = Ip::new(0);
        let mut space = FungeSpace::new();
        let mut env = Environment::default();
        assert_eq!(run(&mut ip, &mut space, &mut env, 'Q'), Outcome::Reflect);
        assert_eq!(ip.delta, Vector::WEST);
        assert_eq!(run(&mut ip, &mut space, &mut env, '\u{7F}'), Outcome::Reflect);
        assert_eq!(ip.delta, Vector::EAST);
    }

    #[test]
    fn funge98_instructions_reflect_in_befunge93() {
        let mut ip = Ip::new(0);
        let mut space = FungeSpace::new();
        let mut env = Environment::new(Dialect::Befunge93);
        assert_eq!(run(&mut ip, &mut space, &mut env, 'a'), Outcome::Reflect);
        assert!(ip.stacks.toss().is_empty());
    }

    #[test]
    fn padding_happens_at_the_bottom() {
        let mut ip = Ip::new(0);
        ip.stacks.toss_mut().push(7);
        let mut space = FungeSpace::new();
        let mut env = Environment::default();
        run(&mut ip, &mut space, &mut env, '\\');
        assert_eq!(ip.stacks.toss().as_bottom_slice(), &[7, 0]);
    }

    #[test]
    fn string_mode_toggles() {
        let mut ip = Ip::new(0);
        let mut space = FungeSpace::new();
        let mut env = Environment::default();
        run(&mut ip, &mut space, &mut env, '"');
        assert!(ip.string_mode);
    }

    #[test]
    fn stop_deactivates() {
        let mut ip = Ip::new(0);
        let mut space = FungeSpace::new();
        let mut env = Environment::default();
        assert_eq!(run(&mut ip, &mut space, &mut env, '@'), Outcome::Done);
        assert!(!ip.is_active());
    }
}
