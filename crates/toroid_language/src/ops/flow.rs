//! Direction changes, branches, jumps, and iteration.

use rand::Rng;
use toroid_foundation::Vector;

use crate::catalog::Direction;
use crate::exec::{ExecContext, Outcome, execute};
use crate::motion;

pub(crate) fn go(ctx: &mut ExecContext<'_>, direction: Direction) -> Outcome {
    ctx.ip.delta = match direction {
        Direction::East => Vector::EAST,
        Direction::West => Vector::WEST,
        Direction::North => Vector::NORTH,
        Direction::South => Vector::SOUTH,
    };
    Outcome::Done
}

pub(crate) fn go_away(ctx: &mut ExecContext<'_>) -> Outcome {
    let i = ctx.env.rng().gen_range(0..Vector::CARDINALS.len());
    ctx.ip.delta = Vector::CARDINALS[i];
    Outcome::Done
}

pub(crate) fn turn(ctx: &mut ExecContext<'_>, rotate: fn(Vector) -> Vector) -> Outcome {
    ctx.ip.delta = rotate(ctx.ip.delta);
    Outcome::Done
}

/// Pops a value; zero heads `if_zero`, anything else `otherwise`.
pub(crate) fn branch(ctx: &mut ExecContext<'_>, if_zero: Vector, otherwise: Vector) -> Outcome {
    let v = ctx.pop();
    ctx.ip.delta = if v == 0 { if_zero } else { otherwise };
    Outcome::Done
}

pub(crate) fn compare(ctx: &mut ExecContext<'_>) -> Outcome {
    let b = ctx.pop();
    let a = ctx.pop();
    if a < b {
        ctx.ip.delta = ctx.ip.delta.turn_left();
    } else if a > b {
        ctx.ip.delta = ctx.ip.delta.turn_right();
    }
    Outcome::Done
}

pub(crate) fn absolute_delta(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.ip.delta = ctx.pop_vector();
    Outcome::Done
}

pub(crate) fn trampoline(ctx: &mut ExecContext<'_>) -> Outcome {
    motion::advance(ctx.ip, ctx.space, ctx.env);
    Outcome::Done
}

pub(crate) fn jump(ctx: &mut ExecContext<'_>) -> Outcome {
    let n = ctx.pop();
    motion::jump(ctx.ip, ctx.space, ctx.env, n);
    Outcome::Done
}

/// `k`: runs the next real instruction `n` times from the current cell.
///
/// When the repeated instruction leaves the IP where it was, the IP is
/// placed on that instruction so the tick's move steps past it. If input
/// runs dry mid-way, the remaining count goes back on the stack and the
/// whole `k` is retried later.
pub(crate) fn iterate(ctx: &mut ExecContext<'_>) -> Outcome {
    let n = ctx.pop();
    if n < 0 {
        return Outcome::Reflect;
    }
    let here = ctx.ip.position;
    let first = motion::next_position(ctx.space, ctx.env, here, ctx.ip.delta);
    let (target, value) = motion::resolve_from(ctx.space, ctx.env, first, ctx.ip.delta);

    for done in 0..n {
        if execute(ctx, value) == Outcome::Suspend {
            ctx.push(n - done);
            return Outcome::Suspend;
        }
        if !ctx.ip.is_active() || ctx.quit.is_some() {
            break;
        }
    }
    if ctx.ip.position == here {
        ctx.ip.position = target;
    }
    Outcome::Done
}
