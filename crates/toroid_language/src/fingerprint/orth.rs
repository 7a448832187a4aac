//! ORTH: the orthogonal easement library.

use toroid_foundation::{Value, Vector};

use super::Fingerprint;
use crate::exec::{ExecContext, Outcome};
use crate::motion;

fn binary(ctx: &mut ExecContext<'_>, f: fn(Value, Value) -> Value) -> Outcome {
    let b = ctx.pop();
    let a = ctx.pop();
    ctx.push(f(a, b));
    Outcome::Done
}

fn and(ctx: &mut ExecContext<'_>) -> Outcome {
    binary(ctx, |a, b| a & b)
}

fn or(ctx: &mut ExecContext<'_>) -> Outcome {
    binary(ctx, |a, b| a | b)
}

fn xor(ctx: &mut ExecContext<'_>) -> Outcome {
    binary(ctx, |a, b| a ^ b)
}

fn set_x(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.ip.position.x = ctx.pop();
    Outcome::Done
}

fn set_y(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.ip.position.y = ctx.pop();
    Outcome::Done
}

fn set_dx(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.ip.delta.x = ctx.pop();
    Outcome::Done
}

fn set_dy(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.ip.delta.y = ctx.pop();
    Outcome::Done
}

/// Get with `x` popped before `y`.
fn get(ctx: &mut ExecContext<'_>) -> Outcome {
    let x = ctx.pop();
    let y = ctx.pop();
    let at = Vector::new(x, y) + ctx.ip.storage_offset;
    let value = ctx.space.read(at);
    ctx.push(value);
    Outcome::Done
}

/// Put with `x` popped before `y`.
fn put(ctx: &mut ExecContext<'_>) -> Outcome {
    let x = ctx.pop();
    let y = ctx.pop();
    let value = ctx.pop();
    let at = Vector::new(x, y) + ctx.ip.storage_offset;
    ctx.space.write(at, value);
    Outcome::Done
}

/// Skips the next cell when the popped value is zero.
fn ramp_if_zero(ctx: &mut ExecContext<'_>) -> Outcome {
    if ctx.pop() == 0 {
        motion::advance(ctx.ip, ctx.space, ctx.env);
    }
    Outcome::Done
}

fn output_string(ctx: &mut ExecContext<'_>) -> Outcome {
    let s = ctx.toss().pop_string();
    ctx.env.write_str(&s);
    Outcome::Done
}

/// `A O E` and/or/xor, `X Y` set position, `V W` set delta, `G P`
/// get/put, `Z` ramp if zero, `S` output string.
pub static ORTH: Fingerprint = Fingerprint::new(
    "ORTH",
    &[
        (b'A', and),
        (b'O', or),
        (b'E', xor),
        (b'X', set_x),
        (b'Y', set_y),
        (b'V', set_dx),
        (b'W', set_dy),
        (b'G', get),
        (b'P', put),
        (b'Z', ramp_if_zero),
        (b'S', output_string),
    ],
);
