//! Arithmetic and comparison.

use toroid_foundation::Value;

use crate::exec::{ExecContext, Outcome};

/// Pops `b` then `a` and pushes `f(a, b)`.
pub(crate) fn binary(ctx: &mut ExecContext<'_>, f: impl Fn(Value, Value) -> Value) -> Outcome {
    let b = ctx.pop();
    let a = ctx.pop();
    ctx.push(f(a, b));
    Outcome::Done
}

/// Truncating division; a zero divisor gives 0.
pub(crate) fn div(a: Value, b: Value) -> Value {
    if b == 0 { 0 } else { a.wrapping_div(b) }
}

/// Truncating remainder; a zero divisor gives 0.
pub(crate) fn rem(a: Value, b: Value) -> Value {
    if b == 0 { 0 } else { a.wrapping_rem(b) }
}

pub(crate) fn not(ctx: &mut ExecContext<'_>) -> Outcome {
    let v = ctx.pop();
    ctx.push_bool(v == 0);
    Outcome::Done
}
