//! BOOL: bitwise logic.

use toroid_foundation::Value;

use super::Fingerprint;
use crate::exec::{ExecContext, Outcome};

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

fn not(ctx: &mut ExecContext<'_>) -> Outcome {
    let a = ctx.pop();
    ctx.push(!a);
    Outcome::Done
}

/// `A` and, `O` or, `N` not, `X` xor.
pub static BOOL: Fingerprint = Fingerprint::new(
    "BOOL",
    &[
        (b'A', and),
        (b'O', or),
        (b'N', not),
        (b'X', xor),
    ],
);
