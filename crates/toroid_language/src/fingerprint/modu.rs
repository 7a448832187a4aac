//! MODU: modulo variants. A zero divisor pushes 0.

use toroid_foundation::Value;

use super::Fingerprint;
use crate::exec::{ExecContext, Outcome};

fn with_divisor(ctx: &mut ExecContext<'_>, f: fn(Value, Value) -> Value) -> Outcome {
    let b = ctx.pop();
    let a = ctx.pop();
    ctx.push(if b == 0 { 0 } else { f(a, b) });
    Outcome::Done
}

/// Floored modulo: the result takes the divisor's sign.
fn signed(a: Value, b: Value) -> Value {
    let r = a.wrapping_rem(b);
    if r != 0 && (r < 0) != (b < 0) { r.wrapping_add(b) } else { r }
}

/// Sam Holden's unsigned modulo: the magnitude of the remainder.
fn unsigned(a: Value, b: Value) -> Value {
    a.wrapping_rem(b).wrapping_abs()
}

/// C-style remainder: the result takes the dividend's sign.
fn remainder(a: Value, b: Value) -> Value {
    a.wrapping_rem(b)
}

fn signed_modulo(ctx: &mut ExecContext<'_>) -> Outcome {
    with_divisor(ctx, signed)
}

fn unsigned_modulo(ctx: &mut ExecContext<'_>) -> Outcome {
    with_divisor(ctx, unsigned)
}

fn c_remainder(ctx: &mut ExecContext<'_>) -> Outcome {
    with_divisor(ctx, remainder)
}

/// `M` signed modulo, `U` unsigned modulo, `R` remainder.
pub static MODU: Fingerprint = Fingerprint::new(
    "MODU",
    &[
        (b'M', signed_modulo),
        (b'U', unsigned_modulo),
        (b'R', c_remainder),
    ],
);
