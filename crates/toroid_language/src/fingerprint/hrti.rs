//! HRTI: high-resolution timer. The mark is per-IP.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use toroid_foundation::Value;

use super::Fingerprint;
use crate::exec::{ExecContext, Outcome};

fn saturate(micros: u128) -> Value {
    Value::try_from(micros).unwrap_or(Value::MAX)
}

/// `G`: timer granularity in microseconds.
fn granularity(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.push(1);
    Outcome::Done
}

/// `M`: marks the current time.
fn mark(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.ip.set_mark(Some(Instant::now()));
    Outcome::Done
}

/// `T`: microseconds since the mark; reflects without one.
fn elapsed(ctx: &mut ExecContext<'_>) -> Outcome {
    match ctx.ip.mark() {
        Some(mark) => {
            ctx.push(saturate(mark.elapsed().as_micros()));
            Outcome::Done
        }
        None => Outcome::Reflect,
    }
}

/// `E`: erases the mark.
fn erase(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.ip.set_mark(None);
    Outcome::Done
}

/// `S`: microseconds into the current second.
fn second(ctx: &mut ExecContext<'_>) -> Outcome {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_micros());
    ctx.push(saturate(u128::from(micros)));
    Outcome::Done
}

/// `G M T E S`.
pub static HRTI: Fingerprint = Fingerprint::new(
    "HRTI",
    &[
        (b'G', granularity),
        (b'M', mark),
        (b'T', elapsed),
        (b'E', erase),
        (b'S', second),
    ],
);
