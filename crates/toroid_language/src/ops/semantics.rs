//! Fingerprint loading and letter dispatch.

use toroid_foundation::Value;

use crate::exec::{ExecContext, Outcome};

/// Pops a count and that many cells, folding them into a fingerprint id
/// with the first popped cell most significant.
fn pop_fingerprint_id(ctx: &mut ExecContext<'_>, count: Value) -> Value {
    let count = count.unsigned_abs() as usize;
    let available = count.min(ctx.toss().len());
    let mut id: Value = 0;
    for _ in 0..available {
        id = id.wrapping_mul(256).wrapping_add(ctx.pop());
    }
    // Cells below the bottom are zeros; four of them shift everything out.
    for _ in 0..(count - available).min(4) {
        id = id.wrapping_mul(256);
    }
    id
}

pub(crate) fn load(ctx: &mut ExecContext<'_>) -> Outcome {
    let count = ctx.pop();
    if count < 0 {
        return Outcome::Reflect;
    }
    let id = pop_fingerprint_id(ctx, count);
    match ctx.env.registry().lookup(id) {
        Some(fingerprint) => {
            ctx.ip.load_fingerprint(fingerprint);
            log::debug!("ip#{} loaded {}", ctx.ip.id(), fingerprint.name);
            ctx.push(id);
            ctx.push(1);
            Outcome::Done
        }
        None => {
            log::debug!("ip#{} has no fingerprint {id:#010x}", ctx.ip.id());
            Outcome::Reflect
        }
    }
}

pub(crate) fn unload(ctx: &mut ExecContext<'_>) -> Outcome {
    let count = ctx.pop();
    if count < 0 {
        return Outcome::Reflect;
    }
    let id = pop_fingerprint_id(ctx, count);
    if ctx.ip.unload_fingerprint(id) {
        log::debug!("ip#{} unloaded {id:#010x}", ctx.ip.id());
        Outcome::Done
    } else {
        Outcome::Reflect
    }
}

pub(crate) fn letter(ctx: &mut ExecContext<'_>, index: u8) -> Outcome {
    match ctx.ip.letter(index) {
        Some((_, op)) => op(ctx),
        None => Outcome::Reflect,
    }
}
