//! Stack and stack-stack manipulation.

use crate::exec::{ExecContext, Outcome};

pub(crate) fn duplicate(ctx: &mut ExecContext<'_>) -> Outcome {
    let v = ctx.pop();
    ctx.push(v);
    ctx.push(v);
    Outcome::Done
}

pub(crate) fn swap(ctx: &mut ExecContext<'_>) -> Outcome {
    let b = ctx.pop();
    let a = ctx.pop();
    ctx.push(b);
    ctx.push(a);
    Outcome::Done
}

/// `{`: opens a block and moves the storage offset to `position + delta`.
///
/// The offset is plain vector arithmetic; it never wraps around the space.
pub(crate) fn begin_block(ctx: &mut ExecContext<'_>) -> Outcome {
    let n = ctx.pop();
    let offset = ctx.ip.storage_offset;
    ctx.ip.stacks.begin_block(n, offset);
    ctx.ip.storage_offset = ctx.ip.position + ctx.ip.delta;
    Outcome::Done
}

/// `}`: closes a block, restoring the saved storage offset.
pub(crate) fn end_block(ctx: &mut ExecContext<'_>) -> Outcome {
    let n = ctx.pop();
    match ctx.ip.stacks.end_block(n) {
        Some(offset) => {
            ctx.ip.storage_offset = offset;
            Outcome::Done
        }
        None => Outcome::Reflect,
    }
}

pub(crate) fn under(ctx: &mut ExecContext<'_>) -> Outcome {
    let count = ctx.pop();
    if ctx.ip.stacks.transfer_under(count) {
        Outcome::Done
    } else {
        Outcome::Reflect
    }
}
