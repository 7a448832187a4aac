//! FungeSpace access: `g`, `p`, `'`, `s`.

use crate::exec::{ExecContext, Outcome};
use crate::motion;

pub(crate) fn get(ctx: &mut ExecContext<'_>) -> Outcome {
    let at = ctx.pop_vector() + ctx.ip.storage_offset;
    let value = ctx.space.read(at);
    ctx.push(value);
    Outcome::Done
}

pub(crate) fn put(ctx: &mut ExecContext<'_>) -> Outcome {
    let at = ctx.pop_vector() + ctx.ip.storage_offset;
    let value = ctx.pop();
    ctx.space.write(at, value);
    Outcome::Done
}

pub(crate) fn fetch_char(ctx: &mut ExecContext<'_>) -> Outcome {
    let next = motion::next_position(ctx.space, ctx.env, ctx.ip.position, ctx.ip.delta);
    let value = ctx.space.read(next);
    ctx.push(value);
    ctx.ip.position = next;
    Outcome::Done
}

pub(crate) fn store_char(ctx: &mut ExecContext<'_>) -> Outcome {
    let next = motion::next_position(ctx.space, ctx.env, ctx.ip.position, ctx.ip.delta);
    let value = ctx.pop();
    ctx.space.write(next, value);
    ctx.ip.position = next;
    Outcome::Done
}
