//! `t` and `q`.

use crate::exec::{ExecContext, Outcome};
use crate::motion;

/// Forks a child with a reversed delta. The child is moved off the `t` cell
/// immediately so it does not fork again when it first runs.
pub(crate) fn split(ctx: &mut ExecContext<'_>) -> Outcome {
    let id = ctx.env.issue_id();
    let mut child = ctx.ip.fork(id);
    motion::advance(&mut child, ctx.space, ctx.env);
    log::debug!("ip#{} forked ip#{id} at {}", ctx.ip.id(), child.position);
    ctx.forks.push(child);
    Outcome::Done
}

pub(crate) fn quit(ctx: &mut ExecContext<'_>) -> Outcome {
    let code = ctx.pop();
    ctx.quit = Some(code);
    ctx.ip.deactivate();
    Outcome::Done
}
