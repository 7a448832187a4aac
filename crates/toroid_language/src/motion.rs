//! Movement through FungeSpace.
//!
//! Funge-98 movement is unbounded; a step that leaves the written bounds
//! wraps Lahey-style back to the far side of the bounds along the same
//! line. Befunge-93 movement folds onto the fixed board.
//!
//! Resolving "the next real instruction" consumes runs of spaces and, in
//! Funge-98, `;` comments. Resolution gives up when it comes back to where
//! it started or after a bounded number of cells, so an all-space path
//! costs one dispatch of a space rather than an endless scan.

use toroid_foundation::{Dialect, SPACE, Value, Vector, is_whitespace};
use toroid_space::FungeSpace;

use crate::environment::Environment;
use crate::ip::Ip;

const SEMICOLON: Value = b';' as Value;

/// The cell one step from `p` along `delta`, wrapped for the dialect.
#[must_use]
pub fn next_position(space: &FungeSpace, env: &Environment, p: Vector, delta: Vector) -> Vector {
    let q = p + delta;
    match env.dialect() {
        Dialect::Befunge93 => FungeSpace::wrap(env.board(), q),
        Dialect::Funge98 => space.wrap_lahey(q, delta),
    }
}

/// Moves the IP one step along its delta.
pub fn advance(ip: &mut Ip, space: &FungeSpace, env: &Environment) {
    ip.position = next_position(space, env, ip.position, ip.delta);
}

/// Moves the IP `n` steps along its delta (backwards for negative `n`)
/// without executing the cells in between.
pub fn jump(ip: &mut Ip, space: &FungeSpace, env: &Environment, n: Value) {
    let delta = if n < 0 { ip.delta.reversed() } else { ip.delta };
    let start = ip.position;
    let mut remaining = u64::from(n.unsigned_abs());
    let mut walked: u64 = 0;
    let mut p = start;
    while remaining > 0 {
        p = next_position(space, env, p, delta);
        remaining -= 1;
        walked += 1;
        if p == start && remaining > 0 {
            remaining %= walked;
        }
    }
    ip.position = p;
}

/// Upper bound on cells scanned while resolving one instruction.
fn scan_limit(space: &FungeSpace, env: &Environment) -> u64 {
    let rect = match env.dialect() {
        Dialect::Befunge93 => Some(env.board()),
        Dialect::Funge98 => space.bounds(),
    };
    rect.map_or(4, |r| {
        let span = r.width() + r.height();
        u64::try_from(span).map_or(u64::MAX, |s| s.saturating_mul(2).saturating_add(4))
    })
}

/// Finds the next real instruction at or after `start` along `delta`.
///
/// Returns its position and value. If the path holds nothing but spaces and
/// comments, returns the position where scanning stopped together with
/// [`SPACE`].
#[must_use]
pub fn resolve_from(
    space: &FungeSpace,
    env: &Environment,
    start: Vector,
    delta: Vector,
) -> (Vector, Value) {
    let funge98 = env.dialect().is_funge98();
    let limit = scan_limit(space, env);
    let mut p = start;
    let mut in_comment = false;
    let mut scanned: u64 = 0;
    loop {
        let v = space.read(p);
        if in_comment {
            if v == SEMICOLON {
                in_comment = false;
            }
        } else if v == SEMICOLON && funge98 {
            in_comment = true;
        } else if !is_whitespace(v) {
            return (p, v);
        }
        p = next_position(space, env, p, delta);
        scanned += 1;
        if (p == start && !in_comment) || scanned > limit {
            return (p, SPACE);
        }
    }
}

/// Moves the IP onto the next real instruction and returns its value.
pub fn resolve(ip: &mut Ip, space: &FungeSpace, env: &Environment) -> Value {
    let (p, v) = resolve_from(space, env, ip.position, ip.delta);
    ip.position = p;
    v
}
