//! REFC: vector references. The table belongs to the run's environment.

use super::Fingerprint;
use crate::exec::{ExecContext, Outcome};

/// `R`: pops a vector and pushes a reference to it.
fn reference(ctx: &mut ExecContext<'_>) -> Outcome {
    let v = ctx.pop_vector();
    let r = ctx.env.references().reference(v);
    ctx.push(r);
    Outcome::Done
}

/// `D`: pops a reference and pushes its vector; unknown references reflect.
fn dereference(ctx: &mut ExecContext<'_>) -> Outcome {
    let r = ctx.pop();
    match ctx.env.references().dereference(r) {
        Some(v) => {
            ctx.push_vector(v);
            Outcome::Done
        }
        None => Outcome::Reflect,
    }
}

/// `R D`.
pub static REFC: Fingerprint = Fingerprint::new("REFC", &[(b'R', reference), (b'D', dereference)]);
