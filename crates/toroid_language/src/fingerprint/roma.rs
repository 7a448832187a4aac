//! ROMA: roman numerals.

use toroid_foundation::Value;

use super::Fingerprint;
use crate::exec::{ExecContext, Outcome};

fn push<const N: Value>(ctx: &mut ExecContext<'_>) -> Outcome {
    ctx.push(N);
    Outcome::Done
}

/// `C D I L M V X` push 100, 500, 1, 50, 1000, 5, 10.
pub static ROMA: Fingerprint = Fingerprint::new(
    "ROMA",
    &[
        (b'C', push::<100>),
        (b'D', push::<500>),
        (b'I', push::<1>),
        (b'L', push::<50>),
        (b'M', push::<1000>),
        (b'V', push::<5>),
        (b'X', push::<10>),
    ],
);
