//! Fingerprints: loadable bundles of letter instructions.
//!
//! A [`Fingerprint`] maps some of the letters `A`–`Z` to behaviors. An IP
//! resolves a letter through its loaded fingerprints, most recently loaded
//! first; a letter no loaded fingerprint defines reflects.
//!
//! Fingerprints are immutable statics. State they need lives on the IP
//! (HRTI's timer mark) or in the run's [`Environment`](crate::Environment)
//! (REFC's reference table).

mod boolean;
mod hrti;
mod modu;
mod orth;
mod refc;
mod roma;

use std::fmt;

use toroid_foundation::Value;

use crate::exec::{ExecContext, Outcome};

pub use boolean::BOOL;
pub use hrti::HRTI;
pub use modu::MODU;
pub use orth::ORTH;
pub use refc::REFC;
pub use roma::ROMA;

/// The behavior bound to one fingerprint letter.
pub type LetterFn = fn(&mut ExecContext<'_>) -> Outcome;

/// Computes a fingerprint id from its name, first character most
/// significant.
#[must_use]
pub const fn fingerprint_id(name: &str) -> Value {
    let bytes = name.as_bytes();
    let mut id: Value = 0;
    let mut i = 0;
    while i < bytes.len() {
        id = id.wrapping_mul(256).wrapping_add(bytes[i] as Value);
        i += 1;
    }
    id
}

/// A named set of letter overrides.
pub struct Fingerprint {
    /// Four-letter name.
    pub name: &'static str,
    /// Numeric id, as computed by [`fingerprint_id`].
    pub id: Value,
    letters: [Option<LetterFn>; 26],
}

impl Fingerprint {
    /// Builds a fingerprint from `(letter, behavior)` pairs.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, for statics) if a letter is outside `A`–`Z`.
    #[must_use]
    pub const fn new(name: &'static str, defs: &[(u8, LetterFn)]) -> Self {
        let mut letters: [Option<LetterFn>; 26] = [None; 26];
        let mut i = 0;
        while i < defs.len() {
            let (letter, op) = defs[i];
            assert!(letter.is_ascii_uppercase(), "fingerprint letters are A-Z");
            letters[(letter - b'A') as usize] = Some(op);
            i += 1;
        }
        Self {
            name,
            id: fingerprint_id(name),
            letters,
        }
    }

    /// The behavior for letter index `0..26`, if defined.
    #[must_use]
    pub fn letter(&self, index: u8) -> Option<LetterFn> {
        self.letters.get(usize::from(index)).copied().flatten()
    }

    /// Returns true if this fingerprint defines `letter`.
    #[must_use]
    pub fn defines(&self, letter: char) -> bool {
        letter.is_ascii_uppercase() && self.letter(letter as u8 - b'A').is_some()
    }

    /// The letters this fingerprint defines, in order.
    pub fn defined_letters(&self) -> impl Iterator<Item = char> + '_ {
        (b'A'..=b'Z')
            .filter(|&l| self.letter(l - b'A').is_some())
            .map(char::from)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprint")
            .field("name", &self.name)
            .field("id", &format_args!("{:#010x}", self.id))
            .field("letters", &self.defined_letters().collect::<String>())
            .finish()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.defined_letters().collect::<String>())
    }
}

fn reflect(_: &mut ExecContext<'_>) -> Outcome {
    Outcome::Reflect
}

/// Every letter reflects.
pub static NULL: Fingerprint = Fingerprint::new(
    "NULL",
    &[
        (b'A', reflect), (b'B', reflect), (b'C', reflect), (b'D', reflect),
        (b'E', reflect), (b'F', reflect), (b'G', reflect), (b'H', reflect),
        (b'I', reflect), (b'J', reflect), (b'K', reflect), (b'L', reflect),
        (b'M', reflect), (b'N', reflect), (b'O', reflect), (b'P', reflect),
        (b'Q', reflect), (b'R', reflect), (b'S', reflect), (b'T', reflect),
        (b'U', reflect), (b'V', reflect), (b'W', reflect), (b'X', reflect),
        (b'Y', reflect), (b'Z', reflect),
    ],
);

// =============================================================================
// Registry
// =============================================================================

/// The fingerprints `(` can load, looked up by id.
#[derive(Clone, Default)]
pub struct FingerprintRegistry {
    entries: Vec<&'static Fingerprint>,
}

impl FingerprintRegistry {
    /// An empty registry; every `(` reflects.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in set: NULL, ROMA, MODU, BOOL, ORTH, HRTI, REFC.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for f in [&NULL, &ROMA, &MODU, &BOOL, &ORTH, &HRTI, &REFC] {
            registry.register(f);
        }
        registry
    }

    /// Adds a fingerprint, replacing any earlier one with the same id.
    pub fn register(&mut self, fingerprint: &'static Fingerprint) {
        self.entries.retain(|f| f.id != fingerprint.id);
        self.entries.push(fingerprint);
    }

    /// Looks up a fingerprint by id.
    #[must_use]
    pub fn lookup(&self, id: Value) -> Option<&'static Fingerprint> {
        self.entries.iter().copied().find(|f| f.id == id)
    }

    /// Looks up a fingerprint by name.
    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<&'static Fingerprint> {
        self.lookup(fingerprint_id(name))
    }

    /// Registered fingerprints in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Fingerprint> + '_ {
        self.entries.iter().copied()
    }

    /// Number of registered fingerprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FingerprintRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|f| f.name)).finish()
    }
}
