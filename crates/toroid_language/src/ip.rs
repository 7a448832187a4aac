//! Instruction pointers.

use std::fmt;
use std::time::Instant;

use toroid_foundation::{StackStack, Vector};

use crate::fingerprint::Fingerprint;

/// Identifier of an instruction pointer, unique for the lifetime of a run.
pub type IpId = u64;

/// An instruction pointer.
///
/// The movement state (`position`, `delta`, `storage_offset`) and the
/// stack-stack are plain public fields; identity and lifecycle are read-only
/// outside this crate.
#[derive(Clone)]
pub struct Ip {
    id: IpId,
    parent: Option<IpId>,
    /// Current cell.
    pub position: Vector,
    /// Velocity.
    pub delta: Vector,
    /// Added to every `g`/`p` style address.
    pub storage_offset: Vector,
    /// The stack-of-stacks.
    pub stacks: StackStack,
    /// True while cells are being pushed rather than executed.
    pub string_mode: bool,
    active: bool,
    /// Loaded fingerprints, oldest first.
    fingerprints: Vec<&'static Fingerprint>,
    /// HRTI timer mark.
    mark: Option<Instant>,
}

impl Ip {
    /// Creates a primary IP at the origin heading east with one empty stack.
    #[must_use]
    pub fn new(id: IpId) -> Self {
        Self {
            id,
            parent: None,
            position: Vector::ZERO,
            delta: Vector::EAST,
            storage_offset: Vector::ZERO,
            stacks: StackStack::new(),
            string_mode: false,
            active: true,
            fingerprints: Vec::new(),
            mark: None,
        }
    }

    /// Places the IP at `position`.
    #[must_use]
    pub fn at(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    /// Sets the IP heading.
    #[must_use]
    pub fn heading(mut self, delta: Vector) -> Self {
        self.delta = delta;
        self
    }

    /// This IP's id.
    #[must_use]
    pub fn id(&self) -> IpId {
        self.id
    }

    /// The id of the IP this one was forked from.
    #[must_use]
    pub fn parent(&self) -> Option<IpId> {
        self.parent
    }

    /// Returns true until the IP stops.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stops the IP. It stays in the run list but never executes again.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Reverses the delta in place.
    pub fn reflect(&mut self) {
        self.delta = self.delta.reversed();
    }

    /// Creates a child IP: deep copies of the stack-stack and fingerprint
    /// list, a truly reversed delta, and the given fresh id.
    ///
    /// The child starts on the parent's cell; the caller moves it.
    #[must_use]
    pub fn fork(&self, child_id: IpId) -> Self {
        Self {
            id: child_id,
            parent: Some(self.id),
            delta: self.delta.reversed(),
            mark: None,
            ..self.clone()
        }
    }

    /// Loaded fingerprints, most recently loaded first.
    pub fn fingerprints(&self) -> impl Iterator<Item = &'static Fingerprint> + '_ {
        self.fingerprints.iter().rev().copied()
    }

    /// Pushes a fingerprint onto the loaded list.
    pub fn load_fingerprint(&mut self, fingerprint: &'static Fingerprint) {
        self.fingerprints.push(fingerprint);
    }

    /// Removes the most recently loaded occurrence of a fingerprint id.
    ///
    /// Returns false if no fingerprint with that id is loaded.
    pub fn unload_fingerprint(&mut self, id: i32) -> bool {
        match self.fingerprints.iter().rposition(|f| f.id == id) {
            Some(index) => {
                self.fingerprints.remove(index);
                true
            }
            None => false,
        }
    }

    /// Resolves letter index `0..26` through the loaded fingerprints.
    #[must_use]
    pub fn letter(&self, index: u8) -> Option<(&'static Fingerprint, crate::fingerprint::LetterFn)> {
        self.fingerprints()
            .find_map(|f| f.letter(index).map(|op| (f, op)))
    }

    pub(crate) fn mark(&self) -> Option<Instant> {
        self.mark
    }

    pub(crate) fn set_mark(&mut self, mark: Option<Instant>) {
        self.mark = mark;
    }
}

impl fmt::Debug for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ip")
            .field("id", &self.id)
            .field("parent", &self.parent)
            .field("position", &self.position)
            .field("delta", &self.delta)
            .field("storage_offset", &self.storage_offset)
            .field("stacks", &self.stacks)
            .field("string_mode", &self.string_mode)
            .field("active", &self.active)
            .field(
                "fingerprints",
                &self.fingerprints().map(|f| f.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip#{} at {} heading {}{}",
            self.id,
            self.position,
            self.delta,
            if self.active { "" } else { " (stopped)" }
        )
    }
}
