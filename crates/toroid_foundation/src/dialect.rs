//! Language dialects.

use std::fmt;

/// Which Funge dialect a run follows.
///
/// The dialect changes addressing (a fixed 80x25 torus versus Lahey-space
/// wrapping over the written bounds) and which instructions exist. It never
/// changes how shared instructions behave.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// Befunge-93 compatibility: fixed board, no Funge-98 instructions.
    Befunge93,
    /// Funge-98 (two-dimensional, concurrent).
    #[default]
    Funge98,
}

impl Dialect {
    /// Returns true for the Funge-98 dialect.
    #[must_use]
    pub const fn is_funge98(self) -> bool {
        matches!(self, Self::Funge98)
    }

    /// Returns true if an instruction introduced in `since` exists in this dialect.
    #[must_use]
    pub const fn supports(self, since: Dialect) -> bool {
        match since {
            Self::Befunge93 => true,
            Self::Funge98 => self.is_funge98(),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Befunge93 => write!(f, "befunge-93"),
            Self::Funge98 => write!(f, "funge-98"),
        }
    }
}
