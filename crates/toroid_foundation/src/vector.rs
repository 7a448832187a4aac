//! Two-dimensional integer vectors.
//!
//! A [`Vector`] is used for positions, deltas (velocities), and storage
//! offsets. The y axis grows downward, so [`Vector::SOUTH`] is `(0, 1)`.
//! Arithmetic wraps at the edges of the `i32` range, which keeps the
//! logically infinite space closed under movement.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::value::Value;

/// A 2D integer vector.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Horizontal component (grows east).
    pub x: Value,
    /// Vertical component (grows south).
    pub y: Value,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0, 0);
    /// Unit delta pointing east.
    pub const EAST: Self = Self::new(1, 0);
    /// Unit delta pointing west.
    pub const WEST: Self = Self::new(-1, 0);
    /// Unit delta pointing north.
    pub const NORTH: Self = Self::new(0, -1);
    /// Unit delta pointing south.
    pub const SOUTH: Self = Self::new(0, 1);
    /// The four cardinal deltas, clockwise from east.
    pub const CARDINALS: [Self; 4] = [Self::EAST, Self::SOUTH, Self::WEST, Self::NORTH];

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: Value, y: Value) -> Self {
        Self { x, y }
    }

    /// Returns the vector pointing the opposite way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }

    /// Rotates 90 degrees counter-clockwise (as seen on screen).
    #[must_use]
    pub const fn turn_left(self) -> Self {
        Self::new(self.y, self.x.wrapping_neg())
    }

    /// Rotates 90 degrees clockwise (as seen on screen).
    #[must_use]
    pub const fn turn_right(self) -> Self {
        Self::new(self.y.wrapping_neg(), self.x)
    }

    /// Returns true for the four cardinal unit vectors.
    #[must_use]
    pub const fn is_cardinal(self) -> bool {
        matches!((self.x, self.y), (1 | -1, 0) | (0, 1 | -1))
    }

    /// Returns true if both components are zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.reversed()
    }
}

impl Mul<Value> for Vector {
    type Output = Self;

    fn mul(self, rhs: Value) -> Self {
        Self::new(self.x.wrapping_mul(rhs), self.y.wrapping_mul(rhs))
    }
}

impl From<(Value, Value)> for Vector {
    fn from((x, y): (Value, Value)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_negate() {
        let a = Vector::new(3, -2);
        let b = Vector::new(-1, 5);
        assert_eq!(a + b, Vector::new(2, 3));
        assert_eq!(a - b, Vector::new(4, -7));
        assert_eq!(-a, Vector::new(-3, 2));
    }

    #[test]
    fn turning_cycles_through_cardinals() {
        assert_eq!(Vector::EAST.turn_left(), Vector::NORTH);
        assert_eq!(Vector::NORTH.turn_left(), Vector::WEST);
        assert_eq!(Vector::EAST.turn_right(), Vector::SOUTH);
        assert_eq!(Vector::SOUTH.turn_right(), Vector::WEST);
    }

    #[test]
    fn cardinal_detection() {
        for d in Vector::CARDINALS {
            assert!(d.is_cardinal());
        }
        assert!(!Vector::new(1, 1).is_cardinal());
        assert!(!Vector::ZERO.is_cardinal());
        assert!(!Vector::new(2, 0).is_cardinal());
    }

    #[test]
    fn arithmetic_wraps_at_the_edge() {
        let edge = Vector::new(i32::MAX, 0);
        assert_eq!(edge + Vector::EAST, Vector::new(i32::MIN, 0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reverse_is_an_involution(x in any::<i32>(), y in any::<i32>()) {
            let v = Vector::new(x, y);
            prop_assert_eq!(v.reversed().reversed(), v);
        }

        #[test]
        fn four_turns_are_identity(x in any::<i32>(), y in any::<i32>()) {
            let v = Vector::new(x, y);
            prop_assert_eq!(v.turn_left().turn_left().turn_left().turn_left(), v);
            prop_assert_eq!(v.turn_left().turn_right(), v);
        }

        #[test]
        fn add_then_sub_round_trips(ax in any::<i32>(), ay in any::<i32>(), bx in any::<i32>(), by in any::<i32>()) {
            let a = Vector::new(ax, ay);
            let b = Vector::new(bx, by);
            prop_assert_eq!((a + b) - b, a);
        }
    }
}
