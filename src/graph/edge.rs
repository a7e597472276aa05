//! Board sides and the 3-bit edge mask.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// One of the three sides of the triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All three sides in bit order.
    pub const ALL: [Side; 3] = [Side::Right, Side::Bottom, Side::Left];

    /// The mask with only this side's bit set.
    #[must_use]
    pub const fn mask(self) -> EdgeMask {
        match self {
            Side::Right => EdgeMask::RIGHT,
            Side::Bottom => EdgeMask::BOTTOM,
            Side::Left => EdgeMask::LEFT,
        }
    }
}

/// Set of board sides a cell or group touches.
///
/// Bit 0 is the right side, bit 1 the bottom, bit 2 the left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeMask(u8);

impl EdgeMask {
    pub const NONE: EdgeMask = EdgeMask(0b000);
    pub const RIGHT: EdgeMask = EdgeMask(0b001);
    pub const BOTTOM: EdgeMask = EdgeMask(0b010);
    pub const LEFT: EdgeMask = EdgeMask(0b100);
    /// All three sides: a winning group.
    pub const ALL: EdgeMask = EdgeMask(0b111);

    /// Build a mask from raw bits. Bits above the third are dropped.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Raw bit value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, side: Side) -> bool {
        self.0 & side.mask().0 != 0
    }

    /// True when every side is touched.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == Self::ALL.0
    }

    /// True when `self` has every bit of `other`.
    #[must_use]
    pub const fn is_superset(self, other: EdgeMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of sides touched.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for EdgeMask {
    type Output = EdgeMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        EdgeMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<Side> for EdgeMask {
    fn from(side: Side) -> Self {
        side.mask()
    }
}

impl std::fmt::Display for EdgeMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_masks_are_distinct_bits() {
        let combined = Side::ALL
            .iter()
            .fold(EdgeMask::NONE, |acc, &side| acc | side.mask());

        assert_eq!(combined, EdgeMask::ALL);
        assert_eq!(EdgeMask::RIGHT.bits(), 0b001);
        assert_eq!(EdgeMask::BOTTOM.bits(), 0b010);
        assert_eq!(EdgeMask::LEFT.bits(), 0b100);
    }

    #[test]
    fn test_contains_and_count() {
        let corner = EdgeMask::RIGHT | EdgeMask::LEFT;

        assert!(corner.contains(Side::Right));
        assert!(corner.contains(Side::Left));
        assert!(!corner.contains(Side::Bottom));
        assert_eq!(corner.count(), 2);
        assert!(!corner.is_complete());
    }

    #[test]
    fn test_or_assign_completes() {
        let mut mask = EdgeMask::BOTTOM;
        mask |= EdgeMask::RIGHT | EdgeMask::LEFT;

        assert!(mask.is_complete());
        assert!(mask.is_superset(EdgeMask::BOTTOM));
        assert_eq!(format!("{}", mask), "111");
    }

    #[test]
    fn test_from_bits_truncates() {
        assert_eq!(EdgeMask::from_bits(0b1111_1010), EdgeMask::from_bits(0b010));
        assert!(EdgeMask::default().is_empty());
    }
}
