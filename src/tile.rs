use strum::VariantArray;

use crate::side::Side;

/// A quarter-turn rotation applied to a [`Tile`] before placement.
///
/// Rotations are clockwise. `Rotation::VARIANTS` lists all four in the order
/// the solver tries them, so solution ordering is stable.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Rotation {
    /// No rotation.
    R0,
    /// One quarter turn clockwise.
    R90,
    /// Two quarter turns clockwise.
    R180,
    /// Three quarter turns clockwise.
    R270,
}

impl Rotation {
    /// The number of clockwise quarter turns this rotation applies, 0..=3.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }
}

/// One square tile: four [`Side`]s named in clockwise order.
///
/// Tiles are immutable values; rotation produces a new tile.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tile {
    /// The side facing up.
    pub top: Side,
    /// The side facing right.
    pub right: Side,
    /// The side facing down.
    pub bottom: Side,
    /// The side facing left.
    pub left: Side,
}

impl Tile {
    /// Construct a tile from its four sides, given in clockwise order.
    pub const fn new(top: Side, right: Side, bottom: Side, left: Side) -> Self {
        Self { top, right, bottom, left }
    }

    /// The tile rotated 90° clockwise `times` times.
    ///
    /// Rotation has order 4: `rotated(4)` is the identity, and generally
    /// `rotated(times)` equals `rotated(times % 4)`.
    pub fn rotated(self, times: usize) -> Self {
        let mut tile = self;
        for _ in 0..times % 4 {
            tile = Self::new(tile.left, tile.top, tile.right, tile.bottom);
        }

        tile
    }

    /// The tile with `rotation` applied.
    pub fn rotated_by(self, rotation: Rotation) -> Self {
        self.rotated(rotation.quarter_turns())
    }

    /// All four sides in clockwise order from the top.
    pub(crate) fn sides(&self) -> [Side; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}
