use std::fmt::{Display, Formatter};

use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::side::Side;
use crate::tile::{Rotation, Tile};

/// A pair of sides touching between two adjacent grid positions.
///
/// The matching predicate is symmetric, so the pair carries no order.
pub(crate) type Edge = UnorderedPair<Side>;

/// A tile committed to a grid position.
///
/// Besides the rotated tile value itself, this remembers where the tile came
/// from and how it was turned, which is all a renderer or a physical
/// assembler needs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PlacedTile {
    /// The tile as placed, rotation already applied.
    pub tile: Tile,
    /// Index of this tile in the puzzle's input tile list.
    pub source: usize,
    /// The rotation that was applied before placement.
    pub rotation: Rotation,
}

/// A partial or complete placement of tiles, row-major, into a fixed
/// 3×3 frame.
///
/// Grids are persistent values: [`extended`](Self::extended) returns a new,
/// independent grid and never touches the original, so sibling search
/// branches can grow from a common parent without observing each other.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Grid {
    placed: Vec<PlacedTile>,
}

impl Grid {
    /// Tiles per row. Fixed; never derived from the current length, since a
    /// partially filled grid has a non-square length.
    pub const WIDTH: usize = 3;
    /// Tiles in a complete grid.
    pub const AREA: usize = Self::WIDTH * Self::WIDTH;

    /// How many tiles have been placed so far.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Whether no tiles have been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// The placements made so far, in row-major order.
    pub fn placements(&self) -> &[PlacedTile] {
        &self.placed
    }

    /// A new grid equal to `self` with `placement` appended at the next
    /// row-major position. `self` is untouched.
    pub(crate) fn extended(&self, placement: PlacedTile) -> Self {
        let mut placed = Vec::with_capacity(self.placed.len() + 1);
        placed.extend_from_slice(&self.placed);
        placed.push(placement);

        Self { placed }
    }

    /// Every pair of sides currently touching: each placed tile's left side
    /// against its left neighbour's right, and its top side against the
    /// bottom of the tile above. Positions not yet filled contribute nothing,
    /// so this never reads past the current length. Empty for grids of zero
    /// or one tile.
    pub(crate) fn edges(&self) -> Vec<Edge> {
        if self.placed.len() <= 1 {
            return Vec::new();
        }

        let mut edges = Vec::new();
        for (i, placed) in self.placed.iter().enumerate() {
            // not in the first column: touches the tile to its left
            if i % Self::WIDTH != 0 {
                edges.push(UnorderedPair(self.placed[i - 1].tile.right, placed.tile.left));
            }
            // not in the first row: touches the tile above
            if i >= Self::WIDTH {
                edges.push(UnorderedPair(self.placed[i - Self::WIDTH].tile.bottom, placed.tile.top));
            }
        }

        edges
    }

    /// Whether every touching pair of sides matches. Vacuously true for grids
    /// of zero or one tile.
    pub fn is_valid(&self) -> bool {
        self.edges().into_iter().all(|UnorderedPair(a, b)| a.matches(&b))
    }

    /// Whether this grid is an accepted solution: all nine positions filled
    /// and every touching pair of sides matching.
    pub fn is_complete(&self) -> bool {
        self.placed.len() == Self::AREA && self.is_valid()
    }

    /// Freeze into a full-frame array for rendering, with `None` at positions
    /// not yet filled.
    fn frozen(&self) -> Array2<Option<PlacedTile>> {
        Array2::from_shape_fn((Self::WIDTH, Self::WIDTH), |(row, col)| {
            self.placed.get(row * Self::WIDTH + col).copied()
        })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let frozen = self.frozen();

        for row in frozen.rows() {
            for cell in row.iter() {
                match cell {
                    Some(placed) => write!(f, "  {}  ", placed.tile.top)?,
                    None => write!(f, "  --  ")?,
                }
            }
            writeln!(f)?;

            for cell in row.iter() {
                match cell {
                    Some(placed) => write!(f, "{}  {}", placed.tile.left, placed.tile.right)?,
                    None => write!(f, "--  --")?,
                }
            }
            writeln!(f)?;

            for cell in row.iter() {
                match cell {
                    Some(placed) => write!(f, "  {}  ", placed.tile.bottom)?,
                    None => write!(f, "  --  ")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
