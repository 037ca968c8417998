use crate::grid::Grid;
use crate::puzzle::Puzzle;
use crate::side::Side;
use crate::tile::Tile;

/// Reasons a builder may become invalid while building.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile side was left at the null figure where a real figure was
    /// intended.
    UnsetSide,
    /// The input does not hold exactly [`Grid::AREA`] tiles.
    TileCount {
        /// How many tiles the builder held instead.
        found: usize,
    },
}

/// Collects the tile set for a [`Puzzle`], checking preconditions as it goes
/// so that malformed input is rejected here rather than discovered deep
/// inside the search.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point.
#[derive(Clone, Default)]
pub struct PuzzleBuilder {
    tiles: Vec<Tile>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl PuzzleBuilder {
    /// Append one tile to the input set. Input order is preserved and fixes
    /// the order solutions are reported in.
    ///
    /// May cause the builder to enter an [`UnsetSide`](BuilderInvalidReason::UnsetSide)
    /// invalid state if any side of `tile` is at the null figure.
    /// If the builder is already in an invalid state, this function does
    /// nothing.
    pub fn add_tile(&mut self, tile: Tile) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if tile.sides().iter().any(Side::is_unset) {
            self.invalid_reasons.push(BuilderInvalidReason::UnsetSide);
            return self;
        }

        self.tiles.push(tile);
        self
    }

    /// Shorthand for repeated calls to [`Self::add_tile`], with the same
    /// conditions.
    pub fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) -> &mut Self {
        for tile in tiles {
            self.add_tile(tile);
        }

        self
    }

    /// Check the validity of this builder, ensuring no
    /// [`BuilderInvalidReason`] condition has arisen so far.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)`
    /// otherwise. The tile count is only checked by [`Self::build`], since it
    /// is not knowable mid-build.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Puzzle`].
    /// If the builder is invalid for any reason, including holding anything
    /// other than exactly [`Grid::AREA`] tiles, a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Puzzle, Vec<BuilderInvalidReason>> {
        let mut reasons = self.invalid_reasons.clone();
        if self.tiles.len() != Grid::AREA {
            reasons.push(BuilderInvalidReason::TileCount { found: self.tiles.len() });
        }

        if !reasons.is_empty() {
            return Err(reasons);
        }

        Ok(Puzzle { tiles: self.tiles.clone() })
    }
}
