use std::num::NonZero;

use crate::grid::Grid;
use crate::solver::GridSolver;
use crate::tile::Tile;

/// A well-formed puzzle instance: exactly nine tiles, every side set.
///
/// Build one with a [`PuzzleBuilder`](crate::PuzzleBuilder); construction is
/// where preconditions are enforced, so a `Puzzle` in hand is always
/// searchable. Finding no solution is a normal, empty result, never an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    pub(crate) tiles: Vec<Tile>,
}

impl Puzzle {
    /// The input tiles, in the order they were added to the builder.
    ///
    /// [`PlacedTile::source`](crate::PlacedTile) indexes into this slice.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Enumerate every complete, valid [`Grid`], deferring to a
    /// [`GridSolver`]. The result is empty iff the puzzle has no solution.
    ///
    /// Inputs with many interchangeable tiles can have an enormous number of
    /// distinct solutions; use [`Self::solve_bounded`] when only a few are
    /// wanted.
    pub fn solve(&self) -> Vec<Grid> {
        GridSolver::from(self.tiles.as_slice()).solve()
    }

    /// Like [`Self::solve`], but stops as soon as `max_solutions` complete
    /// grids have been found.
    pub fn solve_bounded(&self, max_solutions: NonZero<usize>) -> Vec<Grid> {
        GridSolver::from(self.tiles.as_slice()).solve_bounded(max_solutions)
    }
}
