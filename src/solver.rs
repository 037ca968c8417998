use std::num::NonZero;

use itertools::Itertools;
use strum::VariantArray;

use crate::grid::{Grid, PlacedTile};
use crate::tile::{Rotation, Tile};

/// One branch of the search: the grid grown so far plus the input tiles not
/// yet placed.
///
/// Remaining tiles are tracked by index into the input list, not by value, so
/// two tiles with equal sides keep distinct identities and each is used
/// exactly once per branch.
#[derive(Clone, Debug)]
struct Solution {
    grid: Grid,
    remaining: Vec<usize>,
}

impl Solution {
    fn exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Every admissible child of this state: each remaining tile, in each of
    /// its four rotations, appended at the next row-major position.
    ///
    /// Candidates whose grid fails validation are dropped here, at every
    /// placement rather than only at full size; a bad placement invalidates
    /// every completion that would build on it. Each child gets fresh grid
    /// and remaining values, sharing nothing with `self` or its siblings.
    fn expansions(&self, tiles: &[Tile]) -> Vec<Solution> {
        let mut children = Vec::new();

        for (slot, &source) in self.remaining.iter().enumerate() {
            let mut rest = self.remaining.clone();
            rest.remove(slot);

            for &rotation in Rotation::VARIANTS {
                let candidate = self.grid.extended(PlacedTile {
                    tile: tiles[source].rotated_by(rotation),
                    source,
                    rotation,
                });

                if candidate.is_valid() {
                    children.push(Solution { grid: candidate, remaining: rest.clone() });
                }
            }
        }

        children
    }
}

/// Exhaustive backtracking enumeration of tile placements, pruning invalid
/// partial grids at every step.
///
/// The worst case is 9!·4⁹ candidate placements; early rejection is what
/// keeps the search tractable on real inputs.
pub(crate) struct GridSolver<'a> {
    tiles: &'a [Tile],
}

impl<'a> From<&'a [Tile]> for GridSolver<'a> {
    fn from(tiles: &'a [Tile]) -> Self {
        Self { tiles }
    }
}

impl GridSolver<'_> {
    fn empty_state(&self) -> Solution {
        Solution {
            grid: Grid::default(),
            remaining: (0..self.tiles.len()).collect_vec(),
        }
    }

    /// Collect every complete, valid grid reachable from the empty grid.
    ///
    /// Tiles are tried in input order and rotations in `Rotation::VARIANTS`
    /// order, so the result is deterministic for a given input.
    pub(crate) fn solve(&self) -> Vec<Grid> {
        self.search(vec![self.empty_state()])
    }

    /// Expand one frontier of equal-size states into the next generation.
    ///
    /// Children which have placed every tile are accepted (validity was
    /// checked at each placement, so a full grid here is always complete);
    /// the rest form the next frontier. An empty frontier terminates the
    /// recursion.
    fn search(&self, frontier: Vec<Solution>) -> Vec<Grid> {
        let mut complete = Vec::new();
        let mut incomplete = Vec::new();

        for solution in &frontier {
            for child in solution.expansions(self.tiles) {
                if child.exhausted() {
                    if child.grid.is_complete() {
                        complete.push(child.grid);
                    }
                } else {
                    incomplete.push(child);
                }
            }
        }

        if !incomplete.is_empty() {
            complete.extend(self.search(incomplete));
        }

        complete
    }

    /// Depth-first variant of [`Self::solve`] which walks the same pruned
    /// tree in the same per-branch order but stops as soon as
    /// `max_solutions` complete grids have been found.
    pub(crate) fn solve_bounded(&self, max_solutions: NonZero<usize>) -> Vec<Grid> {
        let mut found = Vec::new();
        self.search_bounded(&self.empty_state(), max_solutions.get(), &mut found);

        found
    }

    fn search_bounded(&self, solution: &Solution, cap: usize, found: &mut Vec<Grid>) {
        for child in solution.expansions(self.tiles) {
            if found.len() >= cap {
                return;
            }

            if child.exhausted() {
                if child.grid.is_complete() {
                    found.push(child.grid);
                }
            } else {
                self.search_bounded(&child, cap, found);
            }
        }
    }
}
