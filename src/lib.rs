#![warn(missing_docs)]

//! # `tarantella`
//!
//! A solver for nine-tile edge-matching puzzles of the "crazy spiders" kind:
//! each square tile shows half a figure on each of its four sides, and the
//! goal is to arrange all nine tiles into a 3×3 grid so that every shared
//! edge joins the head of a figure to the tail of the same figure.
//! Begin by feeding the nine tiles to a [`PuzzleBuilder`]; [`build()`](PuzzleBuilder::build)
//! checks the input preconditions and yields a [`Puzzle`], and
//! [`solve()`](Puzzle::solve) enumerates every completed [`Grid`].
//!
//! # Internals
//! The search is a plain backtracking enumeration. A frontier of partial
//! grids is grown one placement at a time: each not-yet-placed tile is tried
//! at the next row-major position in all four rotations, and any placement
//! whose touching sides fail to match is pruned immediately, cutting off the
//! entire subtree of arrangements that would have built on it.
//! All search state is persistent values, so expanding one branch never
//! disturbs another. Finding no solution is an ordinary empty result.

pub use builder::{BuilderInvalidReason, PuzzleBuilder};
pub use grid::{Grid, PlacedTile};
pub use puzzle::Puzzle;
pub use side::{FigureId, Orientation, Side, NO_FIGURE};
pub use tile::{Rotation, Tile};

pub(crate) mod builder;
pub(crate) mod grid;
pub(crate) mod puzzle;
pub(crate) mod side;
pub(crate) mod solver;
mod tests;
pub(crate) mod tile;
