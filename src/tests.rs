#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use strum::VariantArray;

    use crate::builder::{BuilderInvalidReason, PuzzleBuilder};
    use crate::grid::{Grid, PlacedTile};
    use crate::puzzle::Puzzle;
    use crate::side::Orientation::{Head, Tail};
    use crate::side::Side;
    use crate::tile::{Rotation, Tile};

    // joins cleanly to unrotated copies of itself on every edge
    fn tessellating_tile() -> Tile {
        Tile::new(
            Side::new(1, Head),
            Side::new(2, Head),
            Side::new(1, Tail),
            Side::new(2, Tail),
        )
    }

    // joins to nothing, unrotated copies of itself included
    fn lone_tile() -> Tile {
        Tile::new(
            Side::new(1, Head),
            Side::new(2, Tail),
            Side::new(3, Head),
            Side::new(4, Tail),
        )
    }

    fn grid_of(tile: Tile, count: usize) -> Grid {
        let mut grid = Grid::default();
        for source in 0..count {
            grid = grid.extended(PlacedTile { tile, source, rotation: Rotation::R0 });
        }

        grid
    }

    // the nine-tile spider puzzle the solver binary ships with
    fn spider_puzzle() -> Puzzle {
        let (tarantula, cellar, johnson, wolf) = (1, 2, 3, 4);

        PuzzleBuilder::default()
            .add_tiles([
                Tile::new(
                    Side::new(wolf, Head),
                    Side::new(tarantula, Tail),
                    Side::new(tarantula, Head),
                    Side::new(johnson, Head),
                ),
                Tile::new(
                    Side::new(cellar, Head),
                    Side::new(tarantula, Head),
                    Side::new(wolf, Head),
                    Side::new(tarantula, Head),
                ),
                Tile::new(
                    Side::new(cellar, Tail),
                    Side::new(johnson, Tail),
                    Side::new(cellar, Head),
                    Side::new(tarantula, Tail),
                ),
                Tile::new(
                    Side::new(tarantula, Tail),
                    Side::new(cellar, Tail),
                    Side::new(tarantula, Head),
                    Side::new(johnson, Head),
                ),
                Tile::new(
                    Side::new(wolf, Tail),
                    Side::new(johnson, Head),
                    Side::new(cellar, Tail),
                    Side::new(cellar, Head),
                ),
                Tile::new(
                    Side::new(cellar, Tail),
                    Side::new(tarantula, Tail),
                    Side::new(wolf, Tail),
                    Side::new(johnson, Tail),
                ),
                Tile::new(
                    Side::new(tarantula, Tail),
                    Side::new(johnson, Tail),
                    Side::new(johnson, Tail),
                    Side::new(wolf, Head),
                ),
                Tile::new(
                    Side::new(cellar, Head),
                    Side::new(johnson, Tail),
                    Side::new(johnson, Head),
                    Side::new(tarantula, Head),
                ),
                Tile::new(
                    Side::new(wolf, Head),
                    Side::new(johnson, Head),
                    Side::new(tarantula, Tail),
                    Side::new(wolf, Tail),
                ),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn head_and_tail_of_one_figure_match() {
        assert!(Side::new(1, Head).matches(&Side::new(1, Tail)));
        assert!(Side::new(1, Tail).matches(&Side::new(1, Head)));
    }

    #[test]
    fn null_figure_never_matches() {
        assert!(!Side::new(0, Head).matches(&Side::new(0, Tail)));
        assert!(!Side::new(0, Head).matches(&Side::new(1, Tail)));
        assert!(!Side::new(1, Head).matches(&Side::new(0, Tail)));
    }

    #[test]
    fn same_half_does_not_match() {
        assert!(!Side::new(1, Head).matches(&Side::new(1, Head)));
    }

    #[test]
    fn different_figures_do_not_match() {
        assert!(!Side::new(1, Head).matches(&Side::new(2, Tail)));
    }

    #[test]
    fn rotation_steps_sides_clockwise() {
        let tile = lone_tile();
        let once = tile.rotated(1);

        assert_eq!(once.top, tile.left);
        assert_eq!(once.right, tile.top);
        assert_eq!(once.bottom, tile.right);
        assert_eq!(once.left, tile.bottom);
    }

    #[test]
    fn rotation_has_order_four() {
        let tile = lone_tile();

        assert_eq!(tile.rotated(0), tile);
        assert_eq!(tile.rotated(4), tile);
        for turns in 0..4 {
            assert_eq!(tile.rotated(turns + 4), tile.rotated(turns));
        }
    }

    #[test]
    fn rotations_cover_all_quarter_turns() {
        assert_eq!(
            Rotation::VARIANTS.iter().map(|r| r.quarter_turns()).collect_vec(),
            vec![0, 1, 2, 3],
        );
    }

    #[test]
    fn no_edges_below_two_tiles() {
        assert!(grid_of(tessellating_tile(), 0).edges().is_empty());
        assert!(grid_of(tessellating_tile(), 1).edges().is_empty());
    }

    #[test]
    fn edge_count_follows_the_fixed_width() {
        // second tile touches the first
        assert_eq!(grid_of(tessellating_tile(), 2).edges().len(), 1);
        // third tile still touches only its left neighbour
        assert_eq!(grid_of(tessellating_tile(), 3).edges().len(), 2);
        // fourth tile starts the second row and touches only the tile above
        assert_eq!(grid_of(tessellating_tile(), 4).edges().len(), 3);
        // full grid: six horizontal and six vertical seams
        assert_eq!(grid_of(tessellating_tile(), 9).edges().len(), 12);
    }

    #[test]
    fn single_tile_grid_is_valid() {
        assert!(grid_of(lone_tile(), 1).is_valid());
    }

    #[test]
    fn tessellating_grid_is_valid_and_complete() {
        let grid = grid_of(tessellating_tile(), 9);

        assert!(grid.is_valid());
        assert!(grid.is_complete());
    }

    #[test]
    fn partial_grid_is_not_complete() {
        let grid = grid_of(tessellating_tile(), 8);

        assert!(grid.is_valid());
        assert!(!grid.is_complete());
    }

    #[test]
    fn mismatched_grid_is_not_valid() {
        let grid = grid_of(lone_tile(), 9);

        assert!(!grid.is_valid());
        assert!(!grid.is_complete());
    }

    #[test]
    fn renders_complete_grid() {
        let row = "  1h    1h    1h  \n2t  2h2t  2h2t  2h\n  1t    1t    1t  \n";

        assert_eq!(format!("{}", grid_of(tessellating_tile(), 9)), row.repeat(3));
    }

    #[test]
    fn renders_unfilled_positions() {
        let empty_row = "  --    --    --  \n--  ----  ----  --\n  --    --    --  \n";

        assert_eq!(
            format!("{}", grid_of(tessellating_tile(), 1)),
            format!(
                "  1h    --    --  \n2t  2h--  ----  --\n  1t    --    --  \n{}{}",
                empty_row, empty_row,
            ),
        );
    }

    #[test]
    fn builder_rejects_unset_sides() {
        let mut builder = PuzzleBuilder::default();
        builder.add_tile(Tile::new(
            Side::default(),
            Side::new(1, Head),
            Side::new(2, Tail),
            Side::new(3, Head),
        ));

        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::UnsetSide]));
        assert!(builder
            .build()
            .unwrap_err()
            .contains(&BuilderInvalidReason::UnsetSide));
    }

    #[test]
    fn builder_rejects_wrong_tile_count() {
        let mut builder = PuzzleBuilder::default();
        builder.add_tiles((0..8).map(|_| tessellating_tile()));

        assert!(builder.is_valid().is_none());
        assert_eq!(
            builder.build().unwrap_err(),
            vec![BuilderInvalidReason::TileCount { found: 8 }],
        );
    }

    #[test]
    fn builder_accepts_the_documented_puzzle() {
        assert_eq!(spider_puzzle().tiles().len(), 9);
    }

    #[test]
    fn incompatible_tiles_yield_no_solutions() {
        // every side across all nine tiles shows a distinct figure, so no
        // placement past the first can ever be admissible
        let puzzle = PuzzleBuilder::default()
            .add_tiles((0..9u8).map(|i| {
                Tile::new(
                    Side::new(4 * i + 1, Head),
                    Side::new(4 * i + 2, Head),
                    Side::new(4 * i + 3, Head),
                    Side::new(4 * i + 4, Head),
                )
            }))
            .build()
            .unwrap();

        assert!(puzzle.solve().is_empty());
    }

    #[test]
    fn nine_tessellating_copies_have_a_solution() {
        // nine identical copies admit 9!·4 distinct complete grids, so ask
        // for a single witness rather than the full enumeration
        let puzzle = PuzzleBuilder::default()
            .add_tiles((0..9).map(|_| tessellating_tile()))
            .build()
            .unwrap();

        let solutions = puzzle.solve_bounded(NonZero::new(1).unwrap());
        assert_eq!(solutions.len(), 1);

        let grid = &solutions[0];
        assert!(grid.is_complete());
        // tiles in input order, rotations tried from R0 up: the first branch
        // explored is the all-unrotated identity placement
        assert_eq!(
            grid.placements().iter().map(|placed| placed.source).collect_vec(),
            (0..9).collect_vec(),
        );
        assert!(grid
            .placements()
            .iter()
            .all(|placed| placed.rotation == Rotation::R0));
    }

    #[test]
    fn solutions_record_identity_and_rotation() {
        let puzzle = spider_puzzle();

        for grid in puzzle.solve() {
            assert!(grid.is_complete());
            assert_eq!(grid.placements().len(), Grid::AREA);

            // each input tile is used exactly once
            let sources = grid
                .placements()
                .iter()
                .map(|placed| placed.source)
                .sorted()
                .collect_vec();
            assert_eq!(sources, (0..9).collect_vec());

            // the recorded (source, rotation) pair reproduces the placed tile
            for placed in grid.placements() {
                assert_eq!(placed.tile, puzzle.tiles()[placed.source].rotated_by(placed.rotation));
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        assert_eq!(spider_puzzle().solve(), spider_puzzle().solve());
    }
}
