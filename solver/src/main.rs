use tarantella::Orientation::{Head, Tail};
use tarantella::{FigureId, PuzzleBuilder, Side, Tile};

const TARANTULA: FigureId = 1;
const CELLAR: FigureId = 2;
const JOHNSON: FigureId = 3;
const WOLF: FigureId = 4;

fn main() {
    // the nine spider tiles, in the order they came out of the box
    let puzzle = PuzzleBuilder::default()
        .add_tiles([
            Tile::new(
                Side::new(WOLF, Head),
                Side::new(TARANTULA, Tail),
                Side::new(TARANTULA, Head),
                Side::new(JOHNSON, Head),
            ),
            Tile::new(
                Side::new(CELLAR, Head),
                Side::new(TARANTULA, Head),
                Side::new(WOLF, Head),
                Side::new(TARANTULA, Head),
            ),
            Tile::new(
                Side::new(CELLAR, Tail),
                Side::new(JOHNSON, Tail),
                Side::new(CELLAR, Head),
                Side::new(TARANTULA, Tail),
            ),
            Tile::new(
                Side::new(TARANTULA, Tail),
                Side::new(CELLAR, Tail),
                Side::new(TARANTULA, Head),
                Side::new(JOHNSON, Head),
            ),
            Tile::new(
                Side::new(WOLF, Tail),
                Side::new(JOHNSON, Head),
                Side::new(CELLAR, Tail),
                Side::new(CELLAR, Head),
            ),
            Tile::new(
                Side::new(CELLAR, Tail),
                Side::new(TARANTULA, Tail),
                Side::new(WOLF, Tail),
                Side::new(JOHNSON, Tail),
            ),
            Tile::new(
                Side::new(TARANTULA, Tail),
                Side::new(JOHNSON, Tail),
                Side::new(JOHNSON, Tail),
                Side::new(WOLF, Head),
            ),
            Tile::new(
                Side::new(CELLAR, Head),
                Side::new(JOHNSON, Tail),
                Side::new(JOHNSON, Head),
                Side::new(TARANTULA, Head),
            ),
            Tile::new(
                Side::new(WOLF, Head),
                Side::new(JOHNSON, Head),
                Side::new(TARANTULA, Tail),
                Side::new(WOLF, Tail),
            ),
        ])
        .build()
        .unwrap();

    let solutions = puzzle.solve();
    if solutions.is_empty() {
        println!("no solutions found");
        return;
    }

    for (n, grid) in solutions.iter().enumerate() {
        println!("solution {} of {}:", n + 1, solutions.len());
        println!("{grid}");
    }
}
