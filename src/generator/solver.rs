//! Exhaustive solver over ordered tile triples.
//!
//! A ten-tile puzzle has 10 × 9 × 8 = 720 ordered triples, so brute force is
//! instant and needs no pruning.

use crate::core::{Puzzle, Tile, TileId};
use crate::eval::{evaluate, Evaluation};

/// An ordered triple of tile ids, in evaluation order.
pub type Solution = [TileId; 3];

fn triples(puzzle: &Puzzle) -> impl Iterator<Item = [Tile; 3]> + '_ {
    let tiles: Vec<Tile> = puzzle.tiles().copied().collect();
    let n = tiles.len();

    (0..n).flat_map(move |i| {
        let tiles = tiles.clone();
        (0..n).filter(move |&j| j != i).flat_map(move |j| {
            let tiles = tiles.clone();
            (0..n)
                .filter(move |&k| k != i && k != j)
                .map(move |k| [tiles[i], tiles[j], tiles[k]])
        })
    })
}

fn reaches(triple: &[Tile; 3], target: i64) -> bool {
    let [first, second, third] = triple;
    evaluate(first.value, &[second.step(), third.step()]) == Evaluation::Value(target)
}

/// Every ordered triple that evaluates to the puzzle's target.
#[must_use]
pub fn solutions(puzzle: &Puzzle) -> Vec<Solution> {
    let target = puzzle.target();
    triples(puzzle)
        .filter(|triple| reaches(triple, target))
        .map(|[a, b, c]| [a.id, b.id, c.id])
        .collect()
}

/// The first ordered triple that evaluates to the target, if any.
#[must_use]
pub fn first_solution(puzzle: &Puzzle) -> Option<Solution> {
    let target = puzzle.target();
    triples(puzzle)
        .find(|triple| reaches(triple, target))
        .map(|[a, b, c]| [a.id, b.id, c.id])
}

/// Check if the puzzle has at least one solution.
#[must_use]
pub fn is_solvable(puzzle: &Puzzle) -> bool {
    first_solution(puzzle).is_some()
}
