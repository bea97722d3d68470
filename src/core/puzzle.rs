//! A generated puzzle: ten tiles in display order and a target.
//!
//! Tiles live in an `im::Vector` so that session snapshots holding a puzzle
//! clone in O(1).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};
use crate::error::PuzzleError;

/// Number of tiles in every puzzle.
pub const TILE_COUNT: usize = 10;

/// Number of tiles the player picks per round.
pub const SELECTION_SIZE: usize = 3;

/// Row lengths of the pyramid layout, top to bottom.
pub const PYRAMID_ROWS: [usize; 4] = [1, 2, 3, 4];

/// One round's tiles and target.
///
/// Deserializing goes through `from_tiles`, so a stored `verified` flag is
/// recomputed rather than trusted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleRecord")]
pub struct Puzzle {
    tiles: Vector<Tile>,
    target: i64,
    verified: bool,
}

/// Unchecked wire form of a `Puzzle`. A serialized `verified` field is
/// ignored.
#[derive(Deserialize)]
struct PuzzleRecord {
    tiles: Vec<Tile>,
    target: i64,
}

impl TryFrom<PuzzleRecord> for Puzzle {
    type Error = PuzzleError;

    fn try_from(record: PuzzleRecord) -> Result<Self, Self::Error> {
        Self::from_tiles(&record.tiles, record.target)
    }
}

impl Puzzle {
    /// Build a puzzle from already-checked parts.
    pub(crate) fn from_parts(tiles: Vector<Tile>, target: i64, verified: bool) -> Self {
        Self {
            tiles,
            target,
            verified,
        }
    }

    /// Build a puzzle from externally supplied tiles.
    ///
    /// Checks the tile count, that ids are exactly `0..TILE_COUNT`, and that
    /// every value is at least 1. Solvability is checked too and recorded in
    /// `is_verified()`; an unsolvable puzzle is still accepted.
    pub fn from_tiles(tiles: &[Tile], target: i64) -> Result<Self, PuzzleError> {
        if tiles.len() != TILE_COUNT {
            return Err(PuzzleError::WrongTileCount {
                expected: TILE_COUNT,
                got: tiles.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for tile in tiles {
            if tile.id.index() >= TILE_COUNT {
                return Err(PuzzleError::TileIdOutOfRange {
                    id: tile.id,
                    count: TILE_COUNT,
                });
            }
            if !seen.insert(tile.id) {
                return Err(PuzzleError::DuplicateTile(tile.id));
            }
            if tile.value < 1 {
                return Err(PuzzleError::NonPositiveValue {
                    id: tile.id,
                    value: tile.value,
                });
            }
        }

        let mut puzzle = Self::from_parts(tiles.iter().copied().collect(), target, false);
        puzzle.verified = crate::generator::solver::first_solution(&puzzle).is_some();
        Ok(puzzle)
    }

    /// The number the player must reach.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Whether a solution triple was confirmed at construction time.
    ///
    /// Only false for the best-effort output of an exhausted generator or
    /// for an unsolvable `from_tiles` puzzle.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Tiles in display order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the puzzle has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Check if a tile id belongs to this puzzle.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tile(id).is_some()
    }

    /// Split the display order into pyramid rows of 1, 2, 3 and 4 tiles.
    #[must_use]
    pub fn pyramid_rows(&self) -> Vec<Vec<Tile>> {
        let mut tiles = self.tiles.iter().copied();
        PYRAMID_ROWS
            .iter()
            .map(|&len| tiles.by_ref().take(len).collect())
            .filter(|row: &Vec<Tile>| !row.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn sample_tiles() -> Vec<Tile> {
        (0..10u8)
            .map(|i| Tile::new(TileId::new(i), i64::from(i) + 1, Operator::Add))
            .collect()
    }

    #[test]
    fn test_from_tiles_valid() {
        // 1 +2 +3 = 6
        let puzzle = Puzzle::from_tiles(&sample_tiles(), 6).unwrap();
        assert_eq!(puzzle.len(), TILE_COUNT);
        assert_eq!(puzzle.target(), 6);
        assert!(puzzle.is_verified());
        assert_eq!(puzzle.tile(TileId::new(4)).map(|t| t.value), Some(5));
        assert!(!puzzle.contains(TileId::new(10)));
    }

    #[test]
    fn test_from_tiles_unsolvable_is_unverified() {
        // Largest reachable sum is 10 + 9 + 8 = 27
        let puzzle = Puzzle::from_tiles(&sample_tiles(), 1000).unwrap();
        assert!(!puzzle.is_verified());
    }

    #[test]
    fn test_from_tiles_wrong_count() {
        let tiles = sample_tiles();
        assert_eq!(
            Puzzle::from_tiles(&tiles[..9], 6),
            Err(PuzzleError::WrongTileCount { expected: 10, got: 9 })
        );
    }

    #[test]
    fn test_from_tiles_duplicate_id() {
        let mut tiles = sample_tiles();
        tiles[9].id = TileId::new(0);
        assert_eq!(
            Puzzle::from_tiles(&tiles, 6),
            Err(PuzzleError::DuplicateTile(TileId::new(0)))
        );
    }

    #[test]
    fn test_from_tiles_out_of_range_id() {
        let mut tiles = sample_tiles();
        tiles[3].id = TileId::new(12);
        assert!(matches!(
            Puzzle::from_tiles(&tiles, 6),
            Err(PuzzleError::TileIdOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_tiles_non_positive_value() {
        let mut tiles = sample_tiles();
        tiles[2].value = 0;
        assert_eq!(
            Puzzle::from_tiles(&tiles, 6),
            Err(PuzzleError::NonPositiveValue {
                id: TileId::new(2),
                value: 0
            })
        );
    }

    #[test]
    fn test_pyramid_rows() {
        let puzzle = Puzzle::from_tiles(&sample_tiles(), 6).unwrap();
        let rows = puzzle.pyramid_rows();

        let lengths: Vec<_> = rows.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![1, 2, 3, 4]);
        assert_eq!(rows[0][0].id, TileId::new(0));
        assert_eq!(rows[3][3].id, TileId::new(9));
    }

    #[test]
    fn test_serde_roundtrip() {
        let puzzle = Puzzle::from_tiles(&sample_tiles(), 6).unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(serde_json::from_str::<Puzzle>(&json).unwrap(), puzzle);
    }

    #[test]
    fn test_deserialize_rejects_bad_tiles() {
        let puzzle = Puzzle::from_tiles(&sample_tiles(), 6).unwrap();
        let valid = serde_json::to_value(&puzzle).unwrap();

        let mut repeated = valid.clone();
        let first = repeated["tiles"][0].clone();
        for tile in repeated["tiles"].as_array_mut().unwrap() {
            *tile = first.clone();
        }
        assert!(serde_json::from_value::<Puzzle>(repeated).is_err());

        let mut negative = valid.clone();
        negative["tiles"][4]["value"] = serde_json::json!(-5);
        assert!(serde_json::from_value::<Puzzle>(negative).is_err());

        let mut short = valid;
        short["tiles"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<Puzzle>(short).is_err());
    }

    #[test]
    fn test_deserialize_recomputes_verified() {
        let puzzle = Puzzle::from_tiles(&sample_tiles(), 99_999).unwrap();
        let mut json = serde_json::to_value(&puzzle).unwrap();
        json["verified"] = serde_json::json!(true);

        let restored: Puzzle = serde_json::from_value(json).unwrap();
        assert!(!restored.is_verified());
    }

    #[test]
    fn test_clone_shares_tiles() {
        let puzzle = Puzzle::from_tiles(&sample_tiles(), 6).unwrap();
        let cloned = puzzle.clone();
        assert_eq!(puzzle, cloned);
    }
}
