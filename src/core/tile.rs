//! Tiles: the selectable operand + operator units of a puzzle.
//!
//! ## Usage
//!
//! ```
//! use number_pyramid::core::{Operator, Tile, TileId};
//!
//! let tile = Tile::new(TileId::new(4), 7, Operator::Mul);
//! assert_eq!(tile.to_string(), "×7");
//! assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Div);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One of the four arithmetic operators a tile can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Exact integer division.
    Div,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// The symbol shown on a tile.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '×',
            Operator::Div => '÷',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    /// Accepts the tile symbols as well as the ASCII spellings `* x /`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Sub),
            "×" | "*" | "x" => Ok(Operator::Mul),
            "÷" | "/" => Ok(Operator::Div),
            other => Err(ParseError::UnknownOperator(other.to_string())),
        }
    }
}

/// Tile identifier, unique within a puzzle.
///
/// Ids are assigned in generation order and survive the display shuffle,
/// so selection always refers to ids, never positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the id as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// An immutable operand/operator pair.
///
/// When a tile starts an evaluated triple its operator is ignored and only
/// the value seeds the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Identifier within the owning puzzle.
    pub id: TileId,
    /// Operand, always at least 1.
    pub value: i64,
    /// Operator applied when this tile is not first in the chain.
    pub operator: Operator,
}

impl Tile {
    /// Create a new tile.
    #[must_use]
    pub const fn new(id: TileId, value: i64, operator: Operator) -> Self {
        Self { id, value, operator }
    }

    /// Whether the operand has two digits.
    #[must_use]
    pub const fn is_double_digit(&self) -> bool {
        self.value >= 10
    }

    /// The `(operator, operand)` step this tile contributes mid-chain.
    #[must_use]
    pub const fn step(&self) -> (Operator, i64) {
        (self.operator, self.value)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operator, self.value)
    }
}
