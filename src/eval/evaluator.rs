//! Chained left-to-right evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{Operator, Tile};

/// Result of evaluating a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// The chain produced a whole number.
    Value(i64),
    /// Some step divided by zero or inexactly.
    Undefined,
}

impl Evaluation {
    /// The value, if defined.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Evaluation::Value(v) => Some(v),
            Evaluation::Undefined => None,
        }
    }

    /// Check if the chain was defined.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        matches!(self, Evaluation::Value(_))
    }
}

impl From<Option<i64>> for Evaluation {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Evaluation::Undefined, Evaluation::Value)
    }
}

/// Apply a single step `lhs op rhs`.
///
/// Division is defined only for a nonzero divisor that divides `lhs`
/// exactly. Overflow also yields `None`.
#[must_use]
pub fn apply(lhs: i64, op: Operator, rhs: i64) -> Option<i64> {
    match op {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Sub => lhs.checked_sub(rhs),
        Operator::Mul => lhs.checked_mul(rhs),
        Operator::Div => {
            if rhs == 0 || lhs.checked_rem(rhs)? != 0 {
                None
            } else {
                lhs.checked_div(rhs)
            }
        }
    }
}

/// Evaluate `seed op1 v1 op2 v2 ...` strictly left to right.
///
/// Stops at the first undefined step.
#[must_use]
pub fn evaluate(seed: i64, steps: &[(Operator, i64)]) -> Evaluation {
    steps
        .iter()
        .try_fold(seed, |acc, &(op, rhs)| apply(acc, op, rhs))
        .into()
}

/// Evaluate tiles in selection order.
///
/// The first tile's operator is ignored. An empty selection is undefined.
#[must_use]
pub fn evaluate_tiles(tiles: &[Tile]) -> Evaluation {
    match tiles.split_first() {
        Some((first, rest)) => {
            let steps: Vec<_> = rest.iter().map(Tile::step).collect();
            evaluate(first.value, &steps)
        }
        None => Evaluation::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    #[test]
    fn test_left_to_right_not_precedence() {
        assert_eq!(
            evaluate(5, &[(Operator::Add, 3), (Operator::Mul, 2)]),
            Evaluation::Value(16)
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(6, &[(Operator::Div, 0)]), Evaluation::Undefined);
    }

    #[test]
    fn test_inexact_division() {
        assert_eq!(evaluate(7, &[(Operator::Div, 2)]), Evaluation::Undefined);
    }

    #[test]
    fn test_exact_division() {
        assert_eq!(evaluate(8, &[(Operator::Div, 2)]), Evaluation::Value(4));
    }

    #[test]
    fn test_negative_intermediate() {
        // 3 - 9 = -6, -6 ÷ 3 = -2
        assert_eq!(
            evaluate(3, &[(Operator::Sub, 9), (Operator::Div, 3)]),
            Evaluation::Value(-2)
        );
    }

    #[test]
    fn test_short_circuit() {
        // 7 ÷ 2 fails; the later ×2 would make it look exact
        assert_eq!(
            evaluate(7, &[(Operator::Div, 2), (Operator::Mul, 2)]),
            Evaluation::Undefined
        );
    }

    #[test]
    fn test_no_steps_returns_seed() {
        assert_eq!(evaluate(9, &[]), Evaluation::Value(9));
    }

    #[test]
    fn test_overflow_is_undefined() {
        assert_eq!(apply(i64::MAX, Operator::Add, 1), None);
        assert_eq!(apply(i64::MIN, Operator::Div, -1), None);
        assert_eq!(evaluate(i64::MAX, &[(Operator::Mul, 2)]), Evaluation::Undefined);
    }

    #[test]
    fn test_evaluate_tiles_ignores_first_operator() {
        let tiles = [
            Tile::new(TileId::new(0), 5, Operator::Div),
            Tile::new(TileId::new(1), 3, Operator::Add),
            Tile::new(TileId::new(2), 2, Operator::Mul),
        ];
        assert_eq!(evaluate_tiles(&tiles), Evaluation::Value(16));
        assert_eq!(evaluate_tiles(&[]), Evaluation::Undefined);
    }

    #[test]
    fn test_evaluation_accessors() {
        assert_eq!(Evaluation::Value(3).value(), Some(3));
        assert!(!Evaluation::Undefined.is_defined());
        assert_eq!(Evaluation::from(None), Evaluation::Undefined);
    }
}
