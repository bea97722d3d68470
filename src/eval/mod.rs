//! Evaluator for chained tile arithmetic.
//!
//! Operators are applied strictly left to right, ignoring precedence. Only
//! exact whole-number division counts; anything else makes the whole chain
//! `Undefined`.
//!
//! ```
//! use number_pyramid::core::Operator;
//! use number_pyramid::eval::{evaluate, Evaluation};
//!
//! let result = evaluate(5, &[(Operator::Add, 3), (Operator::Mul, 2)]);
//! assert_eq!(result, Evaluation::Value(16));
//!
//! assert_eq!(evaluate(7, &[(Operator::Div, 2)]), Evaluation::Undefined);
//! ```

mod evaluator;

pub use evaluator::{apply, evaluate, evaluate_tiles, Evaluation};
