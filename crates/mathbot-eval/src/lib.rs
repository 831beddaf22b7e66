//! mathbot evaluator: reduces a postfix token sequence to a number.
//!
//! Consumes the output of `mathbot_parser::parse` in a single left-to-right
//! pass over a stack of doubles.

mod error;
mod evaluator;

pub use error::{EvalError, EvalResult};
pub use evaluator::{evaluate, Evaluator};
