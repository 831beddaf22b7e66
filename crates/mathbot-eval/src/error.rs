//! Evaluation error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reducing a postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvalError {
    /// The stack held a number of values other than one at the end.
    #[error("operator missing between operands")]
    MultipleResults,

    /// An operator or function found too few values on the stack.
    #[error("operand missing")]
    MissingOperand,

    /// A token that has no meaning in a postfix sequence.
    #[error("invalid operator")]
    InvalidOperator,
}

impl EvalError {
    /// Every variant, in declaration order.
    pub const ALL: [EvalError; 3] = [
        Self::MultipleResults,
        Self::MissingOperand,
        Self::InvalidOperator,
    ];

    /// The stable error code shown to users (e.g. `MISSING_OPERAND`).
    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleResults => "MULTIPLE_RESULTS",
            Self::MissingOperand => "MISSING_OPERAND",
            Self::InvalidOperator => "INVALID_OPERATOR",
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
