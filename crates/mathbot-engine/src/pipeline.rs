//! Parse-then-evaluate pipeline and its structured outcome.

use mathbot_eval::EvalError;
use mathbot_types::ParseError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::format::format_number;

/// A failed calculation, tagged with the stage that rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression was empty or only whitespace.
    #[error("missing expression")]
    Empty,

    /// The tokenizer or sequencer rejected the expression.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The postfix sequence could not be reduced to one value.
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// The stable error code of the underlying failure.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "MISSING_EXPRESSION",
            Self::Parse(err) => err.label(),
            Self::Eval(err) => err.label(),
        }
    }

    /// The stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Empty => Stage::Input,
            Self::Parse(_) => Stage::Parse,
            Self::Eval(_) => Stage::Eval,
        }
    }
}

/// Calculate the value of an infix expression.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    if expression.trim().is_empty() {
        debug!("rejected empty expression");
        return Err(CalcError::Empty);
    }

    let result = mathbot_parser::parse(expression)
        .map_err(CalcError::from)
        .and_then(|postfix| {
            trace!(
                postfix = %mathbot_parser::to_rpn_string(&postfix),
                len = postfix.len(),
                "sequenced expression"
            );
            mathbot_eval::evaluate(&postfix).map_err(CalcError::from)
        });

    match &result {
        Ok(value) => debug!(expression, value, "calculated"),
        Err(err) => debug!(expression, code = err.label(), "calculation failed"),
    }
    result
}

/// Pipeline stage names, as they appear in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Input,
    Parse,
    Eval,
}

/// Structured error information for JSON consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeError {
    /// Which stage failed.
    pub stage: Stage,
    /// Stable error code, e.g. `UNCLOSED_PARENTHESES`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Character offset of the offending character (parse errors only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl From<&CalcError> for OutcomeError {
    fn from(err: &CalcError) -> Self {
        let index = match err {
            CalcError::Parse(parse) => Some(parse.index),
            CalcError::Empty | CalcError::Eval(_) => None,
        };
        Self {
            stage: err.stage(),
            code: err.label().to_string(),
            message: err.to_string(),
            index,
        }
    }
}

/// The structured JSON output for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcOutcome {
    pub success: bool,
    /// The raw result. Non-finite results serialize as `null`; see `display`.
    pub value: Option<f64>,
    /// The result formatted for display.
    pub display: Option<String>,
    pub error: Option<OutcomeError>,
}

/// Run [`calculate`] and package the result for serialization.
pub fn calculate_to_outcome(expression: &str) -> CalcOutcome {
    match calculate(expression) {
        Ok(value) => CalcOutcome {
            success: true,
            value: Some(value),
            display: Some(format_number(value)),
            error: None,
        },
        Err(err) => CalcOutcome {
            success: false,
            value: None,
            display: None,
            error: Some(OutcomeError::from(&err)),
        },
    }
}
