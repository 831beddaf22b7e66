//! Reply formatting: numeric results and failure reports.

use mathbot_eval::EvalError;
use mathbot_types::{Caret, ParseError};

/// Largest magnitude printed without decimals. Beyond this an `f64` is not
/// guaranteed to convert to an `i64` exactly.
const WHOLE_NUMBER_LIMIT: f64 = 9_223_372_036_854_775_807.0;

/// Options controlling how failure reports are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Highlight the caret with ANSI bold red.
    pub color: bool,
}

/// Format a result for display.
///
/// Whole numbers print without decimals (`14`); everything else prints
/// with six decimals (`0.500000`, `inf`, `NaN`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < WHOLE_NUMBER_LIMIT {
        format!("{value:.0}")
    } else {
        format!("{value:.6}")
    }
}

/// Render a parse failure with a caret under the offending character.
///
/// ```text
/// Failed to parse your expression. Error code: UNCLOSED_PARENTHESES
/// (1 + 2
/// ^ Here
/// ```
///
/// For multi-line input only the line holding the offending character is
/// shown, with the caret placed by column.
pub fn render_parse_failure(expression: &str, err: &ParseError, options: &ReportOptions) -> String {
    let (line, column) = locate(expression, err.index);
    format!(
        "Failed to parse your expression. Error code: {}\n{}\n{} Here",
        err.label(),
        line,
        Caret::new(column).colored(options.color)
    )
}

/// Render an evaluation failure.
pub fn render_eval_failure(err: &EvalError) -> String {
    format!(
        "Failed to evaluate your expression. Error code: {}",
        err.label()
    )
}

/// Find the line containing character `index` and the column within it.
fn locate(expression: &str, index: usize) -> (&str, usize) {
    let mut line_start = 0;
    let mut column = 0;
    for (byte, ch) in expression.char_indices().take(index) {
        if ch == '\n' {
            line_start = byte + 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    let line = expression[line_start..].lines().next().unwrap_or("");
    (line, column)
}
