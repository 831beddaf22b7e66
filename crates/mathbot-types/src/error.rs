use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Every way the tokenizer or sequencer can reject an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseErrorKind {
    /// A character that starts no token.
    InvalidLexeme,
    /// A numeric literal with a second `.`.
    MultipleDecimalSeparators,
    /// A numeric literal that could not be read as a double.
    StrToDoubleConversion,
    /// A non-operator found where the sequencer compares precedence.
    NotAnOperator,
    /// A `)` with no matching `(`.
    MissingOpenParentheses,
    /// A `(` still open at end of input.
    UnclosedParentheses,
    /// An identifier that is not a known function, or is not followed by `(`.
    InvalidFunction,
}

impl ParseErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ParseErrorKind; 7] = [
        Self::InvalidLexeme,
        Self::MultipleDecimalSeparators,
        Self::StrToDoubleConversion,
        Self::NotAnOperator,
        Self::MissingOpenParentheses,
        Self::UnclosedParentheses,
        Self::InvalidFunction,
    ];

    /// The stable error code shown to users (e.g. `INVALID_LEXEME`).
    pub fn label(self) -> &'static str {
        match self {
            Self::InvalidLexeme => "INVALID_LEXEME",
            Self::MultipleDecimalSeparators => "MULTIPLE_DECIMAL_SEPARATORS",
            Self::StrToDoubleConversion => "STR_TO_DOUBLE_CONVERSION",
            Self::NotAnOperator => "NOT_AN_OPERATOR",
            Self::MissingOpenParentheses => "MISSING_OPEN_PARENTHESES",
            Self::UnclosedParentheses => "UNCLOSED_PARENTHESES",
            Self::InvalidFunction => "INVALID_FUNCTION",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLexeme => write!(f, "invalid lexeme"),
            Self::MultipleDecimalSeparators => write!(f, "multiple decimal separators"),
            Self::StrToDoubleConversion => write!(f, "number conversion failed"),
            Self::NotAnOperator => write!(f, "not an operator"),
            Self::MissingOpenParentheses => write!(f, "missing open parenthesis"),
            Self::UnclosedParentheses => write!(f, "unclosed parenthesis"),
            Self::InvalidFunction => write!(f, "invalid function"),
        }
    }
}

/// A parse failure located at a character offset in the input.
///
/// `index` is 0-based and counts characters, not bytes, so it can be used
/// directly to place a caret under the expression in a monospace display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{kind} at offset {index}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub index: usize,
}

impl ParseError {
    /// Create a new error.
    pub fn new(kind: ParseErrorKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Shorthand for `self.kind.label()`.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = ParseErrorKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ParseErrorKind::ALL.len());
    }

    #[test]
    fn test_serde_names_match_labels() {
        for kind in ParseErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ParseErrorKind::MultipleDecimalSeparators, 3);
        assert_eq!(err.to_string(), "multiple decimal separators at offset 3");
        assert_eq!(err.label(), "MULTIPLE_DECIMAL_SEPARATORS");
    }

    #[test]
    fn test_parse_error_json_shape() {
        let err = ParseError::new(ParseErrorKind::InvalidFunction, 0);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"kind":"INVALID_FUNCTION","index":0}"#);
    }
}
