//! Token types for the mathbot tokenizer.
//!
//! Defines [`TokenKind`], covering every lexeme an expression may contain,
//! and [`Token`], which pairs a kind with the character offset it starts at.

use std::fmt;

/// Named single-argument functions, matched on exact name.
pub const FUNCTIONS: &[(&str, TokenKind)] = &[
    ("sqrt", TokenKind::Sqrt),
    ("sin", TokenKind::Sin),
    ("cos", TokenKind::Cos),
    ("tan", TokenKind::Tan),
];

/// Look up a function name in [`FUNCTIONS`].
pub fn lookup_function(name: &str) -> Option<TokenKind> {
    FUNCTIONS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, kind)| *kind)
}

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// 0-based character offset of the token's first character.
    pub offset: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The numeric payload, if this is a number.
    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Numeric literal: `42`, `3.14`. Always finite.
    Number(f64),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `+`
    Add,
    /// `-` (binary subtraction, or negation when only one operand is available)
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `sqrt`
    Sqrt,
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// End of the expression.
    EndOfInput,
    /// A single whitespace character.
    Whitespace,
}

impl TokenKind {
    /// Binding strength used by the shunting-yard sequencer.
    ///
    /// Returns `None` for anything that is not an operator or function.
    pub fn precedence(self) -> Option<u8> {
        match self {
            Self::Add | Self::Subtract => Some(2),
            Self::Multiply | Self::Divide => Some(3),
            Self::Power => Some(4),
            Self::Sqrt | Self::Sin | Self::Cos | Self::Tan => Some(5),
            Self::Number(_)
            | Self::OpenParen
            | Self::CloseParen
            | Self::EndOfInput
            | Self::Whitespace => None,
        }
    }

    /// Returns `true` for `+ - * / ^`.
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power
        )
    }

    /// Returns `true` for the named one-argument functions.
    pub fn is_function(self) -> bool {
        matches!(self, Self::Sqrt | Self::Sin | Self::Cos | Self::Tan)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Power => write!(f, "^"),
            Self::Sqrt => write!(f, "sqrt"),
            Self::Sin => write!(f, "sin"),
            Self::Cos => write!(f, "cos"),
            Self::Tan => write!(f, "tan"),
            Self::EndOfInput => write!(f, "<end>"),
            Self::Whitespace => write!(f, "<space>"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
