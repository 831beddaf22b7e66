//! Shared types for the mathbot expression engine.
//!
//! This crate defines the parse error taxonomy and the caret marker used
//! to point at the offending character of an expression.

mod caret;
mod error;

pub use caret::Caret;
pub use error::{ParseError, ParseErrorKind};

/// Result type used by the tokenizer and the shunting-yard sequencer.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
