//! mathbot tokenizer: converts expression text into tokens.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{lookup_function, Token, TokenKind, FUNCTIONS};
