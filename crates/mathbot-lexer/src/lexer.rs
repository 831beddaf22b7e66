//! Core mathbot tokenizer: produces one token at a time from an expression.
//!
//! Recognition order:
//! - whitespace (one character per token)
//! - end of input
//! - single-character operators `( ) + - * / ^`
//! - numeric literals (digits with at most one `.`)
//! - function names (`sqrt`, `sin`, `cos`, `tan`), which must be directly
//!   followed by `(`
//!
//! The tokenizer stops at the first error; there is no recovery.

use mathbot_types::{ParseError, ParseErrorKind, ParseResult};

use crate::token::{lookup_function, Token, TokenKind};

/// The mathbot tokenizer.
///
/// Keeps a cursor into the expression and the number of characters consumed
/// so far. Offsets are counted in characters so they line up with a caret
/// drawn under the expression.
pub struct Lexer<'src> {
    /// The full expression text.
    source: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
    /// Characters consumed so far.
    index: usize,
}

impl<'src> Lexer<'src> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            index: 0,
        }
    }

    /// Number of characters consumed so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Tokenize the whole expression, including whitespace tokens.
    ///
    /// The returned vector always ends with [`TokenKind::EndOfInput`].
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            tokens.push(token);
            if token.kind == TokenKind::EndOfInput {
                return Ok(tokens);
            }
        }
    }

    /// Produce the next token and advance past it.
    ///
    /// Once the end of input is reached every further call returns
    /// [`TokenKind::EndOfInput`] again.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        let start = self.index;

        let Some(ch) = self.peek() else {
            return Ok(Token::new(TokenKind::EndOfInput, start));
        };

        if is_space(ch) {
            self.advance();
            return Ok(Token::new(TokenKind::Whitespace, start));
        }

        let kind = match ch {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '+' => TokenKind::Add,
            '-' => TokenKind::Subtract,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '^' => TokenKind::Power,
            '0'..='9' => return self.scan_number(),
            'a'..='z' => return self.scan_function(),
            _ => return Err(ParseError::new(ParseErrorKind::InvalidLexeme, start)),
        };

        self.advance();
        Ok(Token::new(kind, start))
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.index += 1;
        Some(ch)
    }

    // ─────────────────────────────────────────────────────────────
    // Number literals
    // ─────────────────────────────────────────────────────────────

    fn scan_number(&mut self) -> ParseResult<Token> {
        let start = self.index;
        let start_pos = self.pos;
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => {}
                '.' if seen_dot => {
                    return Err(ParseError::new(
                        ParseErrorKind::MultipleDecimalSeparators,
                        self.index,
                    ));
                }
                '.' => seen_dot = true,
                _ => break,
            }
            self.advance();
        }

        let text = &self.source[start_pos..self.pos];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::new(TokenKind::Number(value), start)),
            _ => Err(ParseError::new(
                ParseErrorKind::StrToDoubleConversion,
                start,
            )),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Function names
    // ─────────────────────────────────────────────────────────────

    fn scan_function(&mut self) -> ParseResult<Token> {
        let start = self.index;
        let start_pos = self.pos;

        while let Some('a'..='z') = self.peek() {
            self.advance();
        }

        let name = &self.source[start_pos..self.pos];
        lookup_function(name)
            .filter(|_| self.peek() == Some('('))
            .map(|kind| Token::new(kind, start))
            .ok_or(ParseError::new(ParseErrorKind::InvalidFunction, start))
    }
}

/// The C locale's `isspace` set: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_tracks_consumed_characters() {
        let mut lexer = Lexer::new("12 + 3");
        lexer.next_token().unwrap();
        assert_eq!(lexer.index(), 2);
        lexer.next_token().unwrap();
        assert_eq!(lexer.index(), 3);
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut lexer = Lexer::new("1");
        lexer.next_token().unwrap();
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
        }
        assert_eq!(lexer.index(), 1);
    }

    #[test]
    fn test_function_lookahead_does_not_consume_paren() {
        let mut lexer = Lexer::new("sin(");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Sin);
        assert_eq!(lexer.index(), 3);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::OpenParen);
    }

    #[test]
    fn test_is_space_matches_c_locale() {
        for ch in [' ', '\t', '\n', '\x0B', '\x0C', '\r'] {
            assert!(is_space(ch), "{ch:?}");
        }
        assert!(!is_space('\u{a0}'));
        assert!(!is_space('\0'));
    }
}
