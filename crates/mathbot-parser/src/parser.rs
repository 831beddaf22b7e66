//! Shunting-yard sequencing of infix expressions.
//!
//! Precedence, from loosest to tightest: `+ -`, `* /`, `^`, then the
//! one-argument functions. Every operator pops on `>=`, so all of them,
//! `^` included, associate to the left: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.

use mathbot_lexer::{Lexer, Token, TokenKind};
use mathbot_types::{ParseError, ParseErrorKind, ParseResult};

/// Parse `expression` into a postfix token sequence.
///
/// An empty or all-whitespace expression yields an empty sequence; callers
/// that need at least one value must reject such input themselves.
pub fn parse(expression: &str) -> ParseResult<Vec<Token>> {
    Parser::new(expression).parse()
}

/// Render a postfix sequence as space-separated symbols, e.g. `10 5 /`.
pub fn to_rpn_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The shunting-yard sequencer.
///
/// Pulls tokens from a [`Lexer`] one at a time. The output sequence and the
/// operator stack live only for the duration of [`Parser::parse`].
pub struct Parser<'src> {
    /// Token source.
    lexer: Lexer<'src>,
    /// Postfix output built so far.
    output: Vec<Token>,
    /// Pending operators, functions and open parentheses.
    operators: Vec<Token>,
    /// Current parenthesis nesting depth.
    depth: usize,
    /// Offset of the `(` that last took the depth from 0 to 1.
    first_unclosed: usize,
}

impl<'src> Parser<'src> {
    /// Create a parser over `expression`.
    pub fn new(expression: &'src str) -> Self {
        Self {
            lexer: Lexer::new(expression),
            output: Vec::new(),
            operators: Vec::new(),
            depth: 0,
            first_unclosed: 0,
        }
    }

    /// Run the sequencer to completion.
    ///
    /// Stops at the first error; nothing built up to that point is returned.
    pub fn parse(mut self) -> ParseResult<Vec<Token>> {
        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::EndOfInput => break,
                TokenKind::Whitespace => {}
                TokenKind::Number(_) => self.output.push(token),
                TokenKind::OpenParen => self.open_paren(token),
                TokenKind::CloseParen => self.close_paren(token)?,
                kind if kind.is_function() => self.operators.push(token),
                _ => self.binary_operator(token)?,
            }
        }

        if self.depth > 0 {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedParentheses,
                self.first_unclosed,
            ));
        }

        while let Some(op) = self.operators.pop() {
            self.output.push(op);
        }

        Ok(self.output)
    }

    // ── Parentheses ───────────────────────────────────────────────────────────

    fn open_paren(&mut self, token: Token) {
        if self.depth == 0 {
            self.first_unclosed = token.offset;
        }
        self.depth += 1;
        self.operators.push(token);
    }

    fn close_paren(&mut self, token: Token) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(Token {
                    kind: TokenKind::OpenParen,
                    ..
                }) => break,
                Some(op) => self.output.push(op),
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::MissingOpenParentheses,
                        token.offset,
                    ))
                }
            }
        }
        self.depth -= 1;
        Ok(())
    }

    // ── Operators ─────────────────────────────────────────────────────────────

    fn binary_operator(&mut self, token: Token) -> ParseResult<()> {
        let precedence = precedence_of(&token)?;

        while let Some(top) = self.operators.last().copied() {
            if top.kind == TokenKind::OpenParen {
                break;
            }
            if precedence_of(&top)? < precedence {
                break;
            }
            self.operators.pop();
            self.output.push(top);
        }

        self.operators.push(token);
        Ok(())
    }
}

fn precedence_of(token: &Token) -> ParseResult<u8> {
    token
        .kind
        .precedence()
        .ok_or(ParseError::new(ParseErrorKind::NotAnOperator, token.offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_returns_to_zero() {
        let mut parser = Parser::new("((1))");
        parser.open_paren(Token::new(TokenKind::OpenParen, 0));
        parser.open_paren(Token::new(TokenKind::OpenParen, 1));
        assert_eq!(parser.depth, 2);
        assert_eq!(parser.first_unclosed, 0);
        parser.close_paren(Token::new(TokenKind::CloseParen, 3)).unwrap();
        parser.close_paren(Token::new(TokenKind::CloseParen, 4)).unwrap();
        assert_eq!(parser.depth, 0);
        assert!(parser.operators.is_empty());
    }

    #[test]
    fn test_non_operator_on_stack_is_reported() {
        let mut parser = Parser::new("");
        parser.operators.push(Token::new(TokenKind::Number(1.0), 7));
        let err = parser
            .binary_operator(Token::new(TokenKind::Add, 9))
            .unwrap_err();
        assert_eq!(err, ParseError::new(ParseErrorKind::NotAnOperator, 7));
    }

    #[test]
    fn test_to_rpn_string() {
        let tokens = parse("(2 + 3) * 4").unwrap();
        assert_eq!(to_rpn_string(&tokens), "2 3 + 4 *");
    }
}
