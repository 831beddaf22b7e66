//! Stack-based reduction of postfix sequences.
//!
//! `+` and `-` tolerate a short stack: `+` with fewer than two values does
//! nothing and `-` with a single value negates it, which is how a leading
//! minus is evaluated. `*`, `/`, `^` and the functions fail with
//! [`EvalError::MissingOperand`] instead. Division follows IEEE-754, so a
//! zero divisor gives an infinity or NaN rather than an error.

use mathbot_lexer::{Token, TokenKind};

use crate::error::{EvalError, EvalResult};

/// Evaluate a postfix sequence to a single value.
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    Evaluator::new().run(tokens)
}

/// Postfix evaluator holding the value stack for one run.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<f64>,
}

impl Evaluator {
    /// Create an evaluator with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce `tokens` and return the single remaining value.
    pub fn run(mut self, tokens: &[Token]) -> EvalResult<f64> {
        for token in tokens {
            self.step(token.kind)?;
        }

        match self.stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::MultipleResults),
        }
    }

    fn step(&mut self, kind: TokenKind) -> EvalResult<()> {
        match kind {
            TokenKind::Number(value) => self.stack.push(value),
            TokenKind::Add => {
                if let Some((lhs, rhs)) = self.pop_pair() {
                    self.stack.push(lhs + rhs);
                }
            }
            TokenKind::Subtract => match self.pop_pair() {
                Some((lhs, rhs)) => self.stack.push(lhs - rhs),
                None => {
                    if let Some(top) = self.stack.last_mut() {
                        *top = -*top;
                    }
                }
            },
            TokenKind::Multiply => self.binary(|lhs, rhs| lhs * rhs)?,
            TokenKind::Divide => self.binary(|lhs, rhs| lhs / rhs)?,
            TokenKind::Power => self.binary(f64::powf)?,
            TokenKind::Sqrt => self.unary(f64::sqrt)?,
            TokenKind::Sin => self.unary(f64::sin)?,
            TokenKind::Cos => self.unary(f64::cos)?,
            TokenKind::Tan => self.unary(f64::tan)?,
            TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::EndOfInput
            | TokenKind::Whitespace => return Err(EvalError::InvalidOperator),
        }
        Ok(())
    }

    /// Pop the top two values as `(lhs, rhs)`, or leave the stack untouched
    /// if it holds fewer than two.
    fn pop_pair(&mut self) -> Option<(f64, f64)> {
        if self.stack.len() < 2 {
            return None;
        }
        let rhs = self.stack.pop()?;
        let lhs = self.stack.pop()?;
        Some((lhs, rhs))
    }

    fn binary(&mut self, op: impl FnOnce(f64, f64) -> f64) -> EvalResult<()> {
        let (lhs, rhs) = self.pop_pair().ok_or(EvalError::MissingOperand)?;
        self.stack.push(op(lhs, rhs));
        Ok(())
    }

    fn unary(&mut self, op: impl FnOnce(f64) -> f64) -> EvalResult<()> {
        let value = self.stack.pop().ok_or(EvalError::MissingOperand)?;
        self.stack.push(op(value));
        Ok(())
    }
}
