//! Shunting-yard sequencer tests.
//!
//! Covers: precedence, left associativity, parentheses, functions,
//! whitespace handling, parenthesis errors with their offsets, tokenizer
//! errors surfacing unchanged, and determinism.

use mathbot_parser::{parse, to_rpn_string};
use mathbot_types::{ParseError, ParseErrorKind};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Parse and render the postfix sequence (panics on parse errors).
fn rpn(source: &str) -> String {
    let tokens = parse(source).unwrap_or_else(|e| panic!("parse {source:?} failed: {e}"));
    to_rpn_string(&tokens)
}

/// Parse and return the error (panics on success).
fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(tokens) => panic!(
            "expected {source:?} to fail, got `{}`",
            to_rpn_string(&tokens)
        ),
        Err(e) => e,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Ordering
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_single_number() {
    assert_eq!(rpn("42"), "42");
}

#[test]
fn test_division() {
    assert_eq!(rpn("10 / 5"), "10 5 /");
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(rpn("2 + 3 * 4"), "2 3 4 * +");
    assert_eq!(rpn("2 * 3 + 4"), "2 3 * 4 +");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(rpn("(2 + 3) * 4"), "2 3 + 4 *");
}

#[test]
fn test_same_precedence_is_left_associative() {
    assert_eq!(rpn("8 - 3 - 2"), "8 3 - 2 -");
    assert_eq!(rpn("8 / 4 * 2"), "8 4 / 2 *");
}

#[test]
fn test_power_is_left_associative() {
    assert_eq!(rpn("2 ^ 3 ^ 2"), "2 3 ^ 2 ^");
}

#[test]
fn test_power_binds_tighter_than_multiplication() {
    assert_eq!(rpn("2 * 3 ^ 2"), "2 3 2 ^ *");
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(rpn("((1 + 2) * (3 - 4)) / 5"), "1 2 + 3 4 - * 5 /");
}

#[test]
fn test_whitespace_is_discarded() {
    assert_eq!(rpn("  1\t+\n2  "), "1 2 +");
}

#[test]
fn test_leading_minus_follows_operand() {
    assert_eq!(rpn("-5"), "5 -");
}

#[test]
fn test_missing_operand_still_sequences() {
    assert_eq!(rpn("3 *"), "3 *");
    assert_eq!(rpn("1 2"), "1 2");
}

// ─────────────────────────────────────────────────────────────────────
// Functions
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_function_call() {
    assert_eq!(rpn("sqrt(9)"), "9 sqrt");
}

#[test]
fn test_function_binds_tighter_than_power() {
    assert_eq!(rpn("sqrt(4) ^ 2"), "4 sqrt 2 ^");
}

#[test]
fn test_function_argument_expression() {
    assert_eq!(rpn("sin(1 + 2) * 3"), "1 2 + sin 3 *");
}

#[test]
fn test_nested_functions() {
    assert_eq!(rpn("sqrt(cos(0))"), "0 cos sqrt");
}

#[test]
fn test_function_as_right_operand() {
    assert_eq!(rpn("2 ^ sqrt(4)"), "2 4 sqrt ^");
}

// ─────────────────────────────────────────────────────────────────────
// Empty input
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_input_yields_empty_sequence() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("   ").unwrap().is_empty());
}

// ─────────────────────────────────────────────────────────────────────
// Parenthesis errors
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_unclosed_parenthesis() {
    let err = parse_err("(1 + 2");
    assert_eq!(err.kind, ParseErrorKind::UnclosedParentheses);
    assert_eq!(err.index, 0);
}

#[test]
fn test_unclosed_parenthesis_points_at_outermost_open() {
    let err = parse_err("1 + ((2 * 3)");
    assert_eq!(err.kind, ParseErrorKind::UnclosedParentheses);
    assert_eq!(err.index, 4);
}

#[test]
fn test_unclosed_parenthesis_after_balanced_group() {
    let err = parse_err("(1) + (2");
    assert_eq!(err.kind, ParseErrorKind::UnclosedParentheses);
    assert_eq!(err.index, 6);
}

#[test]
fn test_unclosed_function_call() {
    let err = parse_err("sqrt(9");
    assert_eq!(err.kind, ParseErrorKind::UnclosedParentheses);
    assert_eq!(err.index, 4);
}

#[test]
fn test_missing_open_parenthesis() {
    let err = parse_err("1 + 2)");
    assert_eq!(err.kind, ParseErrorKind::MissingOpenParentheses);
    assert_eq!(err.index, 5);
}

#[test]
fn test_missing_open_parenthesis_after_balanced_group() {
    let err = parse_err("(1))");
    assert_eq!(err.kind, ParseErrorKind::MissingOpenParentheses);
    assert_eq!(err.index, 3);
}

// ─────────────────────────────────────────────────────────────────────
// Tokenizer errors surface unchanged
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_multiple_decimal_separators() {
    let err = parse_err("1.2.3");
    assert_eq!(
        err,
        ParseError::new(ParseErrorKind::MultipleDecimalSeparators, 3)
    );
}

#[test]
fn test_invalid_function() {
    let err = parse_err("foo(1)");
    assert_eq!(err, ParseError::new(ParseErrorKind::InvalidFunction, 0));
}

#[test]
fn test_invalid_lexeme_after_valid_prefix() {
    let err = parse_err("(1 + 2) $ 3");
    assert_eq!(err, ParseError::new(ParseErrorKind::InvalidLexeme, 8));
}

#[test]
fn test_tokenizer_error_wins_over_unclosed_paren() {
    let err = parse_err("(1 + x");
    assert_eq!(err.kind, ParseErrorKind::InvalidFunction);
    assert_eq!(err.index, 5);
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_parser_determinism_100_iterations() {
    let source = "sqrt(16) + 2.5 * (3 - 1) ^ 2";
    let first = parse(source).unwrap();
    for i in 0..100 {
        let tokens = parse(source).unwrap();
        assert_eq!(first, tokens, "Determinism failure at iteration {i}");
    }
}

#[test]
fn test_parser_error_determinism_100_iterations() {
    let first = parse_err("(1 + 2");
    for i in 0..100 {
        assert_eq!(first, parse_err("(1 + 2"), "Determinism failure at iteration {i}");
    }
}
