//! # exeval
//!
//! exeval is a tiny traced expression evaluator written in Rust.
//! It scans and evaluates a single arithmetic expression built from decimal
//! numbers, `+`, `*`, and parentheses, in one left-to-right pass with no
//! syntax tree in between.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Scanner, Token},
        parser::parse_expression,
    },
};

/// Provides unified error types for scanning and parsing.
///
/// This module defines all errors that can be raised while lexing or parsing
/// an expression. It standardizes error reporting and carries the byte offset
/// of each failure so diagnostics can point at the offending input.
///
/// # Responsibilities
/// - Defines the error enum covering lexical and syntax failure modes.
/// - Attaches byte positions and expectation hints for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together scanning and parsing to provide a complete
/// single-pass evaluator for arithmetic expressions. The scanner produces one
/// token at a time and the parser consumes it immediately, computing the
/// result during the descent.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and parser.
/// - Provides the grammar functions for evaluating expressions.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;

/// Evaluates an arithmetic expression and returns its value.
///
/// Scans and parses `expression` in a single pass, folding the input directly
/// into an `f64` as it is consumed. `*` binds tighter than `+`, chains of the
/// same operator group to the right, and parentheses group as usual.
///
/// Parsing stops at the first token that cannot extend the expression, and
/// whatever follows is silently ignored: `"1+2)"` evaluates to `3.0` rather
/// than failing on the stray parenthesis.
///
/// # Errors
/// Returns a [`ParseError`] when the input contains a character outside the
/// expression vocabulary, or does not begin with a well-formed expression.
///
/// # Examples
/// ```
/// use exeval::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
/// assert!(evaluate("2+").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, ParseError> {
    let mut tokens = Scanner::new(expression);

    tokens.advance()?;
    parse_expression(&mut tokens)
}

/// Scans an expression and collects every token with its byte offset.
///
/// This is the lexer-only entry point: the input is tokenized from start to
/// end but nothing is parsed or evaluated, so syntactically meaningless input
/// such as `")(("` still scans cleanly. Offsets point at the first byte of
/// each token.
///
/// # Errors
/// Returns [`ParseError::UnknownSymbol`] for the first character that starts
/// no token.
///
/// # Examples
/// ```
/// use exeval::{interpreter::lexer::Token, scan};
///
/// let tokens = scan("10 * 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(10.0), 0), (Token::Star, 3), (Token::Number(2.0), 5)]);
/// ```
pub fn scan(expression: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut stream = Scanner::new(expression);
    let mut tokens = Vec::new();

    stream.advance()?;
    while let Some(token) = stream.current() {
        tokens.push((token, stream.position()));
        stream.advance()?;
    }

    Ok(tokens)
}
