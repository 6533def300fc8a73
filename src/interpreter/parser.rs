use crate::{
    error::ParseError,
    interpreter::lexer::{Scanner, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression parsing. It evaluates one term,
/// and when a `+` follows, consumes it and treats the rest of the input as
/// another expression, adding the two. Evaluation happens during the descent
/// itself; no syntax tree is built.
///
/// Grammar: `expression := term ('+' term)*`
///
/// The recursion is deliberately right-leaning, so `a+b+c` is computed as
/// `a+(b+c)`.
///
/// # Parameters
/// - `tokens`: Scanner holding the current lookahead token.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// Propagates lexical and syntax errors from the nested grammar rules.
///
/// # Example
/// ```
/// use exeval::interpreter::{lexer::Scanner, parser::parse_expression};
///
/// let mut tokens = Scanner::new("2+3*4");
/// tokens.advance()?;
/// assert_eq!(parse_expression(&mut tokens)?, 14.0);
/// # Ok::<(), exeval::error::ParseError>(())
/// ```
pub fn parse_expression(tokens: &mut Scanner<'_>) -> ParseResult<f64> {
    let mut value = parse_term(tokens)?;

    if matches!(tokens.current(), Some(Token::Plus)) {
        tokens.advance()?;
        value += parse_expression(tokens)?;
    }

    Ok(value)
}
/// Parses and evaluates a term.
///
/// Evaluates one factor, and when a `*` follows, consumes it and treats the
/// rest as another term, multiplying the two. `*` binds tighter than `+`
/// purely by sitting one level below [`parse_expression`] in the call
/// nesting. Chains of `*` group to the right like chains of `+` do.
///
/// Grammar: `term := factor ('*' factor)*`
///
/// # Errors
/// Propagates lexical and syntax errors from [`parse_factor`].
pub fn parse_term(tokens: &mut Scanner<'_>) -> ParseResult<f64> {
    let mut value = parse_factor(tokens)?;

    if matches!(tokens.current(), Some(Token::Star)) {
        tokens.advance()?;
        value *= parse_term(tokens)?;
    }

    Ok(value)
}
/// Parses and evaluates a factor: a numeric literal or a parenthesized
/// expression.
///
/// Grammar: `factor := NUMBER | '(' expression ')'`
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] with expectation `')'` when the inner
///   expression of a group is not followed by a closing parenthesis.
/// - [`ParseError::UnexpectedToken`] with expectation `'(' or a value` for
///   anything else that cannot begin a factor, including end of input.
pub fn parse_factor(tokens: &mut Scanner<'_>) -> ParseResult<f64> {
    match tokens.current() {
        Some(Token::Number(value)) => {
            tokens.advance()?;
            Ok(value)
        },

        Some(Token::LParen) => {
            tokens.advance()?;
            let value = parse_expression(tokens)?;

            match tokens.current() {
                Some(Token::RParen) => {
                    tokens.advance()?;
                    Ok(value)
                },
                _ => Err(unexpected(tokens, "')'")),
            }
        },

        _ => Err(unexpected(tokens, "'(' or a value")),
    }
}

/// Builds the syntax-error value for the current lookahead token.
fn unexpected(tokens: &Scanner<'_>, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken { expected,
                                  found: tokens.current(),
                                  position: tokens.position(), }
}
