use crate::interpreter::lexer::Token;

#[derive(Debug)]
/// Represents all errors that can occur while scanning or parsing an expression.
///
/// Every variant carries the byte offset in the input at which the problem was
/// detected, so diagnostics can point at the offending spot.
pub enum ParseError {
    /// The input contains a character that starts no token.
    UnknownSymbol {
        /// The offending character.
        symbol:   char,
        /// Byte offset of the character in the input.
        position: usize,
    },
    /// The parser found something other than what the grammar requires here.
    UnexpectedToken {
        /// A short description of what the parser was looking for.
        expected: &'static str,
        /// The token that was current instead, or `None` at end of input.
        found:    Option<Token>,
        /// Byte offset at which `found` starts, or the input length at end of
        /// input.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, position } => {
                write!(f, "Error at position {position}: unknown symbol '{symbol}'.")
            },

            Self::UnexpectedToken { expected,
                                    found: Some(token),
                                    position, } => {
                write!(f, "Error at position {position}: expected {expected}, found {token}.")
            },

            Self::UnexpectedToken { expected,
                                    found: None,
                                    position, } => {
                write!(f, "Error at position {position}: expected {expected}, found end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
