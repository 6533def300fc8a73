use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the expression input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression vocabulary.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Numeric literal tokens, such as `7`, `3.14`, `.5`, `5.` or `2.1e-10`.
    #[regex(r"[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    /// Formats the token the way the trace output prints it: `V(<value>)` with
    /// two decimals for numbers, `O(<character>)` for everything else.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "V({value:.2})"),
            Self::Plus => write!(f, "O(+)"),
            Self::Star => write!(f, "O(*)"),
            Self::LParen => write!(f, "O(()"),
            Self::RParen => write!(f, "O())"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid decimal literal.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Callback invoked by a [`Scanner`] once for every token it classifies.
///
/// Installed with [`Scanner::with_observer`]. The token trace printed by the
/// command-line binary is an observer that writes each token to stdout.
pub type TokenObserver<'a> = Box<dyn FnMut(&Token) + 'a>;

/// Pull-based scanner state: the input being scanned, the single current
/// lookahead token, and its byte position.
///
/// The scanner owns the cursor into the input. Grammar functions share one
/// `Scanner` by `&mut` and drive it forward as they consume tokens; the
/// current token is overwritten in place on every [`advance`](Self::advance),
/// so no token sequence is ever buffered.
///
/// # Example
/// ```
/// use exeval::interpreter::lexer::{Scanner, Token};
///
/// let mut tokens = Scanner::new("1 + 2");
/// tokens.advance()?;
/// assert_eq!(tokens.current(), Some(Token::Number(1.0)));
/// assert_eq!(tokens.position(), 0);
/// tokens.advance()?;
/// assert_eq!(tokens.current(), Some(Token::Plus));
/// assert_eq!(tokens.position(), 2);
/// # Ok::<(), exeval::error::ParseError>(())
/// ```
pub struct Scanner<'source> {
    lexer:    logos::Lexer<'source, Token>,
    current:  Option<Token>,
    position: usize,
    observer: Option<TokenObserver<'source>>,
}

impl<'source> Scanner<'source> {
    /// Creates a scanner over `input` with no observer installed.
    ///
    /// The current token starts out empty; call [`advance`](Self::advance)
    /// once to load the first token before parsing.
    #[must_use]
    pub fn new(input: &'source str) -> Self {
        Self { lexer:    Token::lexer(input),
               current:  None,
               position: 0,
               observer: None, }
    }

    /// Creates a scanner over `input` that reports every classified token to
    /// `observer`, in input order, as a side effect of advancing.
    #[must_use]
    pub fn with_observer(input: &'source str, observer: TokenObserver<'source>) -> Self {
        Self { lexer:    Token::lexer(input),
               current:  None,
               position: 0,
               observer: Some(observer), }
    }

    /// Advances to the next token in the input.
    ///
    /// Skips runs of spaces and tabs, classifies the next lexical unit, and
    /// replaces the current token with it. Once the end of input is reached
    /// the current token becomes `None` and stays there; advancing again is
    /// harmless.
    ///
    /// # Errors
    /// Returns [`ParseError::UnknownSymbol`] when the input continues with a
    /// character that starts no token.
    pub fn advance(&mut self) -> Result<(), ParseError> {
        match self.lexer.next() {
            Some(Ok(token)) => {
                self.position = self.lexer.span().start;
                if let Some(observer) = &mut self.observer {
                    observer(&token);
                }
                self.current = Some(token);
            },

            Some(Err(())) => {
                let symbol = self.lexer
                                 .slice()
                                 .chars()
                                 .next()
                                 .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::UnknownSymbol { symbol,
                                                       position: self.lexer.span().start, });
            },

            None => {
                self.position = self.lexer.source().len();
                self.current = None;
            },
        }

        Ok(())
    }

    /// The current lookahead token, or `None` both before the first
    /// [`advance`](Self::advance) and at end of input.
    #[must_use]
    pub const fn current(&self) -> Option<Token> {
        self.current
    }

    /// Byte offset at which the current token starts, or the input length
    /// once the end of input is reached.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}
