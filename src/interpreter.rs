/// The lexer module classifies expression text into tokens on demand.
///
/// The lexer (tokenizer) reads the raw input string and classifies one token
/// at a time as the parser asks for it, instead of building a token sequence
/// up front. This is the first stage of evaluation, and the only stage that
/// looks at individual characters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte offsets.
/// - Handles numeric literals and the operator characters `+`, `*`, `(`, `)`,
///   skipping runs of spaces and tabs between them.
/// - Reports lexical errors for characters that start no token.
/// - Notifies an optional observer of every classified token, in input order.
pub mod lexer;
/// The parser module evaluates the token stream by recursive descent.
///
/// The parser pulls tokens from the scanner and folds them directly into a
/// numeric result, one function per grammar rule. Operator precedence comes
/// from the call nesting alone, and no syntax tree is materialized in
/// between.
///
/// # Responsibilities
/// - Implements `expression`, `term`, and `factor` as mutually recursive
///   functions over a shared scanner.
/// - Validates the grammar, reporting syntax errors with position info.
/// - Computes the `f64` value of the input while parsing it.
pub mod parser;
