use std::io::Write;

use clap::Parser;
use exeval::{
    error::ParseError,
    interpreter::{
        lexer::{Scanner, Token},
        parser::parse_expression,
    },
};

/// exeval evaluates one arithmetic expression built from decimal numbers,
/// `+`, `*`, and parentheses, printing each token as it is recognized and
/// then the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// Only scan the expression and print its token trace, without parsing or
    /// evaluating it.
    #[arg(short, long)]
    scan: bool,

    /// The expression to evaluate, quoted as a single shell argument.
    expression: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        // The token trace printed so far has no terminating newline yet.
        let _ = std::io::stdout().flush();
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Scans (and unless `--scan` was given, evaluates) the expression, tracing
/// every token to stdout as the lexer classifies it.
fn run(args: &Args) -> Result<(), ParseError> {
    let mut tokens = Scanner::with_observer(&args.expression,
                                            Box::new(|token: &Token| print!("{token} ")));

    tokens.advance()?;

    if args.scan {
        while tokens.current().is_some() {
            tokens.advance()?;
        }
        println!();
        return Ok(());
    }

    let value = parse_expression(&mut tokens)?;
    println!(": {value:.2}");

    Ok(())
}
