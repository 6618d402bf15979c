//! Calculator example.
//!
//! Builds an arithmetic grammar from combinators:
//! 1. Numbers and operators from `regex` and `literal`.
//! 2. Precedence by layering `term` under `expr`.
//! 3. Parentheses through `lazy` recursion.
//!
//! Run with `cargo run --example calc -- "1 + 2 * (3 - 4)"`.

use combinator_framework::{choice, lazy, literal, parse, regex, Parser};

// ============================================================================
// Grammar
// ============================================================================

fn whitespace() -> Parser<String> {
    regex(r"[ \t]*").expect("valid whitespace pattern")
}

fn token(text: &str) -> Parser<String> {
    literal(text).skip(whitespace())
}

fn number() -> Parser<f64> {
    regex(r"[0-9]+(?:\.[0-9]+)?")
        .expect("valid number pattern")
        .map(|digits| digits.parse::<f64>().unwrap_or(f64::NAN))
        .desc(["number"])
        .skip(whitespace())
}

fn factor() -> Parser<f64> {
    let parens = lazy(expr).wrap(token("("), token(")"));
    let negated = token("-").next(lazy(factor)).map(|value| -value);
    choice([number(), parens, negated])
}

/// Left-associative chain of `operand` joined by any of `operators`.
fn binary(operand: Parser<f64>, operators: &[&str]) -> Parser<f64> {
    let operator = choice(operators.iter().map(|op| token(op)));
    operand
        .clone()
        .and(operator.and(operand).repeat(..))
        .map(|(first, rest)| {
            rest.into_iter()
                .fold(first, |acc, (op, value)| match op.as_str() {
                    "+" => acc + value,
                    "-" => acc - value,
                    "*" => acc * value,
                    _ => acc / value,
                })
        })
}

fn term() -> Parser<f64> {
    binary(factor(), &["*", "/"])
}

fn expr() -> Parser<f64> {
    binary(term(), &["+", "-"])
}

// ============================================================================
// Driver
// ============================================================================

fn main() {
    let calculator = whitespace().next(expr());
    let inputs: Vec<String> = match std::env::args().nth(1) {
        Some(source) => vec![source],
        None => vec![
            "1 + 2 * 3".to_string(),
            "(1 + 2) * 3".to_string(),
            "-4 / (2 - 4)".to_string(),
            "2 * (3 +".to_string(),
        ],
    };

    for source in inputs {
        match parse(&calculator, source.as_str()) {
            Ok(value) => println!("{source} = {value}"),
            Err(failure) => println!("{source}: {failure}"),
        }
    }
}
