//! Parsers that do not wrap other parsers.

use crate::parser::Parser;
use crate::result::ParseResult;
use common_framework::{Input, Position, Text};

/// The name reported when more input was found than the grammar accepts.
pub const EOF: &str = "<EOF>";

/// Matches exactly `text`.
///
/// Typical for keywords (`while`, `let`) and punctuation (`{`, `"`).
pub fn literal<S: Into<String>>(text: S) -> Parser<String> {
    let text = text.into();
    Parser::new(move |input: &Text, at: Position| {
        if input.remaining(at).starts_with(text.as_str()) {
            let next = input.seek(at, at.offset + text.len());
            ParseResult::success(text.clone(), next)
        } else {
            ParseResult::failure(at, [text.as_str()])
        }
    })
}

/// Always succeeds with `value` without consuming input.
pub fn ok<A, I>(value: A) -> Parser<A, I>
where
    A: Clone + 'static,
    I: Input + 'static,
{
    Parser::new(move |_, at| ParseResult::success(value.clone(), at))
}

/// Always fails at the current position, expecting `names`.
pub fn fail<A, I, N, It>(names: It) -> Parser<A, I>
where
    A: 'static,
    I: Input + 'static,
    N: Into<String>,
    It: IntoIterator<Item = N>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    Parser::new(move |_, at| ParseResult::failure(at, names.iter().cloned()))
}

/// Succeeds only when the whole input has been consumed.
///
/// [`parse`](crate::parse) already appends this; use it directly for things
/// like "newline or end of file".
pub fn eof<I: Input + 'static>() -> Parser<&'static str, I> {
    Parser::new(|input: &I, at| {
        if input.is_eof(at) {
            ParseResult::success(EOF, at)
        } else {
            ParseResult::failure(at, [EOF])
        }
    })
}

/// Yields the current position without consuming input.
pub fn location<I: Input + 'static>() -> Parser<I::Position, I> {
    Parser::new(|_, at| ParseResult::success(at, at))
}
