use crate::parser::Parser;
use crate::primitives::eof;
use crate::result::ParseResult;
use common_framework::{Input, Location};

/// Why a complete parse failed: how far it got and what it wanted there.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at {location}{}", describe_expected(.expected))]
pub struct ParseFailure<P: Location> {
    /// The furthest position any attempt reached.
    pub location: P,
    /// Distinct names of what could have come next, in the order they were
    /// recorded.
    pub expected: Vec<String>,
}

fn describe_expected(expected: &[String]) -> String {
    if expected.is_empty() {
        String::new()
    } else {
        format!(": expected {}", expected.join(", "))
    }
}

/// Parses the whole of `input` with `parser`.
///
/// Input left over after `parser` succeeds is an error, reported as an
/// expected end of input.
///
/// A `&str` is copied into a fresh [`Text`](common_framework::Text). To parse
/// the same source more than once, build the `Text` up front and pass clones;
/// they share one buffer.
pub fn parse<A, I, S>(parser: &Parser<A, I>, input: S) -> Result<A, ParseFailure<I::Position>>
where
    A: 'static,
    I: Input + 'static,
    S: Into<I>,
{
    let input = input.into();
    let complete = parser.clone().skip(eof());
    match complete.parse_at(&input, input.start()) {
        ParseResult::Success { value, .. } => {
            log::trace!("parsed {} units of input", input.len());
            Ok(value)
        }
        ParseResult::Failure { expected } => {
            let failure = ParseFailure {
                location: expected.position(),
                expected: expected.into_names(),
            };
            log::debug!("{failure}");
            Err(failure)
        }
    }
}

/// Parses the whole of `input` and returns the value.
///
/// # Panics
///
/// Panics with a message like
/// `parse error at line 1 column 4: expected number, <EOF>` if the input
/// does not parse. Use [`parse`] to handle failures.
pub fn try_parse<A, I, S>(parser: &Parser<A, I>, input: S) -> A
where
    A: 'static,
    I: Input + 'static,
    S: Into<I>,
{
    match parse(parser, input) {
        Ok(value) => value,
        Err(failure) => panic!("{failure}"),
    }
}
