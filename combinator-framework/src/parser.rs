use crate::result::ParseResult;
use common_framework::{Input, Text};
use std::fmt;
use std::rc::Rc;

type ParseFn<A, I> =
    Rc<dyn Fn(&I, <I as Input>::Position) -> ParseResult<A, <I as Input>::Position>>;

/// A parser producing values of type `A` from input `I`.
///
/// A parser is a pure function from an input and a start position to a
/// [`ParseResult`]. Cloning is cheap and shares the underlying function, so
/// grammars can reuse a parser in several places.
///
/// `Parser` is deliberately not `Send`: lazily resolved parsers fill in their
/// target on first use without synchronisation.
pub struct Parser<A, I: Input = Text> {
    run: ParseFn<A, I>,
}

impl<A, I: Input> Clone for Parser<A, I> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A, I: Input> fmt::Debug for Parser<A, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("value", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}

impl<A: 'static, I: Input + 'static> Parser<A, I> {
    /// Wraps a parsing function.
    ///
    /// This is how custom parsers are written. Use [`ParseResult::merge`]
    /// whenever the function runs more than one parser, or the diagnostics of
    /// the earlier ones are lost.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&I, I::Position) -> ParseResult<A, I::Position> + 'static,
    {
        Self { run: Rc::new(run) }
    }

    /// Runs the parser from `at`.
    pub fn parse_at(&self, input: &I, at: I::Position) -> ParseResult<A, I::Position> {
        (self.run)(input, at)
    }
}
