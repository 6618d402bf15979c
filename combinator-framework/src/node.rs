use crate::combinators::all;
use crate::parser::Parser;
use crate::primitives::location;
use common_framework::{Input, Location, Position};

/// A parsed value tagged with a name and the span it came from.
///
/// `end` is exclusive: it is the position right after the last consumed
/// unit, so `start == end` for a node that consumed nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode<S, A, P = Position> {
    pub name: S,
    pub value: A,
    pub start: P,
    pub end: P,
}

impl<S, A, P: Location> ParseNode<S, A, P> {
    /// Number of code units the node spans.
    pub fn len(&self) -> usize {
        self.end.offset() - self.start.offset()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: 'static, I: Input + 'static> Parser<A, I> {
    /// Tags the value with `name` and its start/end positions.
    ///
    /// Useful for building ASTs that can point back into the source, for
    /// error messages or stack traces.
    pub fn node<S>(self, name: S) -> Parser<ParseNode<S, A, I::Position>, I>
    where
        S: Clone + 'static,
    {
        all((location(), self, location())).map(move |(start, value, end)| ParseNode {
            name: name.clone(),
            value,
            start,
            end,
        })
    }
}
