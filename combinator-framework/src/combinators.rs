use crate::parser::Parser;
use crate::primitives::fail;
use crate::result::ParseResult;
use common_framework::Input;
use std::cell::OnceCell;

impl<A: 'static, I: Input + 'static> Parser<A, I> {
    /// Sequence: parse `self` then `other`, yielding both values.
    pub fn and<B: 'static>(self, other: Parser<B, I>) -> Parser<(A, B), I> {
        Parser::new(move |input, at| match self.parse_at(input, at) {
            ParseResult::Success {
                value: a,
                next,
                furthest,
            } => other
                .parse_at(input, next)
                .merge(furthest)
                .map_value(|b| (a, b)),
            ParseResult::Failure { expected } => ParseResult::Failure { expected },
        })
    }

    /// Choice: try `self`, and if it fails try `other` from the same place.
    ///
    /// The first success wins even if `other` could have consumed more, so
    /// overlapping alternatives must be ordered most specific first.
    pub fn or(self, other: Parser<A, I>) -> Parser<A, I> {
        Parser::new(move |input, at| match self.parse_at(input, at) {
            ParseResult::Failure { expected } => other.parse_at(input, at).merge(Some(expected)),
            success => success,
        })
    }

    /// Parses `self`, then hands its value to `f` to pick the next parser.
    ///
    /// Use this when what comes next depends on what was just parsed, such as
    /// a closing tag that must repeat the opening tag's name.
    pub fn chain<B, F>(self, f: F) -> Parser<B, I>
    where
        B: 'static,
        F: Fn(A) -> Parser<B, I> + 'static,
    {
        Parser::new(move |input, at| match self.parse_at(input, at) {
            ParseResult::Success {
                value,
                next,
                furthest,
            } => f(value).parse_at(input, next).merge(furthest),
            ParseResult::Failure { expected } => ParseResult::Failure { expected },
        })
    }

    /// Transforms the parsed value.
    pub fn map<B, F>(self, f: F) -> Parser<B, I>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Parser::new(move |input, at| self.parse_at(input, at).map_value(&f))
    }

    /// Replaces whatever `self` reports on failure with `names`.
    ///
    /// The failure keeps its position; only the names change. Handy for
    /// turning a regex source into something like `"number"`.
    pub fn desc<N, It>(self, names: It) -> Parser<A, I>
    where
        N: Into<String>,
        It: IntoIterator<Item = N>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Parser::new(move |input, at| match self.parse_at(input, at) {
            ParseResult::Failure { expected } => {
                ParseResult::failure(expected.position(), names.iter().cloned())
            }
            success => success,
        })
    }

    /// Parses `self` then `other`, keeping the value of `self`.
    pub fn skip<B: 'static>(self, other: Parser<B, I>) -> Parser<A, I> {
        self.and(other).map(|(a, _)| a)
    }

    /// Parses `self` then `other`, keeping the value of `other`.
    pub fn next<B: 'static>(self, other: Parser<B, I>) -> Parser<B, I> {
        self.and(other).map(|(_, b)| b)
    }

    /// Parses `before`, `self`, `after` and keeps the value of `self`.
    pub fn wrap<B, C>(self, before: Parser<B, I>, after: Parser<C, I>) -> Parser<A, I>
    where
        B: 'static,
        C: 'static,
    {
        before.next(self).skip(after)
    }

    /// Ignores `around` on both sides of `self`, e.g. whitespace.
    pub fn trim<B: 'static>(self, around: Parser<B, I>) -> Parser<A, I> {
        self.wrap(around.clone(), around)
    }

    /// Passes the parser to `f`. Lets helper functions read left to right in
    /// a method chain.
    pub fn thru<T, F>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }
}

/// Defers building a parser until it is first run.
///
/// Recursive grammars need this: a rule can refer to itself (or to a rule
/// defined later) through `lazy` without building an infinite value. The
/// thunk runs at most once per `lazy` parser and its result is reused.
pub fn lazy<A, I, F>(thunk: F) -> Parser<A, I>
where
    A: 'static,
    I: Input + 'static,
    F: Fn() -> Parser<A, I> + 'static,
{
    let resolved: OnceCell<Parser<A, I>> = OnceCell::new();
    Parser::new(move |input, at| {
        let parser = resolved.get_or_init(|| {
            log::trace!("resolving lazy parser for {}", std::any::type_name::<A>());
            thunk()
        });
        parser.parse_at(input, at)
    })
}

/// A group of parsers that can run one after another. See [`all`].
pub trait Sequence<I: Input> {
    type Output;

    fn into_parser(self) -> Parser<Self::Output, I>;
}

impl<A: 'static, I: Input + 'static> Sequence<I> for Vec<Parser<A, I>> {
    type Output = Vec<A>;

    fn into_parser(self) -> Parser<Vec<A>, I> {
        Parser::new(move |input, start| {
            let mut values = Vec::with_capacity(self.len());
            let mut at = start;
            let mut furthest = None;
            for parser in &self {
                match parser.parse_at(input, at).merge(furthest.take()) {
                    ParseResult::Success {
                        value,
                        next,
                        furthest: seen,
                    } => {
                        values.push(value);
                        at = next;
                        furthest = seen;
                    }
                    ParseResult::Failure { expected } => return ParseResult::Failure { expected },
                }
            }
            ParseResult::Success {
                value: values,
                next: at,
                furthest,
            }
        })
    }
}

macro_rules! impl_sequence_for_tuple {
    ($(($T:ident, $parser:ident, $value:ident)),+) => {
        impl<I: Input + 'static, $($T: 'static),+> Sequence<I> for ($(Parser<$T, I>,)+) {
            type Output = ($($T,)+);

            fn into_parser(self) -> Parser<Self::Output, I> {
                let ($($parser,)+) = self;
                Parser::new(move |input, start| {
                    let mut at = start;
                    let mut furthest = None;
                    $(
                        let $value = match $parser.parse_at(input, at).merge(furthest.take()) {
                            ParseResult::Success { value, next, furthest: seen } => {
                                at = next;
                                furthest = seen;
                                value
                            }
                            ParseResult::Failure { expected } => {
                                return ParseResult::Failure { expected };
                            }
                        };
                    )+
                    ParseResult::Success {
                        value: ($($value,)+),
                        next: at,
                        furthest,
                    }
                })
            }
        }
    };
}

impl_sequence_for_tuple!((A, pa, a), (B, pb, b));
impl_sequence_for_tuple!((A, pa, a), (B, pb, b), (C, pc, c));
impl_sequence_for_tuple!((A, pa, a), (B, pb, b), (C, pc, c), (D, pd, d));
impl_sequence_for_tuple!((A, pa, a), (B, pb, b), (C, pc, c), (D, pd, d), (E, pe, e));
impl_sequence_for_tuple!(
    (A, pa, a),
    (B, pb, b),
    (C, pc, c),
    (D, pd, d),
    (E, pe, e),
    (F, pf, f)
);

/// Parses every parser in order and yields all their values.
///
/// Takes a tuple of up to six parsers of any value types, or a `Vec` of
/// parsers sharing one value type.
pub fn all<S, I>(parsers: S) -> Parser<S::Output, I>
where
    S: Sequence<I>,
    I: Input,
{
    parsers.into_parser()
}

/// Tries each parser in turn and yields the first success.
///
/// An empty set of alternatives always fails.
pub fn choice<A, I, It>(parsers: It) -> Parser<A, I>
where
    A: 'static,
    I: Input + 'static,
    It: IntoIterator<Item = Parser<A, I>>,
{
    parsers
        .into_iter()
        .reduce(Parser::or)
        .unwrap_or_else(|| fail(Vec::<String>::new()))
}
