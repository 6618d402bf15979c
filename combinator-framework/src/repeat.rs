use crate::error::GrammarError;
use crate::parser::Parser;
use crate::result::ParseResult;
use common_framework::{Input, Location};
use std::ops::{Bound, RangeBounds};

/// How many times a repetition may match. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl Bounds {
    /// Validates a range such as `..`, `1..`, `2..=3` or `..4`.
    ///
    /// Empty and inverted ranges are rejected; `combinator` names the caller
    /// in the error.
    pub fn from_range<R>(combinator: &'static str, range: R) -> Result<Self, GrammarError>
    where
        R: RangeBounds<usize>,
    {
        let bad_range = || GrammarError::BadRange {
            combinator,
            range: describe(range.start_bound(), range.end_bound()),
        };
        let min = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.checked_add(1).ok_or_else(bad_range)?,
            Bound::Unbounded => 0,
        };
        let max = match range.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => Some(n.checked_sub(1).ok_or_else(bad_range)?),
            Bound::Unbounded => None,
        };
        if max.is_some_and(|max| min > max) {
            return Err(bad_range());
        }
        Ok(Self { min, max })
    }

    fn allows_more(&self, count: usize) -> bool {
        self.max.map_or(true, |max| count < max)
    }
}

fn describe(start: Bound<&usize>, end: Bound<&usize>) -> String {
    let start = match start {
        Bound::Included(n) => n.to_string(),
        Bound::Excluded(n) => format!("{n}<"),
        Bound::Unbounded => String::new(),
    };
    let end = match end {
        Bound::Included(n) => format!("..={n}"),
        Bound::Excluded(n) => format!("..{n}"),
        Bound::Unbounded => "..".to_string(),
    };
    format!("{start}{end}")
}

impl<A: 'static, I: Input + 'static> Parser<A, I> {
    /// Matches `self` as many times as `range` allows and yields the values.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty or inverted. Running the parser panics if an
    /// unbounded repetition matches without consuming input, since that
    /// would loop forever.
    pub fn repeat<R: RangeBounds<usize>>(self, range: R) -> Parser<Vec<A>, I> {
        self.try_repeat(range).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`Parser::repeat`] but returns range errors instead of panicking.
    pub fn try_repeat<R: RangeBounds<usize>>(
        self,
        range: R,
    ) -> Result<Parser<Vec<A>, I>, GrammarError> {
        Ok(self.repeat_within(Bounds::from_range("repeat", range)?))
    }

    /// Matches `self` separated by `separator`, e.g. comma-separated items.
    ///
    /// # Panics
    ///
    /// Same as [`Parser::repeat`]. A range whose upper bound is zero is also
    /// rejected.
    pub fn sep_by<B, R>(self, separator: Parser<B, I>, range: R) -> Parser<Vec<A>, I>
    where
        B: 'static,
        R: RangeBounds<usize>,
    {
        self.try_sep_by(separator, range)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`Parser::sep_by`] but returns range errors instead of panicking.
    pub fn try_sep_by<B, R>(
        self,
        separator: Parser<B, I>,
        range: R,
    ) -> Result<Parser<Vec<A>, I>, GrammarError>
    where
        B: 'static,
        R: RangeBounds<usize>,
    {
        let described = describe(range.start_bound(), range.end_bound());
        let bounds = Bounds::from_range("sep_by", range)?;
        // Every list has at least one item once `min == 0` is split off.
        if bounds.max == Some(0) {
            return Err(GrammarError::BadRange {
                combinator: "sep_by",
                range: described,
            });
        }
        Ok(self.sep_by_within(separator, bounds))
    }

    fn repeat_within(self, bounds: Bounds) -> Parser<Vec<A>, I> {
        Parser::new(move |input, start| {
            let mut items = Vec::new();
            let mut at = start;
            let mut furthest = None;
            while bounds.allows_more(items.len()) {
                match self.parse_at(input, at).merge(furthest.take()) {
                    ParseResult::Success {
                        value,
                        next,
                        furthest: seen,
                    } => {
                        if bounds.max.is_none() && next.offset() == at.offset() {
                            panic!("{}", GrammarError::InfiniteLoop);
                        }
                        items.push(value);
                        at = next;
                        furthest = seen;
                    }
                    ParseResult::Failure { expected } => {
                        if items.len() < bounds.min {
                            return ParseResult::Failure { expected };
                        }
                        furthest = Some(expected);
                        break;
                    }
                }
            }
            ParseResult::Success {
                value: items,
                next: at,
                furthest,
            }
        })
    }

    fn sep_by_within<B: 'static>(self, separator: Parser<B, I>, bounds: Bounds) -> Parser<Vec<A>, I> {
        if bounds.min == 0 {
            let none = Parser::new(|_, at| ParseResult::success(Vec::new(), at));
            return self
                .sep_by_within(separator, Bounds { min: 1, ..bounds })
                .or(none);
        }
        if bounds.max == Some(1) {
            return self.map(|item| vec![item]);
        }
        let rest = separator.next(self.clone()).repeat_within(Bounds {
            min: bounds.min - 1,
            max: bounds.max.map(|max| max - 1),
        });
        self.and(rest).map(|(first, rest)| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest);
            items
        })
    }
}
