use crate::expected::Expected;
use common_framework::Location;

/// The outcome of running a parser from one position.
///
/// Both variants carry diagnostic information. A success remembers the
/// furthest failure seen on its way (if any) so that a later failure can
/// still report it. Results are never patched in place; combinators build new
/// ones with [`ParseResult::merge`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<A, P> {
    Success {
        value: A,
        /// Where the next parser should start.
        next: P,
        furthest: Option<Expected<P>>,
    },
    Failure { expected: Expected<P> },
}

impl<A, P: Location> ParseResult<A, P> {
    /// A success with no failure information attached.
    pub fn success(value: A, next: P) -> Self {
        ParseResult::Success {
            value,
            next,
            furthest: None,
        }
    }

    /// A failure at `at` that was looking for `names`.
    pub fn failure<N, It>(at: P, names: It) -> Self
    where
        N: Into<String>,
        It: IntoIterator<Item = N>,
    {
        ParseResult::Failure {
            expected: Expected::new(at, names),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The furthest failure recorded by this result.
    pub fn furthest(&self) -> Option<&Expected<P>> {
        match self {
            ParseResult::Success { furthest, .. } => furthest.as_ref(),
            ParseResult::Failure { expected } => Some(expected),
        }
    }

    pub fn into_furthest(self) -> Option<Expected<P>> {
        match self {
            ParseResult::Success { furthest, .. } => furthest,
            ParseResult::Failure { expected } => Some(expected),
        }
    }

    /// Folds in the diagnostics of an earlier attempt.
    ///
    /// `self` is the result of the attempt that ran after (or instead of) the
    /// one that produced `earlier`. Value and next position come from `self`.
    pub fn merge(self, earlier: Option<Expected<P>>) -> Self {
        let Some(earlier) = earlier else {
            return self;
        };
        match self {
            ParseResult::Success {
                value,
                next,
                furthest,
            } => ParseResult::Success {
                value,
                next,
                furthest: Expected::merge(Some(earlier), furthest),
            },
            ParseResult::Failure { expected } => ParseResult::Failure {
                expected: earlier.absorb(expected),
            },
        }
    }

    /// Transforms the value of a success, leaving diagnostics untouched.
    pub fn map_value<B, F>(self, f: F) -> ParseResult<B, P>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            ParseResult::Success {
                value,
                next,
                furthest,
            } => ParseResult::Success {
                value: f(value),
                next,
                furthest,
            },
            ParseResult::Failure { expected } => ParseResult::Failure { expected },
        }
    }
}
