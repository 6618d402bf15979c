/// Mistakes in how a grammar is put together.
///
/// These never depend on the input being parsed. They are reported when the
/// grammar is built (or, for [`GrammarError::InfiniteLoop`], the first time the
/// faulty repetition runs).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("{combinator}: bad range ({range})")]
    BadRange {
        combinator: &'static str,
        range: String,
    },

    #[error("only the regex flags 'imsu' are supported, got '{0}'")]
    UnsupportedFlag(char),

    #[error("regex flag '{0}' given more than once")]
    DuplicateFlag(char),

    #[error("invalid regex /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error(
        "infinite loop detected; don't call repeat() with parsers that can accept zero characters"
    )]
    InfiniteLoop,
}
