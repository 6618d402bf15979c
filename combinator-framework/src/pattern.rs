//! Regular expression matching anchored at the current position.

use crate::error::GrammarError;
use crate::parser::Parser;
use crate::result::ParseResult;
use common_framework::{Input, Position, Text};
use regex_automata::util::syntax;
use regex_automata::{meta, Anchored};

/// Matches `pattern` starting exactly at the current position.
///
/// Capture groups are ignored; the whole match is yielded. Don't start the
/// pattern with `^`: matching is already anchored, and `^` only matches at
/// the very start of the input.
pub fn regex(pattern: &str) -> Result<Parser<String>, GrammarError> {
    regex_with_flags(pattern, "")
}

/// Flags in the order they are rendered in expectation names.
const FLAGS: &str = "imsu";

/// Like [`regex`] with JavaScript-style flags.
///
/// Supported flags are `i` (ignore case), `s` (`.` matches `\n`), `m`
/// (`^`/`$` match at line breaks) and `u` (unicode, always enabled for text).
/// Each flag may appear once. The expectation name lists them in `imsu`
/// order whatever order they were given in.
pub fn regex_with_flags(pattern: &str, flags: &str) -> Result<Parser<String>, GrammarError> {
    let mut config = syntax::Config::new();
    let mut seen = String::new();
    for flag in flags.chars() {
        if seen.contains(flag) {
            return Err(GrammarError::DuplicateFlag(flag));
        }
        seen.push(flag);
        config = match flag {
            'i' => config.case_insensitive(true),
            's' => config.dot_matches_new_line(true),
            'm' => config.multi_line(true),
            'u' => config.unicode(true),
            other => return Err(GrammarError::UnsupportedFlag(other)),
        };
    }
    let compiled = meta::Regex::builder()
        .syntax(config)
        .build(pattern)
        .map_err(|err| GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;
    let ordered: String = FLAGS.chars().filter(|flag| seen.contains(*flag)).collect();
    let source = format!("/{pattern}/{ordered}");

    Ok(Parser::new(move |input: &Text, at: Position| {
        let haystack = regex_automata::Input::new(input.as_str())
            .range(at.offset..)
            .anchored(Anchored::Yes);
        match compiled.search(&haystack) {
            Some(found) => {
                let matched = input.as_str()[at.offset..found.end()].to_string();
                ParseResult::success(matched, input.seek(at, found.end()))
            }
            None => ParseResult::failure(at, [source.as_str()]),
        }
    }))
}
