//! Bounded repetition and separated lists.

use combinator_framework::{literal, parse, GrammarError, Parser, EOF};
use pretty_assertions::assert_eq;

fn failure_of<A: std::fmt::Debug + 'static>(
    parser: &Parser<A>,
    input: &str,
) -> (usize, Vec<String>) {
    let failure = parse(parser, input).unwrap_err();
    (failure.location.offset, failure.expected)
}

#[test]
fn test_repeat_unbounded() {
    let parser = literal("a").repeat(..);
    assert_eq!(parse(&parser, ""), Ok(vec![]));
    assert_eq!(parse(&parser, "aaa").map(|v| v.len()), Ok(3));
}

#[test]
fn test_repeat_at_least_one() {
    let parser = literal("a").repeat(1..);
    assert_eq!(failure_of(&parser, ""), (0, vec!["a".to_string()]));
    assert_eq!(parse(&parser, "a").map(|v| v.len()), Ok(1));
}

#[test]
fn test_repeat_between() {
    let parser = literal("a").repeat(2..=3);
    assert_eq!(failure_of(&parser, ""), (0, vec!["a".to_string()]));
    assert_eq!(failure_of(&parser, "a"), (1, vec!["a".to_string()]));
    assert_eq!(parse(&parser, "aa").map(|v| v.len()), Ok(2));
    assert_eq!(parse(&parser, "aaa").map(|v| v.len()), Ok(3));
    assert_eq!(failure_of(&parser, "aaaa"), (3, vec![EOF.to_string()]));
}

#[test]
fn test_repeat_stop_reports_both_options() {
    let parser = literal("a").repeat(2..=3);
    assert_eq!(
        failure_of(&parser, "aab"),
        (2, vec!["a".to_string(), EOF.to_string()])
    );
}

#[test]
fn test_repeat_exclusive_end() {
    let parser = literal("a").repeat(..3);
    assert_eq!(parse(&parser, "aa").map(|v| v.len()), Ok(2));
    assert_eq!(failure_of(&parser, "aaa"), (2, vec![EOF.to_string()]));
}

#[test]
fn test_bounded_repeat_of_empty_match_stops() {
    let parser = literal("").repeat(0..=5);
    assert_eq!(parse(&parser, ""), Ok(vec![String::new(); 5]));
}

#[test]
#[should_panic(expected = "infinite loop detected")]
fn test_unbounded_repeat_of_empty_match_panics() {
    let parser = literal("").repeat(..);
    let _ = parse(&parser, "");
}

#[test]
#[should_panic(expected = "infinite loop detected")]
fn test_unbounded_repeat_of_optional_panics() {
    let optional = literal("a").or(literal(""));
    let _ = parse(&optional.repeat(1..), "aab");
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
#[should_panic(expected = "repeat: bad range (3..=2)")]
fn test_repeat_bad_range_panics() {
    let _ = literal("a").repeat(3..=2);
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn test_try_repeat_bad_range() {
    let err = literal("a").try_repeat(3..=2).unwrap_err();
    assert_eq!(
        err,
        GrammarError::BadRange {
            combinator: "repeat",
            range: "3..=2".to_string(),
        }
    );
    assert!(literal("a").try_repeat(1..=1).is_ok());
}

#[test]
fn test_sep_by_any() {
    let parser = literal("a").sep_by(literal(","), ..);
    assert_eq!(parse(&parser, ""), Ok(vec![]));
    assert_eq!(parse(&parser, "a").map(|v| v.len()), Ok(1));
    assert_eq!(parse(&parser, "a,a,a").map(|v| v.len()), Ok(3));
}

#[test]
fn test_sep_by_trailing_separator() {
    let parser = literal("a").sep_by(literal(","), ..);
    assert_eq!(failure_of(&parser, "a,a,"), (4, vec!["a".to_string()]));
}

#[test]
fn test_sep_by_exactly_one() {
    let parser = literal("a").sep_by(literal(","), 1..=1);
    assert_eq!(parse(&parser, "a"), Ok(vec!["a".to_string()]));
    assert_eq!(failure_of(&parser, "a,a"), (1, vec![EOF.to_string()]));
}

#[test]
fn test_sep_by_between() {
    let parser = literal("a").sep_by(literal(","), 2..=3);
    assert_eq!(failure_of(&parser, "a"), (1, vec![",".to_string()]));
    assert_eq!(parse(&parser, "a,a").map(|v| v.len()), Ok(2));
    assert_eq!(parse(&parser, "a,a,a").map(|v| v.len()), Ok(3));
    assert_eq!(failure_of(&parser, "a,a,a,a"), (5, vec![EOF.to_string()]));
}

#[test]
fn test_try_sep_by_rejects_zero_upper_bound() {
    let err = literal("a").try_sep_by(literal(","), ..=0).unwrap_err();
    assert_eq!(
        err,
        GrammarError::BadRange {
            combinator: "sep_by",
            range: "..=0".to_string(),
        }
    );
    assert!(literal("a").try_sep_by(literal(","), 0..1).is_err());
    assert!(literal("a").try_sep_by(literal(","), ..=1).is_ok());
}

#[test]
#[should_panic(expected = "sep_by: bad range (..=0)")]
fn test_sep_by_zero_upper_bound_panics() {
    let _ = literal("a").sep_by(literal(","), ..=0);
}

#[test]
fn test_sep_by_at_most_one() {
    let parser = literal("a").sep_by(literal(","), ..=1);
    assert_eq!(parse(&parser, ""), Ok(vec![]));
    assert_eq!(parse(&parser, "a"), Ok(vec!["a".to_string()]));
    assert_eq!(failure_of(&parser, "a,a"), (1, vec![EOF.to_string()]));
}

#[test]
fn test_sep_by_keeps_values_in_order() {
    let digit = literal("1").or(literal("2")).or(literal("3"));
    let parser = digit.sep_by(literal(";"), 1..);
    assert_eq!(
        parse(&parser, "3;1;2"),
        Ok(vec!["3".to_string(), "1".into(), "2".into()])
    );
}

#[test]
fn test_try_sep_by_bad_range() {
    #[allow(clippy::reversed_empty_ranges)]
    let err = literal("a").try_sep_by(literal(","), 5..5).unwrap_err();
    assert_eq!(err.to_string(), "sep_by: bad range (5..5)");
}
