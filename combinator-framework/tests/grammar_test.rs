//! A small JSON grammar exercising recursion, trimming and diagnostics.
#![cfg(feature = "regex")]

use combinator_framework::{all, choice, lazy, literal, parse, regex, Parser, Position};
use indoc::indoc;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

fn whitespace() -> Parser<String> {
    regex(r"\s*").unwrap()
}

fn token(text: &str) -> Parser<String> {
    literal(text).skip(whitespace())
}

fn number() -> Parser<Json> {
    regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
        .unwrap()
        .map(|digits| Json::Number(digits.parse().unwrap()))
        .desc(["number"])
        .skip(whitespace())
}

fn string() -> Parser<String> {
    regex(r#""[^"]*""#)
        .unwrap()
        .map(|quoted| quoted[1..quoted.len() - 1].to_string())
        .desc(["string"])
        .skip(whitespace())
}

fn array() -> Parser<Json> {
    value()
        .sep_by(token(","), ..)
        .wrap(token("["), token("]"))
        .map(Json::Array)
}

fn object() -> Parser<Json> {
    all((string().skip(token(":")), value()))
        .sep_by(token(","), ..)
        .wrap(token("{"), token("}"))
        .map(Json::Object)
}

fn value() -> Parser<Json> {
    choice([
        token("null").map(|_| Json::Null),
        token("true").map(|_| Json::Bool(true)),
        token("false").map(|_| Json::Bool(false)),
        number(),
        string().map(Json::String),
        lazy(array),
        lazy(object),
    ])
}

fn document() -> Parser<Json> {
    whitespace().next(value())
}

#[test]
fn test_scalars() {
    assert_eq!(parse(&document(), "null"), Ok(Json::Null));
    assert_eq!(parse(&document(), " true "), Ok(Json::Bool(true)));
    assert_eq!(parse(&document(), "-2.5e1"), Ok(Json::Number(-25.0)));
    assert_eq!(
        parse(&document(), r#""hi""#),
        Ok(Json::String("hi".to_string()))
    );
}

#[test]
fn test_nested_document() {
    let source = indoc! {r#"
        {
          "name": "combinator",
          "tags": [1, [], {"deep": [null, false]}],
          "empty": {}
        }
    "#};
    let expected = Json::Object(vec![
        ("name".to_string(), Json::String("combinator".to_string())),
        (
            "tags".to_string(),
            Json::Array(vec![
                Json::Number(1.0),
                Json::Array(vec![]),
                Json::Object(vec![(
                    "deep".to_string(),
                    Json::Array(vec![Json::Null, Json::Bool(false)]),
                )]),
            ]),
        ),
        ("empty".to_string(), Json::Object(vec![])),
    ]);
    assert_eq!(parse(&document(), source), Ok(expected));
}

#[test]
fn test_trailing_comma_location() {
    let source = indoc! {r#"
        {
          "name": "combinator",
          "tags": [1, 2,]
        }
    "#};
    let failure = parse(&document(), source).unwrap_err();
    assert_eq!(failure.location, Position::at(3, 17, 42));
    assert_eq!(
        failure.expected,
        vec!["null", "true", "false", "number", "string", "[", "{"]
    );
}

#[test]
fn test_missing_colon() {
    let failure = parse(&document(), r#"{"a" 1}"#).unwrap_err();
    assert_eq!(failure.location.column, 6);
    assert_eq!(failure.expected, vec![":"]);
}

#[test]
fn test_unclosed_array_message() {
    let failure = parse(&document(), "[1, 2").unwrap_err();
    assert_eq!(
        failure.to_string(),
        "parse error at line 1 column 6: expected ,, ]"
    );
}
