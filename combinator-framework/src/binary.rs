//! Parsers over [`Bytes`] input.

use crate::parser::Parser;
use crate::result::ParseResult;
use common_framework::{BytePosition, Bytes, Input};

/// Matches exactly the byte sequence `literal`.
pub fn bytes<B: Into<Vec<u8>>>(literal: B) -> Parser<Vec<u8>, Bytes> {
    let literal = literal.into();
    let name = describe(&literal);
    Parser::new(move |input: &Bytes, at: BytePosition| {
        if input.remaining(at).starts_with(&literal) {
            ParseResult::success(literal.clone(), input.seek(at, at.offset + literal.len()))
        } else {
            ParseResult::failure(at, [name.as_str()])
        }
    })
}

/// Matches the UTF-8 encoding of `text` and yields `text`.
pub fn text<S: Into<String>>(text: S) -> Parser<String, Bytes> {
    let text = text.into();
    let value = text.clone();
    bytes(text.as_bytes())
        .map(move |_| value.clone())
        .desc([text])
}

/// Takes the next `count` bytes, whatever they are.
pub fn take(count: usize) -> Parser<Vec<u8>, Bytes> {
    let name = format!("{count} bytes");
    Parser::new(move |input: &Bytes, at: BytePosition| {
        match input.remaining(at).get(..count) {
            Some(taken) => ParseResult::success(taken.to_vec(), input.seek(at, at.offset + count)),
            None => ParseResult::failure(at, [name.as_str()]),
        }
    })
}

/// Matches `value` encoded as a big-endian 16-bit integer.
pub fn i16_be(value: i16) -> Parser<i16, Bytes> {
    bytes(value.to_be_bytes())
        .map(move |_| value)
        .desc([value.to_string()])
}

/// Matches `value` encoded as a big-endian 64-bit integer.
pub fn i64_be(value: i64) -> Parser<i64, Bytes> {
    bytes(value.to_be_bytes())
        .map(move |_| value)
        .desc([value.to_string()])
}

fn describe(literal: &[u8]) -> String {
    match std::str::from_utf8(literal) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let hex: String = literal.iter().map(|byte| format!("{byte:02x}")).collect();
            format!("0x{hex}")
        }
    }
}
