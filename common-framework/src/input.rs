use crate::position::{BytePosition, Location, Position};
use std::sync::Arc;

/// Read-only input that parsers run over.
///
/// The input never changes during a parse. Parsers move forward by asking the
/// input for the position at a later offset, and backtrack by reusing a
/// position they kept.
pub trait Input {
    /// The position type tracked for this kind of input.
    type Position: Location;

    /// Returns the position at the start of the input.
    fn start(&self) -> Self::Position;

    /// Returns the length of the input in code units.
    fn len(&self) -> usize;

    /// Returns true if the input has no content at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `at` is at or beyond the end of the input.
    fn is_eof(&self, at: Self::Position) -> bool {
        at.offset() >= self.len()
    }

    /// Returns the position at `offset`, scanning forward from `from`.
    ///
    /// `offset` must not be smaller than `from.offset()`.
    fn seek(&self, from: Self::Position, offset: usize) -> Self::Position;
}

/// Text input with line/column tracking.
#[derive(Debug, Clone)]
pub struct Text {
    buffer: Arc<str>,
    delimiters: Vec<char>,
}

impl Text {
    /// Creates text input where `\n` separates lines.
    pub fn new<S: Into<Arc<str>>>(input: S) -> Self {
        Self {
            buffer: input.into(),
            delimiters: vec!['\n'],
        }
    }

    /// Replaces the set of chars that start a new line.
    pub fn with_line_delimiters<D>(mut self, delimiters: D) -> Self
    where
        D: IntoIterator<Item = char>,
    {
        self.delimiters = delimiters.into_iter().collect();
        self
    }

    /// Returns the whole input.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns the chars that start a new line.
    pub fn line_delimiters(&self) -> &[char] {
        &self.delimiters
    }

    /// Returns the input from `at` to the end.
    pub fn remaining(&self, at: Position) -> &str {
        self.buffer.get(at.offset..).unwrap_or("")
    }
}

impl Input for Text {
    type Position = Position;

    fn start(&self) -> Position {
        Position::new()
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn seek(&self, from: Position, offset: usize) -> Position {
        if offset == from.offset {
            return from;
        }
        debug_assert!(offset > from.offset);
        debug_assert!(offset <= self.buffer.len());
        from.advance(&self.buffer[from.offset..offset], &self.delimiters)
    }
}

impl From<&str> for Text {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

impl From<String> for Text {
    fn from(input: String) -> Self {
        Self::new(input)
    }
}

/// Binary input, tracked by offset only.
#[derive(Debug, Clone)]
pub struct Bytes {
    buffer: Arc<[u8]>,
}

impl Bytes {
    pub fn new<B: Into<Arc<[u8]>>>(input: B) -> Self {
        Self {
            buffer: input.into(),
        }
    }

    /// Returns the whole input.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the input from `at` to the end.
    pub fn remaining(&self, at: BytePosition) -> &[u8] {
        self.buffer.get(at.offset..).unwrap_or(&[])
    }
}

impl Input for Bytes {
    type Position = BytePosition;

    fn start(&self) -> BytePosition {
        BytePosition::default()
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn seek(&self, from: BytePosition, offset: usize) -> BytePosition {
        debug_assert!(offset >= from.offset);
        BytePosition::new(offset)
    }
}

impl From<&[u8]> for Bytes {
    fn from(input: &[u8]) -> Self {
        Self::new(input)
    }
}

impl<const N: usize> From<&[u8; N]> for Bytes {
    fn from(input: &[u8; N]) -> Self {
        Self::new(&input[..])
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(input: Vec<u8>) -> Self {
        Self::new(input)
    }
}
