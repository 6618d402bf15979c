use std::fmt;

/// A cursor into some input that parsers can compare and report.
///
/// Positions are small `Copy` values. Backtracking is done by keeping an
/// older position around and parsing from it again.
pub trait Location: Copy + fmt::Debug + fmt::Display + PartialEq + 'static {
    /// Offset from the start of the input, in code units.
    fn offset(&self) -> usize;
}

/// Represents a position in source text.
///
/// `offset` is a byte offset into the UTF-8 buffer and can be used for
/// slicing. `line` and `column` count Unicode scalar values so that they
/// stay meaningful for multi-byte characters such as emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Returns the position reached after consuming `consumed`, which must be
    /// the text starting at this position.
    ///
    /// Every char found in `delimiters` starts a new line.
    pub fn advance(self, consumed: &str, delimiters: &[char]) -> Self {
        if consumed.is_empty() {
            return self;
        }
        let mut line = self.line;
        let mut column = self.column;
        for ch in consumed.chars() {
            if delimiters.contains(&ch) {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            line,
            column,
            offset: self.offset + consumed.len(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Location for Position {
    fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Position inside a byte buffer. Bytes have no lines, only an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BytePosition {
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl BytePosition {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }
}

impl Location for BytePosition {
    fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for BytePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}", self.offset)
    }
}
