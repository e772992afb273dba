//! Positions and ranges used to locate segments within a chat message.
//!
//! Two co-ordinate systems run in parallel: zero-based byte offsets into
//! the UTF-8 message text, and 1-based line/column editor positions where
//! columns count characters. Segments carry both so consumers can address
//! the raw string and the editor buffer without re-deriving either.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line and column position within a chat message.
///
/// Columns count characters rather than bytes, so positions stay
/// meaningful in editors when the message contains multi-byte characters.
///
/// # Examples
///
/// ```
/// use aalto::chat_request::domain::Position;
///
/// let start = Position::start();
/// assert_eq!(start.advanced('a'), Position::new(1, 2));
/// assert_eq!(start.advanced('\n'), Position::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
}

impl Position {
    /// Creates a position from 1-based line and column values.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the position of a message's first character.
    #[must_use]
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Returns the position immediately after `character`.
    ///
    /// A newline moves to column 1 of the next line; any other character
    /// advances the column by one. Arithmetic saturates, so degenerate
    /// input cannot wrap the counters.
    #[must_use]
    pub const fn advanced(self, character: char) -> Self {
        if character == '\n' {
            Self {
                line: self.line.saturating_add(1),
                column: 1,
            }
        } else {
            Self {
                line: self.line,
                column: self.column.saturating_add(1),
            }
        }
    }

    /// Returns the position shifted right by `columns` characters on the
    /// same line.
    #[must_use]
    pub const fn shifted(self, columns: u32) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add(columns),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open `[start, end)` byte range within the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetRange {
    /// Zero-based byte offset of the first byte covered.
    pub start: usize,
    /// Zero-based byte offset one past the last byte covered.
    pub end: usize,
}

impl OffsetRange {
    /// Creates a byte range; `end` is exclusive.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` when the range covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// An editor range: the position of a span's first character and the
/// position one past its last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    /// Position of the first character.
    pub start: Position,
    /// Position one past the last character.
    pub end: Position,
}

impl TextRange {
    /// Creates an editor range from start and end positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns `true` when `end` does not precede `start`.
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.start.line < self.end.line
            || (self.start.line == self.end.line && self.start.column <= self.end.column)
    }
}
