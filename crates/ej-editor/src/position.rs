//! Text position, range, and direction types.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 is the
//! first character. Columns count Unicode scalar values (chars), not bytes or
//! display cells. The display-column view (tabs, wide characters) lives on
//! [`Buffer`](crate::buffer::Buffer), because it depends on the line's text.
//!
//! The absolute view of a position (a char offset into the rope) is obtained
//! through [`Buffer::pos_to_char_idx`](crate::buffer::Buffer::pos_to_char_idx).

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A position in a text buffer: (line, column), both 0-indexed.
///
/// `col` may equal the line's content length — that is the end-of-line
/// position, just before the line terminator. Scanners land there when a
/// boundary is found at the end of a line.
///
/// # Ordering
///
/// Lexicographic: line first, then column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The origin — line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Same line, different column.
    #[inline]
    #[must_use]
    pub const fn with_col(self, col: usize) -> Self {
        Self {
            line: self.line,
            col,
        }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for human display.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A selected range, always normalized so `start <= end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Build a range from two arbitrary positions, swapping if needed. Used for
    /// anchor + head selections where the head may sit before the anchor.
    #[inline]
    #[must_use]
    pub fn ordered(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Travel direction of a motion.
///
/// Counts are signed at the public surface: the sign picks the direction and
/// the magnitude the number of repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Down for vertical motions, right for horizontal ones (`+1`).
    Forward,
    /// Up for vertical motions, left for horizontal ones (`-1`).
    Backward,
}

impl Direction {
    /// `+1` or `-1`.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Direction selected by the sign of a count. Zero has no direction.
    #[inline]
    #[must_use]
    pub const fn from_count(count: isize) -> Option<Self> {
        if count > 0 {
            Some(Self::Forward)
        } else if count < 0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    /// Step `index` one unit in this direction. Returns `None` when the step
    /// would leave `0..limit`.
    #[inline]
    #[must_use]
    pub const fn step(self, index: usize, limit: usize) -> Option<usize> {
        match self {
            Self::Forward => {
                if index + 1 < limit {
                    Some(index + 1)
                } else {
                    None
                }
            }
            Self::Backward => index.checked_sub(1),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
