//! Fill classification — is there text here, or blank space?
//!
//! Two layers, both pure:
//!
//! - [`LineView::filled`] answers "is the character at this column a
//!   non-blank?" for one line, with a caller-supplied default for columns
//!   outside the line's content.
//! - [`is_empty_neighborhood`] looks at a column and its neighbors and decides
//!   whether the spot counts as empty space for the boundary scanners.
//!
//! The neighborhood rule smooths over single blanks: a lone space between two
//! words is *filled* for a block cursor, so `"ab c"` reads as one run of text.
//! Only runs of two or more blanks (or line edges) separate regions.
//!
//! | Shape   | Empty when                          |
//! |---------|-------------------------------------|
//! | `Block` | `!(curr \|\| (prev && next))`       |
//! | `Bar`   | `!(curr \|\| prev)`                 |

use std::fmt;

use ropey::RopeSlice;

use crate::buffer::Buffer;

// ---------------------------------------------------------------------------
// CursorShape
// ---------------------------------------------------------------------------

/// How the cursor is interpreted while scanning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// The cursor occupies a cell. Uses the symmetric prev/curr/next rule,
    /// and vertical scans treat end-of-line and short lines as empty.
    #[default]
    Block,
    /// The cursor is a zero-width caret before a cell. Only the cell after
    /// the caret and the one before it matter.
    Bar,
}

impl fmt::Display for CursorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => f.write_str("block"),
            Self::Bar => f.write_str("bar"),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Blank characters: space and tab. Line endings are not blanks — they are
/// outside every line's content range.
#[inline]
#[must_use]
pub const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

/// One line's content, with its bounds fixed.
///
/// Columns `0..len` are the content; everything else (negative offsets,
/// end-of-line, the terminator, other lines) is out of range and classified
/// by the default the caller passes.
#[derive(Clone, Copy)]
pub struct LineView<'a> {
    text: RopeSlice<'a>,
    len: usize,
}

impl<'a> LineView<'a> {
    /// View of `line`, or `None` past the end of the buffer.
    #[must_use]
    pub fn of(buf: &'a Buffer, line: usize) -> Option<Self> {
        Some(Self {
            text: buf.line(line)?,
            len: buf.line_content_len(line)?,
        })
    }

    /// Content length (the end-of-line column).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True for a line with no content.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `col` holds a non-blank character. `None` stands for the
    /// column before 0. Out-of-range columns return `default` unchanged.
    #[inline]
    #[must_use]
    pub fn filled(&self, col: Option<usize>, default: bool) -> bool {
        match col {
            Some(col) if col < self.len => !is_blank(self.text.char(col)),
            _ => default,
        }
    }
}

/// Whether the neighborhood of `col` counts as empty space for `shape`.
///
/// Neighbors outside the line inherit the classification of `col` itself, so
/// a line edge never makes a filled cell look empty or the reverse.
#[must_use]
pub fn is_empty_neighborhood(line: &LineView<'_>, col: usize, shape: CursorShape) -> bool {
    let curr = line.filled(Some(col), false);
    let prev = line.filled(col.checked_sub(1), curr);
    let next = line.filled(col.checked_add(1), curr);

    match shape {
        CursorShape::Block => !(curr || (prev && next)),
        CursorShape::Bar => !(curr || prev),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
