//! Text buffer — the text the motions walk over.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with the read-only queries the blank
//! boundary scanners need: line bounds, character access, conversion from
//! `Position` (line, col) to rope char indices, and the display-column
//! arithmetic used to keep a vertical motion in one visual column.
//!
//! # Design choices
//!
//! - **ropey** provides O(log n) line indexing and char access, so probing a
//!   neighbor line or character during a scan is cheap.
//!
//! - **Line breaks are LF, CR and CRLF.** ropey is built with `cr_lines`
//!   only, so form feeds, VT, NEL and U+2028/U+2029 are ordinary characters
//!   inside a line and line numbers match what other tools report.
//!
//! - **Columns are char offsets**, not byte offsets. Display columns (tabs
//!   expanded, wide characters counted twice) are a separate, derived view.
//!
//! - **Read-only.** Scanners never mutate text; the only mutation a motion
//!   performs is moving the cursor, which lives outside the buffer.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use ropey::{Rope, RopeSlice};
use unicode_width::UnicodeWidthChar;

use crate::fill::is_blank;
use crate::position::Position;

/// A text buffer backed by a rope.
///
/// All positions are 0-indexed `(line, col)` pairs. Columns count Unicode
/// scalar values (chars). Use [`pos_to_char_idx`](Self::pos_to_char_idx)
/// for the absolute-offset view.
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    // -- Text access --------------------------------------------------------

    /// Total number of lines. An empty buffer has 1 line (the empty line).
    /// A buffer ending with `\n` has a trailing empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count (Unicode scalar values, not bytes).
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get a line by 0-indexed line number, including its line ending.
    /// Returns `None` if `line >= line_count()`.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        if line < self.rope.len_lines() {
            Some(self.rope.line(line))
        } else {
            None
        }
    }

    /// Number of chars in a line **excluding** its line ending (`\n`,
    /// `\r\n`, `\r`, the only breaks the rope recognizes). Column
    /// `content_len` is the end-of-line position.
    ///
    /// Returns `None` if the line doesn't exist.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|rope_line| {
            let total = rope_line.len_chars();
            if total == 0 {
                return 0;
            }
            let last = rope_line.char(total - 1);
            if last == '\n' {
                if total >= 2 && rope_line.char(total - 2) == '\r' {
                    total - 2
                } else {
                    total - 1
                }
            } else if last == '\r' {
                total - 1
            } else {
                // Last line with no trailing newline.
                total
            }
        })
    }

    /// Get the character at a position. Returns `None` if the position is
    /// out of bounds.
    #[must_use]
    pub fn char_at(&self, pos: Position) -> Option<char> {
        let idx = self.pos_to_char_idx(pos)?;
        if idx < self.rope.len_chars() {
            Some(self.rope.char(idx))
        } else {
            None
        }
    }

    /// True when a line is empty or holds only blanks (spaces and tabs).
    /// Lines past the end of the buffer are not blank lines.
    #[must_use]
    pub fn is_blank_line(&self, line: usize) -> bool {
        match (self.line(line), self.line_content_len(line)) {
            (Some(rope_line), Some(len)) => rope_line.chars().take(len).all(is_blank),
            _ => false,
        }
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `Position` to an absolute char index in the rope.
    ///
    /// Returns `None` if the line is out of bounds or the column exceeds the
    /// line's total char count (including line ending). A column exactly equal
    /// to the line's char count is valid.
    #[must_use]
    pub fn pos_to_char_idx(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(pos.line);
        let line_len = self.rope.line(pos.line).len_chars();
        if pos.col > line_len {
            return None;
        }
        Some(line_start + pos.col)
    }

    // -- Display columns ----------------------------------------------------

    /// Display column of a position: tabs expand to the next multiple of
    /// `tab_width`, wide characters take two cells.
    #[must_use]
    pub fn display_col(&self, pos: Position, tab_width: u8) -> usize {
        self.line(pos.line)
            .map_or(0, |line| char_col_to_display_col(line.chars(), pos.col, tab_width))
    }

    /// Walk `line` until reaching display column `target` or the end of the
    /// line's content. Returns the display column actually reached and the
    /// position there.
    ///
    /// The achieved column is smaller than `target` when the line is too
    /// short, and can be larger when a tab or wide character straddles the
    /// target (the walk stops just past it). Returns `None` for a line past
    /// the end of the buffer.
    #[must_use]
    pub fn move_to_display_col(
        &self,
        line: usize,
        target: usize,
        tab_width: u8,
    ) -> Option<(usize, Position)> {
        let rope_line = self.line(line)?;
        let len = self.line_content_len(line)?;
        let tab_w = usize::from(tab_width.max(1));

        let mut display = 0;
        let mut col = 0;
        for ch in rope_line.chars().take(len) {
            if display >= target {
                break;
            }
            display = match ch {
                '\t' => (display / tab_w + 1) * tab_w,
                _ => display + ch.width().unwrap_or(0),
            };
            col += 1;
        }

        Some((display, Position::new(line, col)))
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .finish()
    }
}

/// Convert a char column offset to a display column.
///
/// Walks the character iterator, expanding tabs to the next tab stop and
/// accounting for wide characters. Stops at `char_col` or at a line ending.
#[must_use]
pub fn char_col_to_display_col<I: Iterator<Item = char>>(
    chars: I,
    char_col: usize,
    tab_width: u8,
) -> usize {
    let tab_w = usize::from(tab_width.max(1));
    let mut display_col = 0;

    for (i, ch) in chars.enumerate() {
        if i >= char_col {
            break;
        }
        match ch {
            '\n' | '\r' => break,
            '\t' => display_col = (display_col / tab_w + 1) * tab_w,
            _ => display_col += ch.width().unwrap_or(0),
        }
    }

    display_col
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
