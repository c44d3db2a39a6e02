//! Cursor — position tracking with selection and blank-boundary jumps.
//!
//! The `Cursor` tracks a position in a buffer and an optional selection
//! anchor. It does not own or reference the buffer; the buffer is passed to
//! the methods that need it.
//!
//! # Jumps
//!
//! The four directional jumps take a **signed** count. A negative count runs
//! the opposite jump (`jump_down(-2)` is `jump_up(2)`), and zero is a no-op
//! reporting [`RepeatOutcome::NoMotion`].
//!
//! # Selection
//!
//! The anchor is never touched by a jump, so a jump made while a selection is
//! active extends that selection (Vim visual mode).

use crate::buffer::Buffer;
use crate::fill::CursorShape;
use crate::jump;
use crate::options::JumpOptions;
use crate::position::{Direction, Position, Range};
use crate::repeat::RepeatOutcome;

/// A cursor in a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Current position in the buffer.
    pos: Position,

    /// Selection anchor. When `Some`, the region between `anchor` and `pos`
    /// is selected.
    anchor: Option<Position>,
}

impl Cursor {
    /// Create a cursor at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos: Position::ZERO,
            anchor: None,
        }
    }

    /// Create a cursor at a specific position.
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self { pos, anchor: None }
    }

    // -- Accessors ----------------------------------------------------------

    /// Current position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.pos
    }

    /// Current line (0-indexed).
    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.pos.line
    }

    /// The selection anchor, if a selection is active.
    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    /// The selected range, ordered, if a selection is active.
    #[must_use]
    pub fn selection(&self) -> Option<Range> {
        self.anchor.map(|anchor| Range::ordered(anchor, self.pos))
    }

    // -- Selection control --------------------------------------------------

    /// Set the selection anchor at the current position.
    pub const fn set_anchor(&mut self) {
        self.anchor = Some(self.pos);
    }

    /// Clear the selection.
    pub const fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    // -- Direct positioning -------------------------------------------------

    /// Move to `pos`, clamped to the buffer. The end-of-line column is a
    /// valid column. Does not affect the anchor.
    pub fn set_position(&mut self, pos: Position, buf: &Buffer) {
        self.pos = clamp(pos, buf);
    }

    /// Move to a position the caller already knows is valid, such as a scan
    /// result. Does not affect the anchor.
    #[inline]
    pub const fn jump_to(&mut self, pos: Position) {
        self.pos = pos;
    }

    // -- Blank-boundary jumps -----------------------------------------------

    /// Jump down to the next blank/text boundary, `count` times.
    pub fn jump_down(
        &mut self,
        count: isize,
        buf: &Buffer,
        shape: CursorShape,
        opts: &JumpOptions,
    ) -> RepeatOutcome {
        match Direction::from_count(count) {
            Some(Direction::Forward) => {
                jump::vertical(self, buf, Direction::Forward, count.unsigned_abs(), shape, opts)
            }
            Some(Direction::Backward) => self.jump_up(count.saturating_neg(), buf, shape, opts),
            None => RepeatOutcome::NoMotion,
        }
    }

    /// Jump up to the previous blank/text boundary, `count` times.
    pub fn jump_up(
        &mut self,
        count: isize,
        buf: &Buffer,
        shape: CursorShape,
        opts: &JumpOptions,
    ) -> RepeatOutcome {
        match Direction::from_count(count) {
            Some(Direction::Forward) => {
                jump::vertical(self, buf, Direction::Backward, count.unsigned_abs(), shape, opts)
            }
            Some(Direction::Backward) => self.jump_down(count.saturating_neg(), buf, shape, opts),
            None => RepeatOutcome::NoMotion,
        }
    }

    /// Jump right to the next blank/text boundary on the line, `count` times.
    pub fn jump_right(
        &mut self,
        count: isize,
        buf: &Buffer,
        shape: CursorShape,
        opts: &JumpOptions,
    ) -> RepeatOutcome {
        match Direction::from_count(count) {
            Some(Direction::Forward) => {
                jump::horizontal(self, buf, Direction::Forward, count.unsigned_abs(), shape, opts)
            }
            Some(Direction::Backward) => self.jump_left(count.saturating_neg(), buf, shape, opts),
            None => RepeatOutcome::NoMotion,
        }
    }

    /// Jump left to the previous blank/text boundary on the line, `count`
    /// times.
    pub fn jump_left(
        &mut self,
        count: isize,
        buf: &Buffer,
        shape: CursorShape,
        opts: &JumpOptions,
    ) -> RepeatOutcome {
        match Direction::from_count(count) {
            Some(Direction::Forward) => {
                jump::horizontal(self, buf, Direction::Backward, count.unsigned_abs(), shape, opts)
            }
            Some(Direction::Backward) => self.jump_right(count.saturating_neg(), buf, shape, opts),
            None => RepeatOutcome::NoMotion,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a position to valid buffer bounds (end-of-line allowed).
fn clamp(pos: Position, buf: &Buffer) -> Position {
    let line = pos.line.min(buf.line_count().saturating_sub(1));
    let max_col = buf.line_content_len(line).unwrap_or(0);
    Position::new(line, pos.col.min(max_col))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffer() -> Buffer {
        // "alpha  beta\n"   (11 chars)
        // "gamma\n"
        // "\n"
        // "delta  epsilon"
        Buffer::from_text("alpha  beta\ngamma\n\ndelta  epsilon")
    }

    fn opts() -> JumpOptions {
        JumpOptions::default()
    }

    // -- Construction & selection -------------------------------------------

    #[test]
    fn new_at_origin() {
        let c = Cursor::new();
        assert_eq!(c.position(), Position::ZERO);
        assert!(c.anchor().is_none());
        assert_eq!(Cursor::default(), c);
    }

    #[test]
    fn selection_range_ordered() {
        let mut c = Cursor::at(Position::new(2, 5));
        c.set_anchor();
        c.jump_to(Position::new(0, 3));
        let sel = c.selection().unwrap();
        assert_eq!(sel.start, Position::new(0, 3));
        assert_eq!(sel.end, Position::new(2, 5));

        c.clear_anchor();
        assert!(c.selection().is_none());
    }

    #[test]
    fn set_position_clamps_to_end_of_line() {
        let buf = sample_buffer();
        let mut c = Cursor::new();
        c.set_position(Position::new(1, 100), &buf);
        assert_eq!(c.position(), Position::new(1, 5));
        c.set_position(Position::new(100, 0), &buf);
        assert_eq!(c.position(), Position::new(3, 0));
    }

    // -- Jumps --------------------------------------------------------------

    #[test]
    fn jump_down_over_blank_line() {
        let buf = sample_buffer();
        let mut c = Cursor::new();
        let outcome = c.jump_down(1, &buf, CursorShape::Block, &opts());
        assert_eq!(outcome, RepeatOutcome::Remaining(0));
        assert_eq!(c.position(), Position::new(1, 0));

        let outcome = c.jump_down(1, &buf, CursorShape::Block, &opts());
        assert_eq!(outcome, RepeatOutcome::Remaining(0));
        assert_eq!(c.position(), Position::new(3, 0));
    }

    #[test]
    fn jump_down_counted_reports_remaining() {
        let buf = sample_buffer();
        let mut c = Cursor::new();
        let outcome = c.jump_down(3, &buf, CursorShape::Block, &opts());
        assert_eq!(outcome, RepeatOutcome::Remaining(1));
        assert_eq!(c.position(), Position::new(3, 0));
    }

    #[test]
    fn negative_count_reverses() {
        let buf = sample_buffer();
        let mut c = Cursor::at(Position::new(3, 0));
        let outcome = c.jump_down(-1, &buf, CursorShape::Block, &opts());
        assert_eq!(outcome, RepeatOutcome::Remaining(0));
        assert_eq!(c.position(), Position::new(1, 0));

        let mut c = Cursor::new();
        let outcome = c.jump_left(-1, &buf, CursorShape::Block, &opts());
        assert_eq!(outcome, RepeatOutcome::Remaining(0));
        assert_eq!(c.position(), Position::new(0, 5));
    }

    #[test]
    fn zero_count_is_no_motion() {
        let buf = sample_buffer();
        let mut c = Cursor::at(Position::new(0, 2));
        for outcome in [
            c.jump_down(0, &buf, CursorShape::Block, &opts()),
            c.jump_up(0, &buf, CursorShape::Block, &opts()),
            c.jump_right(0, &buf, CursorShape::Bar, &opts()),
            c.jump_left(0, &buf, CursorShape::Bar, &opts()),
        ] {
            assert_eq!(outcome, RepeatOutcome::NoMotion);
        }
        assert_eq!(c.position(), Position::new(0, 2));
    }

    #[test]
    fn jump_up_from_first_line_is_no_motion() {
        let buf = sample_buffer();
        let mut c = Cursor::at(Position::new(0, 4));
        let outcome = c.jump_up(1, &buf, CursorShape::Block, &opts());
        assert_eq!(outcome, RepeatOutcome::NoMotion);
        assert_eq!(c.position(), Position::new(0, 4));
    }

    #[test]
    fn jump_right_twice_crosses_blank_run() {
        let buf = sample_buffer();
        let mut c = Cursor::new();
        let outcome = c.jump_right(2, &buf, CursorShape::Block, &opts());
        assert_eq!(outcome, RepeatOutcome::Remaining(0));
        // alpha|  beta: first jump to col 5, second to the last blank.
        assert_eq!(c.position(), Position::new(0, 6));
    }

    #[test]
    fn jump_keeps_selection_anchor() {
        let buf = sample_buffer();
        let mut c = Cursor::new();
        c.set_anchor();
        c.jump_right(1, &buf, CursorShape::Bar, &opts());
        assert_eq!(c.anchor(), Some(Position::ZERO));
        assert_eq!(
            c.selection(),
            Some(Range::ordered(Position::ZERO, c.position()))
        );
    }
}
