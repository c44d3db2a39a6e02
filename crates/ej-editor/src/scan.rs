//! Blank-boundary scanners.
//!
//! Both scanners are pure: they probe the buffer from a start position and
//! return where a motion should land, without touching any cursor. The
//! [`repeat`](crate::repeat) driver publishes the result.
//!
//! Each scan runs one small state machine:
//!
//! ```text
//! Scanning ──▶ Boundary      (classification changed)
//!          ├─▶ DocumentEdge  (vertical: no more lines)
//!          └─▶ LineEdge      (horizontal: no more columns in this line)
//! ```
//!
//! # Reference state
//!
//! Both scanners take one step before recording the reference
//! classification, then look for the first step whose classification
//! differs. Starting in front of a blank region therefore crosses it and
//! lands on the text beyond; starting in front of text walks to the end of
//! that text.
//!
//! # Landing asymmetry
//!
//! Where a scan stops depends on which side of the boundary was empty:
//!
//! | Scan       | Shape   | Leaving empty | Leaving filled |
//! |------------|---------|---------------|----------------|
//! | vertical   | any     | current line  | previous line  |
//! | horizontal | `Block` | previous col  | current col    |
//!
//! A horizontal `Bar` scan ignores which side was empty: it lands on the
//! current column going forward and on the previous column going backward.
//!
//! The rules are not symmetric, so a motion followed by its reverse does not
//! always return to the start.

use crate::buffer::Buffer;
use crate::fill::{CursorShape, LineView, is_empty_neighborhood};
use crate::position::{Direction, Position};

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stop {
    /// The empty/filled classification changed.
    Boundary,
    /// Vertical scan ran out of lines; the fallback position was returned.
    DocumentEdge,
    /// Horizontal scan reached the start or end of the line.
    LineEdge,
}

/// Result of [`scan_vertical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalScan {
    /// Signed number of lines between the start and `position`. Zero means
    /// the motion has nowhere to go.
    pub lines: isize,
    pub position: Position,
    pub stop: Stop,
}

/// Result of [`scan_horizontal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalScan {
    pub position: Position,
    pub stop: Stop,
}

// ---------------------------------------------------------------------------
// Vertical
// ---------------------------------------------------------------------------

/// Scan line by line from `start`, keeping its display column.
///
/// Every visited line is entered at the start's display column (clamped on
/// short lines). A line counts as empty when the neighborhood rule says so
/// or, for a block cursor or a target column of 0, when the cursor ends up at
/// or past the end of the line or short of the target column.
///
/// At the document edge, returns the last visited line whose column matched
/// the target exactly, or `start` with zero lines if there is none.
#[must_use]
pub fn scan_vertical(
    buf: &Buffer,
    start: Position,
    dir: Direction,
    shape: CursorShape,
    tab_width: u8,
) -> VerticalScan {
    let target = buf.display_col(start, tab_width);
    let line_count = buf.line_count();

    let mut fallback = VerticalScan {
        lines: 0,
        position: start,
        stop: Stop::DocumentEdge,
    };
    let mut prev = (0, start);
    let mut reference = None;
    let mut lines = 0;
    let mut line = start.line;

    loop {
        let Some(next_line) = dir.step(line, line_count) else {
            return fallback;
        };
        let Some((achieved, pos)) = buf.move_to_display_col(next_line, target, tab_width) else {
            return fallback;
        };
        line = next_line;
        lines += dir.sign();

        let empty = vertical_empty(buf, pos, achieved, target, shape);
        match reference {
            None => reference = Some(empty),
            Some(started_empty) if started_empty != empty => {
                let (lines, position) = if started_empty { (lines, pos) } else { prev };
                return VerticalScan {
                    lines,
                    position,
                    stop: Stop::Boundary,
                };
            }
            Some(_) => {}
        }

        if achieved == target {
            fallback = VerticalScan {
                lines,
                position: pos,
                stop: Stop::DocumentEdge,
            };
        }
        prev = (lines, pos);
    }
}

/// Emptiness of the spot a vertical step landed on.
fn vertical_empty(
    buf: &Buffer,
    pos: Position,
    achieved: usize,
    target: usize,
    shape: CursorShape,
) -> bool {
    let Some(line) = LineView::of(buf, pos.line) else {
        return true;
    };
    let edge_counts = shape == CursorShape::Block || target == 0;
    if edge_counts && (pos.col >= line.len() || achieved < target) {
        return true;
    }
    is_empty_neighborhood(&line, pos.col, shape)
}

// ---------------------------------------------------------------------------
// Horizontal
// ---------------------------------------------------------------------------

/// Scan character by character from `start` within its line.
///
/// Columns range over `0..=len` (the end-of-line column included); the scan
/// never leaves the line. On an empty line, or when starting at the edge in
/// the travel direction, the start is returned unchanged.
#[must_use]
pub fn scan_horizontal(
    buf: &Buffer,
    start: Position,
    dir: Direction,
    shape: CursorShape,
) -> HorizontalScan {
    let Some(line) = LineView::of(buf, start.line) else {
        return HorizontalScan {
            position: start,
            stop: Stop::LineEdge,
        };
    };
    // Columns 0..=len, so the step limit is one past the end-of-line column.
    let limit = line.len() + 1;

    let mut col = start.col.min(line.len());
    if let Some(next) = dir.step(col, limit) {
        col = next;
    }

    let mut prev = col;
    let mut reference = None;

    loop {
        let empty = is_empty_neighborhood(&line, col, shape);
        match reference {
            None => reference = Some(empty),
            Some(started_empty) if started_empty != empty => {
                let land = match (shape, dir) {
                    (CursorShape::Block, _) => {
                        if started_empty {
                            prev
                        } else {
                            col
                        }
                    }
                    (CursorShape::Bar, Direction::Forward) => col,
                    (CursorShape::Bar, Direction::Backward) => prev,
                };
                return HorizontalScan {
                    position: start.with_col(land),
                    stop: Stop::Boundary,
                };
            }
            Some(_) => {}
        }

        let Some(next) = dir.step(col, limit) else {
            return HorizontalScan {
                position: start.with_col(col),
                stop: Stop::LineEdge,
            };
        };
        prev = col;
        col = next;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TAB: u8 = 4;

    fn right(text: &str, col: usize, shape: CursorShape) -> usize {
        let buf = Buffer::from_text(text);
        scan_horizontal(&buf, Position::new(0, col), Direction::Forward, shape)
            .position
            .col
    }

    fn left(text: &str, col: usize, shape: CursorShape) -> usize {
        let buf = Buffer::from_text(text);
        scan_horizontal(&buf, Position::new(0, col), Direction::Backward, shape)
            .position
            .col
    }

    fn down(buf: &Buffer, start: Position, shape: CursorShape) -> VerticalScan {
        scan_vertical(buf, start, Direction::Forward, shape, TAB)
    }

    fn up(buf: &Buffer, start: Position, shape: CursorShape) -> VerticalScan {
        scan_vertical(buf, start, Direction::Backward, shape, TAB)
    }

    // -- Horizontal: block --------------------------------------------------

    #[test]
    fn block_right_from_word_lands_on_first_blank() {
        assert_eq!(right("foo   bar", 0, CursorShape::Block), 3);
    }

    #[test]
    fn block_right_inside_blank_run_lands_on_last_blank() {
        assert_eq!(right("foo   bar", 3, CursorShape::Block), 5);
        assert_eq!(right("ab    cd", 3, CursorShape::Block), 5);
    }

    #[test]
    fn block_left_inside_blank_run_lands_on_first_blank() {
        assert_eq!(left("ab    cd", 4, CursorShape::Block), 2);
        assert_eq!(left("foo   bar", 6, CursorShape::Block), 3);
    }

    #[test]
    fn block_right_ignores_single_space() {
        let buf = Buffer::from_text("ab c");
        let scan = scan_horizontal(&buf, Position::ZERO, Direction::Forward, CursorShape::Block);
        assert_eq!(scan.position, Position::new(0, 4));
        assert_eq!(scan.stop, Stop::Boundary);
    }

    #[test]
    fn block_left_from_word_walks_to_line_start() {
        let buf = Buffer::from_text("foo   bar");
        let scan = scan_horizontal(
            &buf,
            Position::new(0, 2),
            Direction::Backward,
            CursorShape::Block,
        );
        assert_eq!(scan.position, Position::ZERO);
        assert_eq!(scan.stop, Stop::LineEdge);
    }

    #[test]
    fn block_right_into_trailing_blanks() {
        // From the last word char, the trailing blanks are one region that
        // runs to the end of the line.
        assert_eq!(right("ab   ", 1, CursorShape::Block), 5);
    }

    // -- Horizontal: bar ----------------------------------------------------

    #[test]
    fn bar_right_from_word_lands_inside_blank_run() {
        assert_eq!(right("foo   bar", 0, CursorShape::Bar), 4);
    }

    #[test]
    fn bar_right_inside_blank_run_lands_on_text() {
        assert_eq!(right("ab    cd", 3, CursorShape::Bar), 6);
    }

    #[test]
    fn bar_left_inside_blank_run_stops_before_touching_text() {
        assert_eq!(left("ab    cd", 4, CursorShape::Bar), 3);
    }

    #[test]
    fn bar_right_ignores_single_space() {
        assert_eq!(right("ab c", 0, CursorShape::Bar), 4);
    }

    #[test]
    fn bar_is_not_a_round_trip() {
        let there = right("ab  cd", 3, CursorShape::Bar);
        assert_eq!(there, 6);
        assert_eq!(left("ab  cd", there, CursorShape::Bar), 4);
    }

    // -- Horizontal: edges --------------------------------------------------

    #[test]
    fn empty_line_stays_put() {
        let buf = Buffer::from_text("x\n\ny");
        for dir in [Direction::Forward, Direction::Backward] {
            for shape in [CursorShape::Block, CursorShape::Bar] {
                let scan = scan_horizontal(&buf, Position::new(1, 0), dir, shape);
                assert_eq!(scan.position, Position::new(1, 0));
                assert_eq!(scan.stop, Stop::LineEdge);
            }
        }
    }

    #[test]
    fn end_of_line_forward_stays_put() {
        assert_eq!(right("abc\ndef", 3, CursorShape::Block), 3);
        assert_eq!(right("abc\ndef", 3, CursorShape::Bar), 3);
    }

    #[test]
    fn line_start_backward_stays_put() {
        assert_eq!(left("  abc", 0, CursorShape::Block), 0);
    }

    #[test]
    fn horizontal_never_crosses_lines() {
        let buf = Buffer::from_text("ab\n  cd");
        let scan = scan_horizontal(&buf, Position::ZERO, Direction::Forward, CursorShape::Bar);
        assert_eq!(scan.position.line, 0);
        assert_eq!(scan.position.col, 2);
    }

    #[test]
    fn start_past_line_end_is_clamped() {
        assert_eq!(left("ab   cd", 40, CursorShape::Block), 4);
    }

    // -- Vertical -----------------------------------------------------------

    #[test]
    fn vertical_crosses_blank_line_to_text() {
        let buf = Buffer::from_text("abc\n\ndef");
        let scan = down(&buf, Position::ZERO, CursorShape::Block);
        assert_eq!(
            scan,
            VerticalScan {
                lines: 2,
                position: Position::new(2, 0),
                stop: Stop::Boundary,
            }
        );
    }

    #[test]
    fn vertical_walks_to_last_filled_line() {
        let buf = Buffer::from_text("a\nb\nc\n\nd");
        let scan = down(&buf, Position::ZERO, CursorShape::Block);
        assert_eq!(scan.lines, 2);
        assert_eq!(scan.position, Position::new(2, 0));
        assert_eq!(scan.stop, Stop::Boundary);
    }

    #[test]
    fn vertical_upward_mirrors_downward() {
        let buf = Buffer::from_text("abc\n\ndef");
        let scan = up(&buf, Position::new(2, 0), CursorShape::Block);
        assert_eq!(scan.lines, -2);
        assert_eq!(scan.position, Position::ZERO);
    }

    #[test]
    fn vertical_from_last_line_has_no_motion() {
        let buf = Buffer::from_text("abc\ndef");
        let scan = down(&buf, Position::new(1, 1), CursorShape::Block);
        assert_eq!(scan.lines, 0);
        assert_eq!(scan.position, Position::new(1, 1));
        assert_eq!(scan.stop, Stop::DocumentEdge);
    }

    #[test]
    fn vertical_without_change_falls_back_to_last_matching_line() {
        let buf = Buffer::from_text("abc\nabc\nabc");
        let scan = down(&buf, Position::new(0, 1), CursorShape::Block);
        assert_eq!(scan.lines, 2);
        assert_eq!(scan.position, Position::new(2, 1));
        assert_eq!(scan.stop, Stop::DocumentEdge);
    }

    #[test]
    fn vertical_fallback_skips_short_lines() {
        // Line 1 is empty at column 2 and stays empty to the end: the only
        // line whose column matched is none, so the scan reports no motion.
        let buf = Buffer::from_text("abcd\n\n");
        let scan = down(&buf, Position::new(0, 2), CursorShape::Block);
        assert_eq!(scan.lines, 0);
        assert_eq!(scan.position, Position::new(0, 2));
    }

    #[test]
    fn vertical_block_short_line_is_a_boundary() {
        let buf = Buffer::from_text("abcd\nabcd\nab\nabcd");
        let scan = down(&buf, Position::new(0, 3), CursorShape::Block);
        assert_eq!(scan.lines, 1);
        assert_eq!(scan.position, Position::new(1, 3));
    }

    #[test]
    fn vertical_bar_short_line_touching_text_is_filled() {
        // A bar at column 3 lands right after "ab" on the short line, which
        // still touches text.
        let buf = Buffer::from_text("abcd\nabcd\nab\nabcd");
        let scan = down(&buf, Position::new(0, 3), CursorShape::Bar);
        assert_eq!(scan.stop, Stop::DocumentEdge);
        assert_eq!(scan.lines, 3);
        assert_eq!(scan.position, Position::new(3, 3));
    }

    #[test]
    fn vertical_column_zero_treats_empty_line_as_empty_for_bar() {
        let buf = Buffer::from_text("a\n\n\nb");
        let scan = down(&buf, Position::ZERO, CursorShape::Bar);
        assert_eq!(scan.lines, 3);
        assert_eq!(scan.position, Position::new(3, 0));
    }

    #[test]
    fn vertical_smooths_single_space_column() {
        // Column 1 hits a single space on line 1: still filled.
        let buf = Buffer::from_text("abc\na c\nabc\n\nx");
        let scan = down(&buf, Position::new(0, 1), CursorShape::Block);
        assert_eq!(scan.lines, 2);
        assert_eq!(scan.position, Position::new(2, 1));
    }

    #[test]
    fn vertical_keeps_display_column_across_tabs() {
        // Column 4 on line 0 is 'e'; on line 1 the tab spans 0..4, so the
        // same display column is 'x'.
        let buf = Buffer::from_text("abcde\n\tx\n\tx\n\n");
        let scan = down(&buf, Position::new(0, 4), CursorShape::Block);
        assert_eq!(scan.lines, 2);
        assert_eq!(scan.position, Position::new(2, 1));
    }

    #[test]
    fn vertical_form_feed_line_is_text() {
        // `^L` is a line of its own in the file, with no phantom line after it.
        let buf = Buffer::from_text("ab\n\x0c\ncd");
        let scan = down(&buf, Position::ZERO, CursorShape::Block);
        assert_eq!(scan.lines, 2);
        assert_eq!(scan.position, Position::new(2, 0));
        assert_eq!(scan.stop, Stop::DocumentEdge);
    }

    #[test]
    fn horizontal_line_separator_is_not_a_line_break() {
        // U+2028 is a filled character in the middle of the line.
        let buf = Buffer::from_text("ab\u{2028}  cd");
        let scan = scan_horizontal(&buf, Position::ZERO, Direction::Forward, CursorShape::Block);
        assert_eq!(scan.position, Position::new(0, 3));
        assert_eq!(scan.stop, Stop::Boundary);
        assert_eq!(right("ab\u{2028}  cd", 3, CursorShape::Block), 4);
    }

    #[test]
    fn vertical_single_line_buffer() {
        let buf = Buffer::from_text("only");
        assert_eq!(up(&buf, Position::new(0, 2), CursorShape::Bar).lines, 0);
        assert_eq!(down(&buf, Position::new(0, 2), CursorShape::Bar).lines, 0);
    }
}
