//! Jump dispatch — counted scans applied to a cursor.
//!
//! [`vertical`] and [`horizontal`] glue a scanner to the [`repeat`] driver.
//! They receive a direction and an unsigned repetition count; sign handling
//! lives in the `Cursor::jump_*` entry points.
//!
//! Horizontal jumps also implement `jumpwrap`: when the scanner is stuck at a
//! line edge, the cursor skips any blank lines and lands on the near edge of
//! the next line with text — its start going right, its end going left.

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::cursor::Cursor;
use crate::fill::CursorShape;
use crate::options::JumpOptions;
use crate::position::{Direction, Position};
use crate::repeat::{RepeatOutcome, repeat};
use crate::scan::{scan_horizontal, scan_vertical};

/// Jump `times` blank boundaries up or down.
pub fn vertical(
    cursor: &mut Cursor,
    buf: &Buffer,
    dir: Direction,
    times: usize,
    shape: CursorShape,
    opts: &JumpOptions,
) -> RepeatOutcome {
    let outcome = repeat(cursor, dir, times, |from| {
        let scan = scan_vertical(buf, from, dir, shape, opts.tab_width);
        trace!(?from, ?dir, %shape, lines = scan.lines, to = ?scan.position, stop = ?scan.stop, "vertical scan");
        (scan.lines != 0).then_some(scan.position)
    });
    report("vertical", cursor, outcome);
    outcome
}

/// Jump `times` blank boundaries left or right within the line, wrapping to
/// the next non-blank line when `jumpwrap` is set.
pub fn horizontal(
    cursor: &mut Cursor,
    buf: &Buffer,
    dir: Direction,
    times: usize,
    shape: CursorShape,
    opts: &JumpOptions,
) -> RepeatOutcome {
    let mut outcome = repeat(cursor, dir, times, |from| {
        let scan = scan_horizontal(buf, from, dir, shape);
        trace!(?from, ?dir, %shape, to = ?scan.position, stop = ?scan.stop, "horizontal scan");
        Some(scan.position)
    });

    if opts.wrap && times > 0 && !outcome.is_complete() {
        if let Some(pos) = next_text_line_edge(buf, cursor.line(), dir) {
            debug!(from = ?cursor.position(), to = ?pos, "jumpwrap onto next text line");
            cursor.jump_to(pos);
            outcome = outcome.with_extra_step(dir, times);
        }
    }

    report("horizontal", cursor, outcome);
    outcome
}

/// Edge of the nearest line past `line` in `dir` that is not blank: column 0
/// going forward, end of line going backward.
fn next_text_line_edge(buf: &Buffer, line: usize, dir: Direction) -> Option<Position> {
    let line_count = buf.line_count();
    let mut line = line;
    loop {
        line = dir.step(line, line_count)?;
        if buf.is_blank_line(line) {
            continue;
        }
        return Some(match dir {
            Direction::Forward => Position::new(line, 0),
            Direction::Backward => Position::new(line, buf.line_content_len(line)?),
        });
    }
}

fn report(kind: &str, cursor: &Cursor, outcome: RepeatOutcome) {
    match outcome {
        RepeatOutcome::NoMotion => debug!(kind, at = ?cursor.position(), "jump found no boundary"),
        RepeatOutcome::Remaining(0) => trace!(kind, at = ?cursor.position(), "jump complete"),
        RepeatOutcome::Remaining(left) => {
            debug!(kind, at = ?cursor.position(), left, "jump stopped early");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
