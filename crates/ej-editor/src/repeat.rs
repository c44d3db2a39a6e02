//! Counted repetition of a motion.
//!
//! [`repeat`] runs a single-step motion up to `times` times, each step from
//! wherever the previous one left the cursor. The first step that goes
//! nowhere ends the repetition, so a motion never overshoots a document or
//! line edge by "using up" its count.

use std::fmt;

use crate::cursor::Cursor;
use crate::position::{Direction, Position};

/// How a counted motion went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatOutcome {
    /// At least one step moved the cursor. Holds the repetitions left undone,
    /// signed like the request; `Remaining(0)` is full success.
    Remaining(isize),
    /// Not a single step moved the cursor.
    NoMotion,
}

impl RepeatOutcome {
    /// True when every requested repetition moved the cursor.
    #[inline]
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Remaining(0))
    }

    /// Account for one more satisfied repetition in `dir`, out of `times`
    /// requested. Used when a follow-up step (line wrapping) moves the cursor
    /// after the scanner gave up.
    #[must_use]
    pub fn with_extra_step(self, dir: Direction, times: usize) -> Self {
        match self {
            Self::NoMotion => Self::Remaining(signed(dir, times.saturating_sub(1))),
            Self::Remaining(0) => self,
            Self::Remaining(left) => Self::Remaining(left - dir.sign()),
        }
    }

    /// Message for the status line when the motion could not move.
    #[must_use]
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::NoMotion => Some("No blank boundary in that direction"),
            Self::Remaining(_) => None,
        }
    }
}

// Padded so callers can line outcomes up in a column.
impl fmt::Display for RepeatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining(0) => f.pad("done"),
            Self::Remaining(n) => f.pad(&format!("partial ({n} left)")),
            Self::NoMotion => f.pad("no motion"),
        }
    }
}

/// Apply `step` up to `times` times in `dir`, moving `cursor` after each
/// step that lands somewhere new.
///
/// `step` receives the cursor's current position and returns where the
/// motion lands, or `None` when it cannot move. A landing equal to the
/// current position also counts as no movement. The cursor's selection
/// anchor is left alone.
pub fn repeat<F>(cursor: &mut Cursor, dir: Direction, times: usize, mut step: F) -> RepeatOutcome
where
    F: FnMut(Position) -> Option<Position>,
{
    let mut moved = 0;
    while moved < times {
        let here = cursor.position();
        match step(here) {
            Some(there) if there != here => {
                cursor.jump_to(there);
                moved += 1;
            }
            _ => break,
        }
    }

    if moved == 0 {
        RepeatOutcome::NoMotion
    } else {
        RepeatOutcome::Remaining(signed(dir, times - moved))
    }
}

/// `count` with the sign of `dir`.
fn signed(dir: Direction, count: usize) -> isize {
    isize::try_from(count).unwrap_or(isize::MAX) * dir.sign()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
