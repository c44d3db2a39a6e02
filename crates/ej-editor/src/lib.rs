//! # ej-editor — Editor core for edgejump
//!
//! Blank-boundary motions: jump the cursor to where a run of text meets a run
//! of blank space, up, down, left or right, with a repeat count.
//!
//! - **[`position`]** — `Position` (line, col), `Range`, `Direction`
//! - **[`buffer`]** — `Buffer` wrapping a rope, with display-column arithmetic
//! - **[`fill`]** — blank/filled classification and the neighborhood rule
//! - **[`scan`]** — the vertical and horizontal boundary scanners
//! - **[`repeat`]** — counted repetition and its `RepeatOutcome`
//! - **[`jump`]** — dispatch from a cursor to scanner + repeat, `jumpwrap`
//! - **[`cursor`]** — `Cursor` with selection anchor and the `jump_*` entry points
//! - **[`options`]** — `:set` parsing and `JumpOptions`

pub mod buffer;
pub mod cursor;
pub mod fill;
pub mod jump;
pub mod options;
pub mod position;
pub mod repeat;
pub mod scan;
