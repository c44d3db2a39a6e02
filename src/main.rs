// SPDX-License-Identifier: MIT
//
// edgejump — blank-boundary jumps from the command line.
//
// Loads a file into an ej-editor Buffer, places a cursor, and applies a
// sequence of vim-style motions, printing where each one lands:
//
//   j / k   jump down / up to the next blank-to-text boundary
//   l / h   jump right / left within the line
//
// Each motion takes an optional signed count: `3j` jumps down three
// boundaries, `-2l` is the same as `2h`. Motions flow through:
//
//   argv → MotionParser → Cursor::jump_* → jump dispatch → scan + repeat
//
// Option flags go before the file; everything after it is read as motions,
// so negative counts are not mistaken for flags.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use regex::Regex;
use tracing::Level;

use ej_editor::buffer::Buffer;
use ej_editor::cursor::Cursor;
use ej_editor::fill::CursorShape;
use ej_editor::options::JumpOptions;
use ej_editor::position::Position;
use ej_editor::repeat::RepeatOutcome;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "edgejump", version, about = "Jump between runs of text and blank space")]
struct Args {
    /// Start line (1-indexed).
    #[arg(long, default_value_t = 1)]
    line: usize,

    /// Start column (1-indexed, in chars).
    #[arg(long, default_value_t = 1)]
    col: usize,

    /// Cursor shape; overrides the `blockcursor` option.
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// `:set` arguments, e.g. `--set "jumpwrap ts=8"`. Repeatable.
    #[arg(long = "set", value_name = "ARGS")]
    set: Vec<String>,

    /// Log scan details to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// File to navigate.
    file: PathBuf,

    /// Motions: `h`, `j`, `k`, `l` with an optional signed count.
    #[arg(required = true, allow_hyphen_values = true, num_args = 1..)]
    motions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Block,
    Bar,
}

impl From<ShapeArg> for CursorShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Block => Self::Block,
            ShapeArg::Bar => Self::Bar,
        }
    }
}

// ─── Motions ────────────────────────────────────────────────────────────────

/// Which jump a motion key selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jump {
    Down,
    Up,
    Right,
    Left,
}

/// A parsed motion: jump kind plus signed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Motion {
    jump: Jump,
    count: isize,
}

/// Parser for `[+-][digits]key` motions.
struct MotionParser {
    pattern: Regex,
}

impl MotionParser {
    fn new() -> Result<Self> {
        let pattern = Regex::new(r"^([+-]?)(\d*)([hjkl])$").context("building motion pattern")?;
        Ok(Self { pattern })
    }

    /// Parse one motion. A missing count means 1; a bare sign means ±1.
    fn parse(&self, text: &str) -> Result<Motion> {
        let Some(caps) = self.pattern.captures(text) else {
            bail!("invalid motion `{text}` (expected e.g. `j`, `3k`, `-2l`)");
        };

        let magnitude = match &caps[2] {
            "" => 1,
            digits => digits
                .parse::<isize>()
                .with_context(|| format!("count too large in `{text}`"))?,
        };
        let count = if &caps[1] == "-" { -magnitude } else { magnitude };

        let jump = match &caps[3] {
            "j" => Jump::Down,
            "k" => Jump::Up,
            "l" => Jump::Right,
            _ => Jump::Left,
        };

        Ok(Motion { jump, count })
    }
}

/// Run one motion against the cursor.
fn apply(
    cursor: &mut Cursor,
    buf: &Buffer,
    motion: Motion,
    shape: CursorShape,
    opts: &JumpOptions,
) -> RepeatOutcome {
    match motion.jump {
        Jump::Down => cursor.jump_down(motion.count, buf, shape, opts),
        Jump::Up => cursor.jump_up(motion.count, buf, shape, opts),
        Jump::Right => cursor.jump_right(motion.count, buf, shape, opts),
        Jump::Left => cursor.jump_left(motion.count, buf, shape, opts),
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut opts = JumpOptions::default();
    for set in &args.set {
        for line in opts
            .apply_set(set)
            .with_context(|| format!("applying `--set {set}`"))?
        {
            println!("{line}");
        }
    }
    let shape = args.shape.map_or_else(|| opts.shape(), CursorShape::from);

    let buf = Buffer::from_file(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let parser = MotionParser::new()?;
    let motions = args
        .motions
        .iter()
        .map(|text| parser.parse(text))
        .collect::<Result<Vec<_>>>()?;

    let mut cursor = Cursor::new();
    let start = Position::new(args.line.saturating_sub(1), args.col.saturating_sub(1));
    cursor.set_position(start, &buf);
    println!("start  {}", describe(&buf, cursor.position()));

    for (text, motion) in args.motions.iter().zip(motions) {
        let outcome = apply(&mut cursor, &buf, motion, shape, &opts);
        println!("{}", step_line(text, outcome, &buf, cursor.position()));
        if let Some(notice) = outcome.notice() {
            println!("       {notice}");
        }
    }

    Ok(())
}

/// One output row: motion, outcome and landing, in aligned columns.
fn step_line(text: &str, outcome: RepeatOutcome, buf: &Buffer, pos: Position) -> String {
    format!("{text:<6} {outcome:<18} {}", describe(buf, pos))
}

/// `line:col (offset N)`, 1-indexed line and column.
fn describe(buf: &Buffer, pos: Position) -> String {
    buf.pos_to_char_idx(pos).map_or_else(
        || pos.to_string(),
        |offset| format!("{pos} (offset {offset})"),
    )
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("edgejump: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
