//! Jump options, set with `:set`-style arguments.
//!
//! | Name          | Short | Kind | Default |
//! |---------------|-------|------|---------|
//! | `jumpwrap`    | `jw`  | flag | off     |
//! | `blockcursor` | `bc`  | flag | on      |
//! | `tabstop`     | `ts`  | tab  | 4       |
//!
//! An argument is `name` (flag on; `tabstop` shows its value), `noname`,
//! `name!` (flip a flag), `name?`, `tabstop=N`, or `all`. Several arguments
//! may share one string, separated by whitespace.
//!
//! `jumpwrap` lets a horizontal jump stuck at a line edge continue onto the
//! next line with text. `blockcursor` picks the default cursor shape.
//! `tabstop` is the tab width that keeps vertical jumps in one display column.

use thiserror::Error;

use crate::fill::CursorShape;

/// One of the options [`JumpOptions`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    JumpWrap,
    BlockCursor,
    TabStop,
}

impl OptionName {
    /// Every option, in listing order.
    pub const ALL: [Self; 3] = [Self::JumpWrap, Self::BlockCursor, Self::TabStop];

    /// Resolve a full or short option name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "jumpwrap" | "jw" => Some(Self::JumpWrap),
            "blockcursor" | "bc" => Some(Self::BlockCursor),
            "tabstop" | "ts" => Some(Self::TabStop),
            _ => None,
        }
    }

    /// Full name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JumpWrap => "jumpwrap",
            Self::BlockCursor => "blockcursor",
            Self::TabStop => "tabstop",
        }
    }

    /// True for on/off options.
    #[must_use]
    pub const fn is_flag(self) -> bool {
        !matches!(self, Self::TabStop)
    }
}

/// One parsed `:set` argument. Names are kept as written so errors and
/// queries echo them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `name`
    Enable(String),
    /// `noname`
    Disable(String),
    /// `name!`
    Toggle(String),
    /// `name?`, or a bare `tabstop`
    Query(String),
    /// `name=value`
    Assign(String, String),
    /// `all`
    ShowAll,
}

/// Why a `:set` argument could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Unknown option: {0}")]
    Unknown(String),

    #[error("Invalid argument: {name}={value}")]
    InvalidValue { name: String, value: String },

    #[error("Not a boolean option: {0}")]
    NotBoolean(String),

    #[error("Option takes no value: {0}")]
    NotNumeric(String),
}

/// Split a `:set` argument string into directives. Blank input yields none.
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    args.split_whitespace().map(parse_set_arg).collect()
}

/// Parse one `:set` argument.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_owned(), value.to_owned());
    }
    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_owned());
    }
    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_owned());
    }

    let negated = arg
        .strip_prefix("no")
        .filter(|rest| OptionName::lookup(rest).is_some_and(OptionName::is_flag));
    match (negated, OptionName::lookup(arg)) {
        (Some(name), _) => SetDirective::Disable(name.to_owned()),
        (None, Some(opt)) if !opt.is_flag() => SetDirective::Query(arg.to_owned()),
        _ => SetDirective::Enable(arg.to_owned()),
    }
}

/// `"name"` when on, `"noname"` when off.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_owned()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// JumpOptions
// ---------------------------------------------------------------------------

/// Option values read by the jump motions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpOptions {
    /// `jumpwrap` — horizontal jumps continue onto the next non-blank line.
    pub wrap: bool,
    /// `blockcursor` — default shape is `Block` (else `Bar`).
    pub block_cursor: bool,
    /// `tabstop` — display width of a tab, at least 1.
    pub tab_width: u8,
}

impl Default for JumpOptions {
    fn default() -> Self {
        Self {
            wrap: false,
            block_cursor: true,
            tab_width: 4,
        }
    }
}

impl JumpOptions {
    /// The cursor shape selected by `blockcursor`.
    #[must_use]
    pub const fn shape(&self) -> CursorShape {
        if self.block_cursor {
            CursorShape::Block
        } else {
            CursorShape::Bar
        }
    }

    /// Apply every argument in `args`, stopping at the first error. Returns
    /// the lines queries and `all` produce.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionError`] raised by an argument.
    pub fn apply_set(&mut self, args: &str) -> Result<Vec<String>, OptionError> {
        let mut shown = Vec::new();
        for directive in parse_set(args) {
            shown.extend(self.apply(&directive)?);
        }
        Ok(shown)
    }

    /// Apply one directive, returning any lines it shows.
    ///
    /// # Errors
    ///
    /// Unknown names, flag operations on `tabstop`, values for flags, and
    /// tab widths that are not a number in `1..=255`.
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Vec<String>, OptionError> {
        match directive {
            SetDirective::Enable(name) => *self.flag_mut(name)? = true,
            SetDirective::Disable(name) => *self.flag_mut(name)? = false,
            SetDirective::Toggle(name) => {
                let flag = self.flag_mut(name)?;
                *flag = !*flag;
            }
            SetDirective::Query(name) => return Ok(vec![self.show(resolve(name)?, name)]),
            SetDirective::Assign(name, value) => {
                if resolve(name)?.is_flag() {
                    return Err(OptionError::NotNumeric(name.clone()));
                }
                self.tab_width = value
                    .parse::<u8>()
                    .ok()
                    .filter(|width| *width > 0)
                    .ok_or_else(|| OptionError::InvalidValue {
                        name: name.clone(),
                        value: value.clone(),
                    })?;
            }
            SetDirective::ShowAll => {
                return Ok(OptionName::ALL
                    .into_iter()
                    .map(|opt| self.show(opt, opt.as_str()))
                    .collect());
            }
        }
        Ok(Vec::new())
    }

    /// Display form under the name the user wrote (`nojw`, `ts=4`).
    fn show(&self, opt: OptionName, label: &str) -> String {
        match opt {
            OptionName::JumpWrap => format_bool(label, self.wrap),
            OptionName::BlockCursor => format_bool(label, self.block_cursor),
            OptionName::TabStop => format!("{label}={}", self.tab_width),
        }
    }

    fn flag_mut(&mut self, name: &str) -> Result<&mut bool, OptionError> {
        match resolve(name)? {
            OptionName::JumpWrap => Ok(&mut self.wrap),
            OptionName::BlockCursor => Ok(&mut self.block_cursor),
            OptionName::TabStop => Err(OptionError::NotBoolean(name.to_owned())),
        }
    }
}

fn resolve(name: &str) -> Result<OptionName, OptionError> {
    OptionName::lookup(name).ok_or_else(|| OptionError::Unknown(name.to_owned()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
