//! Centralized defaults for the terminal presentation layer.
//!
//! This is the single place to tweak glyphs, widths, spacing, and the markup
//! tokens. Runtime overrides go through [`DisplaySettings`].

use crate::color::{ColorToken, Hue, RenderTarget};

// ---------------------------------------------------------------------------
// Width / layout
// ---------------------------------------------------------------------------

/// Width used when the terminal size is unavailable or degenerate.
pub const DEFAULT_COLUMNS: usize = 150;
/// Reported widths at or below this are treated as unreliable.
pub const MIN_RELIABLE_COLUMNS: usize = 20;
/// Gap between the widest help label and the description column.
pub const HELP_COLUMN_SPACING: usize = 8;
/// Separator used when one help row lists several aliases.
pub const HELP_ALIAS_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

pub const PROGRESS_FILL: &str = "=";
pub const PROGRESS_PENDING: &str = "-";
/// Columns reserved around the bar: `" ["`, `"] "`, and `"%"`.
pub const PROGRESS_RESERVED_COLUMNS: usize = 5;
/// Background used for the solid fill glyph.
pub const PROGRESS_SOLID_BACKGROUND: Hue = Hue::White;

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

pub const MARKUP_PRE_OPEN: &str = "<pre>";
pub const MARKUP_PRE_CLOSE: &str = "</pre>";

// ---------------------------------------------------------------------------
// Prompt
// ---------------------------------------------------------------------------

pub const CHOICE_OPEN: &str = "(";
pub const CHOICE_SEPARATOR: &str = "/";
pub const CHOICE_CLOSE: &str = ")";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_ERROR: ColorToken = ColorToken {
    foreground: Some(crate::color::Foreground {
        hue: Hue::Red,
        bright: false,
    }),
    background: None,
    bold: true,
};

pub const COLOR_HELP_LABEL: ColorToken = ColorToken {
    foreground: Some(crate::color::Foreground {
        hue: Hue::Green,
        bright: false,
    }),
    background: None,
    bold: false,
};

pub const COLOR_PROMPT: ColorToken = ColorToken {
    foreground: Some(crate::color::Foreground {
        hue: Hue::Yellow,
        bright: false,
    }),
    background: None,
    bold: true,
};

/// Runtime-adjustable presentation settings read at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Output target.
    pub target: RenderTarget,
    /// Whether color encoding is applied at all.
    pub color: bool,
    /// Fallback width for degenerate or missing terminal sizes.
    pub default_columns: usize,
    /// Glyph repeated for the completed part of a progress bar.
    pub progress_fill: String,
    /// Glyph repeated for the pending part of a progress bar.
    pub progress_pending: String,
    /// Gap between help labels and descriptions.
    pub help_spacing: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            target: RenderTarget::Terminal,
            color: true,
            default_columns: DEFAULT_COLUMNS,
            progress_fill: PROGRESS_FILL.to_string(),
            progress_pending: PROGRESS_PENDING.to_string(),
            help_spacing: HELP_COLUMN_SPACING,
        }
    }
}
