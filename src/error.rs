//! Unified error types for rendering, prompting, and configuration.

use std::fmt;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors raised while resolving a color specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A name did not resolve against the fixed palette.
    UnknownColorName(String),
    /// A malformed hex/rgb/hsl literal, out-of-range channel, or bad packed value.
    InvalidColorValue(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColorName(name) => write!(f, "unknown color name `{name}`"),
            Self::InvalidColorValue(value) => write!(f, "invalid color value `{value}`"),
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// Errors from line, progress, and help rendering.
#[derive(Debug)]
pub enum RenderError {
    /// Progress percent outside `[0, 100]` (or not a number).
    InvalidPercent(f64),
    /// The terminal leaves no room for the progress bar itself.
    TerminalTooNarrow { columns: usize, required: usize },
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPercent(p) => {
                write!(f, "progress percent must be between 0 and 100, got {p}")
            }
            Self::TerminalTooNarrow { columns, required } => write!(
                f,
                "terminal too narrow: {columns} columns, labels need more than {required}"
            ),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// PromptError
// ---------------------------------------------------------------------------

/// Errors surfaced by the interactive prompt loop.
///
/// Validator rejection is never an error; the loop simply asks again.
#[derive(Debug)]
pub enum PromptError {
    /// A choice validator was built with no choices.
    EmptyChoices,
    /// The user interrupted input (Ctrl-C).
    Cancelled,
    /// Input reached end-of-file before a value was accepted.
    Eof,
    Io(std::io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChoices => write!(f, "choice prompt has no choices"),
            Self::Cancelled => write!(f, "input cancelled"),
            Self::Eof => write!(f, "input closed before a value was accepted"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
