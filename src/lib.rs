//! Termprint: terminal presentation primitives.
//!
//! Colored text for ANSI terminals or an HTML-like markup sink, width-aware
//! line refresh, progress bars, aligned help tables, and prompts that keep
//! asking until the answer validates.
//!
//! # Quick start
//!
//! ```no_run
//! use termprint::color::ColorToken;
//! use termprint::tui::{Console, DisplaySettings, ProgressState};
//!
//! let mut console = Console::stdio(DisplaySettings::default());
//! let token = ColorToken::parse("green|bold").unwrap();
//! let line = console.render_line("ready", &token);
//! console.println(&line).unwrap();
//! console.progress(&ProgressState::new(42.0).with_prefix("copy")).unwrap();
//! ```

pub mod build_info;
pub mod color;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
