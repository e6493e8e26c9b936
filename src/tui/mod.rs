//! Terminal presentation building blocks.
//!
//! Width probing, line rendering, progress bars, help tables, and prompts.
//! Everything that writes goes through [`Console`], which owns the output
//! streams, the active [`DisplaySettings`], and the width source.

pub mod help;
pub mod input;
pub mod metrics;
pub mod progress;
pub mod prompt;
pub mod renderer;
pub mod settings;
pub mod text;

pub use help::{layout_help, HelpLine, HelpRow};
pub use input::{default_line_input, EditorInput, LineInput, RawInput, ScriptedInput};
pub use metrics::{FixedProbe, SizeProbe, SystemProbe, TerminalMetrics};
pub use progress::{progress_layout, ProgressLine, ProgressState};
pub use prompt::{PromptSpec, Prompter, Validator};
pub use renderer::Console;
pub use settings::DisplaySettings;
