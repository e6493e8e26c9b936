//! Single-line progress bars redrawn in place.

use crate::color::ColorToken;
use crate::error::RenderError;
use crate::tui::renderer::Console;
use crate::tui::settings;
use crate::tui::text::visible_width;
use std::io::Write;

/// Caller-owned progress snapshot, rebuilt on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    /// Completion in `[0, 100]`.
    pub percent: f64,
    /// Text before the bar.
    pub label_prefix: String,
    /// Text after the percentage.
    pub label_suffix: String,
}

impl ProgressState {
    pub fn new(percent: f64) -> Self {
        Self {
            percent,
            label_prefix: String::new(),
            label_suffix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.label_suffix = suffix.into();
        self
    }
}

/// Computed bar geometry plus the composed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLine {
    pub bar_width: usize,
    pub filled: usize,
    pub remaining: usize,
    pub text: String,
}

/// Percent rounded to two decimals, printed without trailing zeros.
fn format_percent(percent: f64) -> String {
    let rounded = (percent * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Lay out a bar that, together with its labels, spans exactly `columns` cells.
pub fn progress_layout(
    columns: usize,
    state: &ProgressState,
    fill: &str,
    pending: &str,
) -> Result<ProgressLine, RenderError> {
    if !(0.0..=100.0).contains(&state.percent) {
        return Err(RenderError::InvalidPercent(state.percent));
    }
    let percent = format_percent(state.percent);
    let fixed = visible_width(&state.label_prefix)
        + visible_width(&state.label_suffix)
        + visible_width(&percent)
        + settings::PROGRESS_RESERVED_COLUMNS;
    if columns <= fixed {
        return Err(RenderError::TerminalTooNarrow {
            columns,
            required: fixed,
        });
    }
    let bar_width = columns - fixed;
    let filled = ((bar_width as f64 * state.percent / 100.0).ceil() as usize).min(bar_width);
    let remaining = bar_width - filled;

    let text = format!(
        "{prefix} [{done}{todo}] {percent}%{suffix}",
        prefix = state.label_prefix,
        done = fill.repeat(filled),
        todo = pending.repeat(remaining),
        suffix = state.label_suffix,
    );
    Ok(ProgressLine {
        bar_width,
        filled,
        remaining,
        text,
    })
}

impl<W: Write, E: Write> Console<W, E> {
    /// Draw `state` as a bar over the current line.
    pub fn progress(&mut self, state: &ProgressState) -> Result<ProgressLine, RenderError> {
        let line = progress_layout(
            self.columns(),
            state,
            &self.settings().progress_fill,
            &self.settings().progress_pending,
        )?;
        self.refresh_single(&line.text, &ColorToken::PLAIN)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{captured, console_with};
    use crate::tui::settings::DisplaySettings;

    fn layout(columns: usize, percent: f64) -> Result<ProgressLine, RenderError> {
        progress_layout(
            columns,
            &ProgressState::new(percent).with_prefix("copy").with_suffix(" ok"),
            "=",
            "-",
        )
    }

    #[test]
    fn bar_and_labels_fill_the_row() {
        let line = layout(60, 42.5).unwrap();
        assert_eq!(line.filled + line.remaining, line.bar_width);
        assert_eq!(line.text.chars().count(), 60);
        assert!(line.text.starts_with("copy [="));
        assert!(line.text.ends_with("] 42.5% ok"));
    }

    #[test]
    fn extremes_fill_nothing_or_everything() {
        let empty = layout(50, 0.0).unwrap();
        assert_eq!(empty.filled, 0);
        assert_eq!(empty.remaining, empty.bar_width);

        let full = layout(50, 100.0).unwrap();
        assert_eq!(full.filled, full.bar_width);
        assert_eq!(full.remaining, 0);
    }

    #[test]
    fn filled_cells_round_up() {
        // 10-cell bar at 1% still shows one filled cell.
        let state = ProgressState::new(1.0);
        let line = progress_layout(10 + 5 + 1, &state, "#", ".").unwrap();
        assert_eq!(line.bar_width, 10);
        assert_eq!(line.filled, 1);
        assert_eq!(line.text, " [#.........] 1%");
    }

    #[test]
    fn percent_outside_range_is_rejected() {
        assert!(matches!(
            layout(80, 150.0),
            Err(RenderError::InvalidPercent(p)) if p == 150.0
        ));
        assert!(matches!(layout(80, -1.0), Err(RenderError::InvalidPercent(_))));
        assert!(matches!(
            layout(80, f64::NAN),
            Err(RenderError::InvalidPercent(_))
        ));
    }

    #[test]
    fn narrow_terminal_is_rejected() {
        // "copy" + " ok" + "50" + 5 reserved = 14 columns before any bar cell.
        assert!(matches!(
            layout(14, 50.0),
            Err(RenderError::TerminalTooNarrow {
                columns: 14,
                required: 14
            })
        ));
        assert!(layout(15, 50.0).is_ok());
    }

    #[test]
    fn percent_is_rounded_to_two_decimals() {
        assert_eq!(format_percent(33.3333), "33.33");
        assert_eq!(format_percent(50.0), "50");
    }

    #[test]
    fn console_progress_uses_configured_glyphs() {
        let mut console = console_with(30, DisplaySettings::default());
        console.set_progress_glyphs("#", ".");
        let line = console.progress(&ProgressState::new(50.0)).unwrap();
        let (out, _) = captured(console);
        assert_eq!(out, format!("{}\r", line.text));
        assert!(line.text.contains("#."));
        assert_eq!(line.text.chars().count(), 30);
    }
}
