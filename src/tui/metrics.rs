//! Terminal width detection with a conservative fallback.
//!
//! Size queries go through a [`SizeProbe`] so tests can pin a width. Readings
//! at or below [`settings::MIN_RELIABLE_COLUMNS`] come from pipes and other
//! non-interactive sessions and are replaced by the configured default.

use crate::tui::settings;
use crossterm::terminal;
use std::process::{Command, Stdio};

/// Source of raw terminal dimensions as `(columns, rows)`.
pub trait SizeProbe {
    /// Return `None` when the size cannot be determined.
    fn query(&self) -> Option<(usize, usize)>;
}

/// Probe that asks the tty driver, then `tput`, then `stty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl SizeProbe for SystemProbe {
    fn query(&self) -> Option<(usize, usize)> {
        if let Ok((cols, rows)) = terminal::size() {
            if cols > 0 {
                return Some((cols as usize, rows as usize));
            }
        }
        tput_size().or_else(stty_size)
    }
}

/// Probe that always reports the same reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedProbe(pub Option<(usize, usize)>);

impl FixedProbe {
    pub fn columns(cols: usize) -> Self {
        Self(Some((cols, 24)))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl SizeProbe for FixedProbe {
    fn query(&self) -> Option<(usize, usize)> {
        self.0
    }
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Only the column count is consulted, so rows are reported as zero.
fn tput_size() -> Option<(usize, usize)> {
    let cols = command_output("tput", &["cols"])?.parse().ok()?;
    Some((cols, 0))
}

fn stty_size() -> Option<(usize, usize)> {
    parse_stty_size(&command_output("stty", &["size"])?)
}

/// Parse `stty size` output, which is `"<rows> <cols>"`.
fn parse_stty_size(raw: &str) -> Option<(usize, usize)> {
    let mut parts = raw.split_whitespace();
    let rows = parts.next()?.parse().ok()?;
    let cols = parts.next()?.parse().ok()?;
    Some((cols, rows))
}

/// Usable column width for line rendering.
pub struct TerminalMetrics {
    probe: Box<dyn SizeProbe>,
    default_columns: usize,
}

impl std::fmt::Debug for TerminalMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalMetrics")
            .field("default_columns", &self.default_columns)
            .finish_non_exhaustive()
    }
}

impl Default for TerminalMetrics {
    fn default() -> Self {
        Self::new(Box::new(SystemProbe), settings::DEFAULT_COLUMNS)
    }
}

impl TerminalMetrics {
    pub fn new(probe: Box<dyn SizeProbe>, default_columns: usize) -> Self {
        Self {
            probe,
            default_columns,
        }
    }

    /// Metrics with a pinned width, used by tests and non-tty callers.
    pub fn fixed(columns: usize) -> Self {
        Self::new(Box::new(FixedProbe::columns(columns)), settings::DEFAULT_COLUMNS)
    }

    pub fn default_columns(&self) -> usize {
        self.default_columns
    }

    pub fn set_default_columns(&mut self, columns: usize) {
        self.default_columns = columns;
    }

    /// Current usable width, or the default when the reading is unusable.
    pub fn columns(&self) -> usize {
        match self.probe.query() {
            Some((cols, _)) if cols > settings::MIN_RELIABLE_COLUMNS => cols,
            Some((cols, _)) => {
                tracing::debug!(
                    cols,
                    fallback = self.default_columns,
                    "terminal width below reliable minimum"
                );
                self.default_columns
            }
            None => {
                tracing::debug!(fallback = self.default_columns, "terminal width unavailable");
                self.default_columns
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(probe: FixedProbe) -> TerminalMetrics {
        TerminalMetrics::new(Box::new(probe), 150)
    }

    #[test]
    fn reliable_width_is_used_as_is() {
        assert_eq!(metrics(FixedProbe::columns(80)).columns(), 80);
        assert_eq!(metrics(FixedProbe::columns(21)).columns(), 21);
    }

    #[test]
    fn degenerate_width_falls_back_to_default() {
        // Pipes commonly report zero or tiny widths.
        assert_eq!(metrics(FixedProbe::columns(20)).columns(), 150);
        assert_eq!(metrics(FixedProbe::columns(0)).columns(), 150);
    }

    #[test]
    fn unavailable_width_falls_back_to_default() {
        let mut m = metrics(FixedProbe::unavailable());
        assert_eq!(m.columns(), 150);
        m.set_default_columns(100);
        assert_eq!(m.columns(), 100);
    }

    #[test]
    fn stty_output_is_rows_then_columns() {
        assert_eq!(parse_stty_size("24 132\n"), Some((132, 24)));
        assert_eq!(parse_stty_size("garbage"), None);
        assert_eq!(parse_stty_size(""), None);
    }
}
