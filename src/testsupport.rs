//! Shared fixtures for console-rendering test modules.

use crate::tui::metrics::TerminalMetrics;
use crate::tui::renderer::Console;
use crate::tui::settings::DisplaySettings;

/// Console writing into memory with the width pinned to `columns`.
pub fn console_with(columns: usize, settings: DisplaySettings) -> Console<Vec<u8>, Vec<u8>> {
    let mut metrics = TerminalMetrics::fixed(columns);
    metrics.set_default_columns(settings.default_columns);
    Console::new(Vec::new(), Vec::new(), settings, metrics)
}

/// Consume the console and return what it wrote to (stdout, stderr).
pub fn captured(console: Console<Vec<u8>, Vec<u8>>) -> (String, String) {
    let (out, err) = console.into_inner();
    (
        String::from_utf8(out).expect("console output is UTF-8"),
        String::from_utf8(err).expect("console error output is UTF-8"),
    )
}
