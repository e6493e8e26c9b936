//! Console output: padded colored lines, in-place refresh, and plain printing.

use crate::color::{self, markup, ColorToken, MarkupStyle, RenderTarget};
use crate::tui::metrics::TerminalMetrics;
use crate::tui::settings::{self, DisplaySettings};
use crate::tui::text::pad_to_width;
use crossterm::cursor::MoveUp;
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Output surface bound to one target, one pair of streams, and one width source.
///
/// `W` receives regular output and `E` receives error output. The default
/// instantiation writes to stdout/stderr; tests render into `Vec<u8>`.
#[derive(Debug)]
pub struct Console<W: Write = io::Stdout, E: Write = io::Stderr> {
    out: W,
    err: E,
    settings: DisplaySettings,
    metrics: TerminalMetrics,
}

impl Console {
    /// Console on the process streams, sized by the system probe.
    pub fn stdio(settings: DisplaySettings) -> Self {
        let mut metrics = TerminalMetrics::default();
        metrics.set_default_columns(settings.default_columns);
        Self::new(io::stdout(), io::stderr(), settings, metrics)
    }
}

impl<W: Write, E: Write> Console<W, E> {
    pub fn new(out: W, err: E, settings: DisplaySettings, metrics: TerminalMetrics) -> Self {
        Self {
            out,
            err,
            settings,
            metrics,
        }
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn target(&self) -> RenderTarget {
        self.settings.target
    }

    pub fn set_color(&mut self, enabled: bool) {
        self.settings.color = enabled;
    }

    /// Replace the progress glyphs; takes effect on the next render.
    pub fn set_progress_glyphs(&mut self, fill: impl Into<String>, pending: impl Into<String>) {
        self.settings.progress_fill = fill.into();
        self.settings.progress_pending = pending.into();
    }

    /// Use a space painted with a white background as the fill glyph.
    ///
    /// With color disabled a blank would be invisible, so the plain fill
    /// glyph is used instead.
    pub fn set_solid_progress_fill(&mut self) {
        self.settings.progress_fill = if self.settings.color {
            let token = ColorToken::bg(settings::PROGRESS_SOLID_BACKGROUND);
            self.paint(" ", &token)
        } else {
            settings::PROGRESS_FILL.to_string()
        };
    }

    pub fn set_help_spacing(&mut self, spacing: usize) {
        self.settings.help_spacing = spacing;
    }

    pub fn metrics(&self) -> &TerminalMetrics {
        &self.metrics
    }

    /// Usable width right now.
    pub fn columns(&self) -> usize {
        self.metrics.columns()
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Color `text` for this console's target, or return it as-is when color is off.
    pub fn paint(&self, text: &str, token: &ColorToken) -> String {
        if !self.settings.color {
            return text.to_string();
        }
        color::encode(text, token, self.settings.target)
    }

    /// Apply an extended markup style. Terminals have no equivalent, so the
    /// text passes through unchanged there.
    pub fn paint_markup(&self, text: &str, style: &MarkupStyle) -> String {
        if !self.settings.color || self.settings.target != RenderTarget::Markup {
            return text.to_string();
        }
        markup::span(text, style)
    }

    /// Pad `text` to the current width (never truncating) and color it.
    pub fn render_line(&self, text: &str, token: &ColorToken) -> String {
        self.render_line_at(text, token, self.columns())
    }

    fn render_line_at(&self, text: &str, token: &ColorToken, columns: usize) -> String {
        self.paint(&pad_to_width(text, columns), token)
    }

    /// Write text without a line break.
    pub fn put(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write text followed by the target's line break.
    pub fn println(&mut self, text: &str) -> io::Result<()> {
        let line_break = self.settings.target.line_break();
        write!(self.out, "{text}{line_break}")?;
        self.out.flush()
    }

    /// Write a batch of lines; the markup target keeps them preformatted.
    pub fn lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markup = self.settings.target == RenderTarget::Markup;
        if markup {
            self.out.write_all(settings::MARKUP_PRE_OPEN.as_bytes())?;
        }
        for line in lines {
            self.println(line.as_ref())?;
        }
        if markup {
            self.out.write_all(settings::MARKUP_PRE_CLOSE.as_bytes())?;
        }
        self.out.flush()
    }

    /// Write one line to the error stream.
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let painted = self.paint(text, &settings::COLOR_ERROR);
        let line_break = self.settings.target.line_break();
        write!(self.err, "{painted}{line_break}")?;
        self.err.flush()
    }

    /// Emit `rows` blank lines so the first [`Self::refresh_block`] has room
    /// to move up into without overwriting earlier output.
    pub fn reserve_rows(&mut self, rows: usize) -> io::Result<()> {
        let line_break = self.settings.target.line_break();
        for _ in 0..rows {
            self.out.write_all(line_break.as_bytes())?;
        }
        self.out.flush()
    }

    /// Redraw a block of lines in place.
    ///
    /// On terminals the cursor moves up by `lines.len()` rows first, so the
    /// block overwrites its previous rendering. The markup target cannot
    /// reposition and appends the lines instead.
    pub fn refresh_block<S: AsRef<str>>(&mut self, lines: &[(S, ColorToken)]) -> io::Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        if self.settings.target.supports_cursor() {
            let rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            self.out.queue(MoveUp(rows))?;
        } else {
            tracing::debug!(rows = lines.len(), "markup target cannot reposition; appending block");
        }
        let columns = self.columns();
        let line_break = self.settings.target.line_break();
        for (text, token) in lines {
            let rendered = self.render_line_at(text.as_ref(), token, columns);
            write!(self.out, "{rendered}{line_break}")?;
        }
        self.out.flush()
    }

    /// Emit one padded line ending in a carriage return so the next write
    /// overwrites it.
    pub fn refresh_single(&mut self, text: &str, token: &ColorToken) -> io::Result<()> {
        let rendered = self.render_line(text, token);
        let ending = match self.settings.target {
            RenderTarget::Terminal => "\r",
            RenderTarget::Markup => RenderTarget::Markup.line_break(),
        };
        write!(self.out, "{rendered}{ending}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hue;
    use crate::testsupport::{captured, console_with};
    use crate::tui::metrics::SizeProbe;
    use crate::tui::text::strip_sgr;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingProbe {
        calls: Rc<Cell<usize>>,
    }

    impl SizeProbe for CountingProbe {
        fn query(&self) -> Option<(usize, usize)> {
            self.calls.set(self.calls.get() + 1);
            Some((30, 10))
        }
    }

    #[test]
    fn render_line_pads_to_exact_width() {
        // Stripped of escapes, short input fills the whole row.
        let console = console_with(40, DisplaySettings::default());
        let line = console.render_line("hello", &ColorToken::fg(Hue::Red));
        let plain = strip_sgr(&line);
        assert_eq!(plain.chars().count(), 40);
        assert!(plain.starts_with("hello "));
        assert!(line.starts_with("\x1b[31m"));
    }

    #[test]
    fn render_line_keeps_long_input_whole() {
        let console = console_with(30, DisplaySettings::default());
        let long = "x".repeat(45);
        assert_eq!(console.render_line(&long, &ColorToken::PLAIN), long);
    }

    #[test]
    fn disabled_color_returns_plain_text() {
        let mut console = console_with(30, DisplaySettings::default());
        console.set_color(false);
        assert_eq!(console.paint("hi", &ColorToken::fg(Hue::Blue)), "hi");
    }

    #[test]
    fn refresh_block_moves_up_then_rewrites_each_line() {
        let mut console = console_with(25, DisplaySettings::default());
        console
            .refresh_block(&[
                ("first", ColorToken::PLAIN),
                ("second", ColorToken::fg(Hue::Green)),
            ])
            .unwrap();
        let (out, _) = captured(console);
        assert!(out.starts_with("\x1b[2A"), "got: {out:?}");
        let rows = strip_sgr(&out["\x1b[2A".len()..]);
        let rows = rows.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], format!("{:<25}", "first"));
        assert_eq!(rows[1], format!("{:<25}", "second"));
    }

    #[test]
    fn refresh_block_on_markup_appends_without_cursor_moves() {
        let settings = DisplaySettings {
            target: RenderTarget::Markup,
            ..DisplaySettings::default()
        };
        let mut console = console_with(25, settings);
        console
            .refresh_block(&[("a", ColorToken::PLAIN)])
            .unwrap();
        let (out, _) = captured(console);
        assert!(!out.contains('\x1b'));
        assert!(out.ends_with("<br/>"));
    }

    #[test]
    fn refresh_single_ends_with_carriage_return() {
        let mut console = console_with(22, DisplaySettings::default());
        console.refresh_single("tick", &ColorToken::PLAIN).unwrap();
        let (out, _) = captured(console);
        assert_eq!(out, format!("{:<22}\r", "tick"));
    }

    #[test]
    fn lines_wrap_markup_batches_in_pre() {
        let settings = DisplaySettings {
            target: RenderTarget::Markup,
            ..DisplaySettings::default()
        };
        let mut console = console_with(40, settings);
        console.lines(["one", "two"]).unwrap();
        let (out, _) = captured(console);
        assert_eq!(out, "<pre>one<br/>two<br/></pre>");
    }

    #[test]
    fn put_and_println_use_target_line_break() {
        let mut console = console_with(40, DisplaySettings::default());
        console.put("a").unwrap();
        console.println("b").unwrap();
        let (out, _) = captured(console);
        assert_eq!(out, "ab\n");
    }

    #[test]
    fn paint_markup_is_plain_on_terminal() {
        let console = console_with(40, DisplaySettings::default());
        let style = MarkupStyle::parse("#ff0000|bold").unwrap();
        assert_eq!(console.paint_markup("x", &style), "x");
    }

    #[test]
    fn error_goes_to_error_stream() {
        let mut console = console_with(40, DisplaySettings::default());
        console.set_color(false);
        console.error("boom").unwrap();
        let (out, err) = captured(console);
        assert!(out.is_empty());
        assert_eq!(err, "boom\n");
    }

    #[test]
    fn solid_fill_respects_disabled_color() {
        let no_color = DisplaySettings {
            color: false,
            ..DisplaySettings::default()
        };
        let mut console = console_with(40, no_color);
        console.set_solid_progress_fill();
        assert_eq!(console.settings().progress_fill, settings::PROGRESS_FILL);
        console
            .progress(&crate::tui::progress::ProgressState::new(50.0))
            .unwrap();
        let (out, _) = captured(console);
        assert!(!out.contains('\x1b'), "got: {out:?}");
        assert!(out.contains("=-"));
    }

    #[test]
    fn refresh_block_probes_width_once() {
        let probe = CountingProbe::default();
        let calls = probe.calls.clone();
        let metrics = TerminalMetrics::new(Box::new(probe), 150);
        let mut console = Console::new(Vec::new(), Vec::new(), DisplaySettings::default(), metrics);
        console
            .refresh_block(&[
                ("a", ColorToken::PLAIN),
                ("b", ColorToken::PLAIN),
                ("c", ColorToken::PLAIN),
            ])
            .unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn solid_fill_paints_background_space() {
        let mut console = console_with(40, DisplaySettings::default());
        console.set_solid_progress_fill();
        assert_eq!(console.settings().progress_fill, "\x1b[47m \x1b[0m");
    }
}
