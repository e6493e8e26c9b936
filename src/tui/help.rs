//! Column-aligned option/description tables.

use crate::color::ColorToken;
use crate::tui::renderer::Console;
use crate::tui::settings;
use crate::tui::text::visible_width;
use std::io::{self, Write};

/// One row of a help table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpRow {
    /// Printed verbatim with no alignment.
    Heading(String),
    /// One or more aliases sharing a description.
    Entry {
        labels: Vec<String>,
        description: String,
    },
}

impl HelpRow {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    pub fn entry(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Entry {
            labels: vec![label.into()],
            description: description.into(),
        }
    }

    /// Entry listing several aliases, joined with `", "`.
    pub fn aliases<I, S>(labels: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Entry {
            labels: labels.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }

    fn label(&self) -> Option<String> {
        match self {
            Self::Heading(_) => None,
            Self::Entry { labels, .. } => Some(labels.join(settings::HELP_ALIAS_SEPARATOR)),
        }
    }

    /// Label of an entry that has a description to align.
    fn paired_label(&self) -> Option<String> {
        match self {
            Self::Entry { description, .. } if !description.is_empty() => self.label(),
            _ => None,
        }
    }
}

/// One output line: an optional label, padding, then description text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLine {
    pub label: String,
    pub pad: usize,
    pub text: String,
}

impl HelpLine {
    /// Unstyled line text.
    pub fn plain(&self) -> String {
        format!("{}{}{}", self.label, " ".repeat(self.pad), self.text)
    }
}

/// Description column: widest label among entries with a description, plus
/// `spacing`. Bare labels print unpadded and do not widen the column.
pub fn description_column(rows: &[HelpRow], spacing: usize) -> usize {
    rows.iter()
        .filter_map(HelpRow::paired_label)
        .map(|label| visible_width(&label))
        .max()
        .unwrap_or(0)
        + spacing
}

/// Lay out `rows` for a terminal `columns` wide.
///
/// Descriptions start at the shared column on the label's line and on every
/// wrapped continuation line.
pub fn layout_help(rows: &[HelpRow], columns: usize, spacing: usize) -> Vec<HelpLine> {
    let col = description_column(rows, spacing);
    let desc_width = columns.saturating_sub(col).max(1);
    let mut out = Vec::new();

    for row in rows {
        let description = match row {
            HelpRow::Heading(text) => {
                out.push(HelpLine {
                    label: text.clone(),
                    pad: 0,
                    text: String::new(),
                });
                continue;
            }
            HelpRow::Entry { description, .. } => description,
        };
        let label = row.label().unwrap_or_default();
        if description.is_empty() {
            out.push(HelpLine {
                label,
                pad: 0,
                text: String::new(),
            });
            continue;
        }

        let mut chunks = textwrap::wrap(description, desc_width)
            .into_iter()
            .map(|chunk| chunk.into_owned());
        let first = chunks.next().unwrap_or_default();
        let pad = col.saturating_sub(visible_width(&label));
        out.push(HelpLine {
            label,
            pad,
            text: first,
        });
        out.extend(chunks.map(|chunk| HelpLine {
            label: String::new(),
            pad: col,
            text: chunk,
        }));
    }
    out
}

impl<W: Write, E: Write> Console<W, E> {
    /// Print a help table sized to the current width.
    pub fn help(&mut self, rows: &[HelpRow], label_color: Option<&ColorToken>) -> io::Result<()> {
        let lines = layout_help(rows, self.columns(), self.settings().help_spacing);
        let rendered = lines
            .iter()
            .map(|line| match label_color {
                Some(token) if !line.label.is_empty() => format!(
                    "{}{}{}",
                    self.paint(&line.label, token),
                    " ".repeat(line.pad),
                    line.text
                ),
                _ => line.plain(),
            })
            .collect::<Vec<_>>();
        self.lines(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{captured, console_with};
    use crate::tui::settings::DisplaySettings;

    #[test]
    fn labels_share_one_description_column() {
        let rows = [
            HelpRow::entry("--verbose", "enable logs"),
            HelpRow::entry("--help", "show help"),
        ];
        let lines = layout_help(&rows, 80, 8);
        let col = "--verbose".len() + 8;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].plain(), format!("{:<col$}enable logs", "--verbose"));
        assert_eq!(lines[1].plain(), format!("{:<col$}show help", "--help"));
    }

    #[test]
    fn long_descriptions_wrap_under_the_column() {
        let rows = [HelpRow::entry("-q", "one two three four five six")];
        // col = 2 + 4 = 6, leaving 14 columns for text.
        let lines = layout_help(&rows, 20, 4);
        let plain = lines.iter().map(HelpLine::plain).collect::<Vec<_>>();
        assert_eq!(
            plain,
            vec![
                "-q    one two three".to_string(),
                "      four five six".to_string(),
            ]
        );
    }

    #[test]
    fn aliases_join_before_the_description() {
        let rows = [
            HelpRow::aliases(["-v", "--verbose"], "louder"),
            HelpRow::entry("-h", "help"),
        ];
        let lines = layout_help(&rows, 80, 2);
        assert_eq!(lines[0].plain(), "-v, --verbose  louder");
        assert_eq!(lines[1].plain(), "-h             help");
    }

    #[test]
    fn bare_labels_do_not_widen_the_column() {
        let rows = [
            HelpRow::entry("--a-very-long-flag-without-text", ""),
            HelpRow::entry("-x", "run"),
        ];
        assert_eq!(description_column(&rows, 2), 4);
        let lines = layout_help(&rows, 80, 2);
        assert_eq!(lines[0].plain(), "--a-very-long-flag-without-text");
        assert_eq!(lines[1].plain(), "-x  run");
    }

    #[test]
    fn overlong_words_are_split_to_fit() {
        // col = 2 + 2 = 4, leaving 6 columns.
        let lines = layout_help(&[HelpRow::entry("-z", "abcdefghij")], 10, 2);
        let plain = lines.iter().map(HelpLine::plain).collect::<Vec<_>>();
        assert_eq!(plain, vec!["-z  abcdef".to_string(), "    ghij".to_string()]);
    }

    #[test]
    fn headings_print_verbatim() {
        let rows = [
            HelpRow::heading("Options:"),
            HelpRow::entry("--long-option", ""),
        ];
        let lines = layout_help(&rows, 80, 8);
        assert_eq!(lines[0].plain(), "Options:");
        assert_eq!(lines[1].plain(), "--long-option");
    }

    #[test]
    fn console_help_uses_configured_spacing() {
        let mut console = console_with(60, DisplaySettings::default());
        console.set_help_spacing(3);
        console
            .help(&[HelpRow::entry("--x", "desc")], None)
            .unwrap();
        let (out, _) = captured(console);
        assert_eq!(out, "--x   desc\n");
    }
}
