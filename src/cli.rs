//! CLI argument parsing via clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Terminal presentation toolkit: colors, in-place lines, progress bars, help
/// tables, and validated prompts.
#[derive(Debug, Parser)]
#[command(
    name = "termprint",
    version,
    long_version = termprint::build_info::LONG_VERSION,
    after_help = termprint::build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./termprint.toml or ~/.config/termprint/termprint.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Render for the markup target instead of the terminal.
    #[arg(long = "markup", global = true)]
    pub markup: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print TEXT encoded with a color spec such as `red|bold` or `194`.
    Paint {
        text: String,
        /// Color names joined by `|`, or a legacy packed integer.
        #[arg(long = "color")]
        color: String,
    },
    /// Print TEXT padded to the terminal width.
    Line {
        text: String,
        #[arg(long = "color")]
        color: Option<String>,
    },
    /// Animate a single-line progress bar.
    Progress {
        #[arg(long = "steps", default_value_t = 20)]
        steps: u32,
        #[arg(long = "delay-ms", default_value_t = 50)]
        delay_ms: u64,
        /// Label before the bar.
        #[arg(long = "prefix", default_value = "")]
        prefix: String,
        /// Label after the percentage.
        #[arg(long = "suffix", default_value = "")]
        suffix: String,
        /// Use a white-background space as the fill glyph.
        #[arg(long = "solid")]
        solid: bool,
    },
    /// Redraw a block of status rows in place.
    Status {
        #[arg(long = "rows", default_value_t = 3)]
        rows: usize,
        #[arg(long = "steps", default_value_t = 10)]
        steps: u32,
        #[arg(long = "delay-ms", default_value_t = 100)]
        delay_ms: u64,
    },
    /// Ask a question until a valid answer is entered, then print it.
    Ask {
        text: String,
        /// Comma-separated list of accepted answers.
        #[arg(long = "choices", value_delimiter = ',')]
        choices: Vec<String>,
        #[arg(long = "kind", value_enum, default_value_t = AnswerKind::Text)]
        kind: AnswerKind,
        /// Required answer for `--kind exact`.
        #[arg(long = "expect")]
        expect: Option<String>,
        /// Returned when the answer is left empty.
        #[arg(long = "default")]
        default: Option<String>,
    },
    /// Show the detected environment as a help table.
    Info,
}

/// Answer validation selected by `ask --kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnswerKind {
    Text,
    Bool,
    Int,
    Number,
    Exact,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn paint_requires_color() {
        assert!(Args::try_parse_from(["termprint", "paint", "hi"]).is_err());
        let args = Args::parse_from(["termprint", "paint", "hi", "--color", "red|bold"]);
        match args.command {
            Command::Paint { text, color } => {
                assert_eq!(text, "hi");
                assert_eq!(color, "red|bold");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let args = Args::parse_from(["termprint", "info", "--markup", "--no-color", "-c", "x.toml"]);
        assert!(args.markup);
        assert!(args.no_color);
        assert_eq!(args.config.as_deref(), Some("x.toml"));
        assert!(matches!(args.command, Command::Info));
    }

    #[test]
    fn ask_splits_choices_on_commas() {
        let args = Args::parse_from([
            "termprint", "ask", "go?", "--choices", "y,n", "--default", "y",
        ]);
        match args.command {
            Command::Ask {
                choices,
                kind,
                default,
                ..
            } => {
                assert_eq!(choices, vec!["y".to_string(), "n".to_string()]);
                assert_eq!(kind, AnswerKind::Text);
                assert_eq!(default.as_deref(), Some("y"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn progress_defaults() {
        let args = Args::parse_from(["termprint", "progress", "--solid"]);
        match args.command {
            Command::Progress {
                steps,
                delay_ms,
                solid,
                ..
            } => {
                assert_eq!(steps, 20);
                assert_eq!(delay_ms, 50);
                assert!(solid);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn kind_accepts_value_enum_names() {
        let args = Args::parse_from(["termprint", "ask", "n?", "--kind", "number"]);
        assert!(matches!(
            args.command,
            Command::Ask {
                kind: AnswerKind::Number,
                ..
            }
        ));
    }
}
