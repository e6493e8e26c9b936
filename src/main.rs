//! CLI entry point for termprint.

mod cli;

use clap::Parser;
use std::thread;
use std::time::Duration;
use termprint::build_info;
use termprint::color::{ColorToken, MarkupStyle, RenderTarget};
use termprint::config::{default_global_config_path, detect_shell, load_config};
use termprint::tui::settings::{self, DisplaySettings};
use termprint::tui::{
    default_line_input, Console, HelpRow, ProgressState, PromptSpec, Prompter, Validator,
};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TERMPRINT_LOG";

fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut console = Console::stdio(DisplaySettings::default());
            let _ = console.error(&format!("error: {e}"));
            std::process::exit(1);
        }
    };

    // Flags override file and environment.
    if args.markup {
        config.display.target = RenderTarget::Markup;
    }
    if args.no_color {
        config.display.color = false;
    }

    let mut console = Console::stdio(config.display);
    if config.solid_progress {
        console.set_solid_progress_fill();
    }

    if let Err(msg) = run(&mut console, args.command) {
        let _ = console.error(&format!("error: {msg}"));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(console: &mut Console, command: cli::Command) -> Result<(), String> {
    match command {
        cli::Command::Paint { text, color } => paint(console, &text, &color),
        cli::Command::Line { text, color } => {
            let token = match color {
                Some(spec) => ColorToken::parse(&spec).map_err(|e| e.to_string())?,
                None => ColorToken::PLAIN,
            };
            let line = console.render_line(&text, &token);
            console.println(&line).map_err(|e| e.to_string())
        }
        cli::Command::Progress {
            steps,
            delay_ms,
            prefix,
            suffix,
            solid,
        } => {
            if solid {
                console.set_solid_progress_fill();
            }
            progress(console, steps, delay_ms, &prefix, &suffix)
        }
        cli::Command::Status {
            rows,
            steps,
            delay_ms,
        } => status(console, rows, steps, delay_ms),
        cli::Command::Ask {
            text,
            choices,
            kind,
            expect,
            default,
        } => ask(console, text, choices, kind, expect, default),
        cli::Command::Info => info(console),
    }
}

fn paint(console: &mut Console, text: &str, spec: &str) -> Result<(), String> {
    let painted = match ColorToken::parse(spec) {
        Ok(token) => console.paint(text, &token),
        // Markup also takes hex/rgb/hsl forms the palette cannot express.
        Err(e) if console.target() == RenderTarget::Markup => {
            let style = MarkupStyle::parse(spec).map_err(|_| e.to_string())?;
            console.paint_markup(text, &style)
        }
        Err(e) => return Err(e.to_string()),
    };
    console.println(&painted).map_err(|e| e.to_string())
}

fn progress(
    console: &mut Console,
    steps: u32,
    delay_ms: u64,
    prefix: &str,
    suffix: &str,
) -> Result<(), String> {
    let steps = steps.max(1);
    for step in 0..=steps {
        let state = ProgressState::new(f64::from(step) * 100.0 / f64::from(steps))
            .with_prefix(prefix)
            .with_suffix(suffix);
        console.progress(&state).map_err(|e| e.to_string())?;
        thread::sleep(Duration::from_millis(delay_ms));
    }
    console.println("").map_err(|e| e.to_string())
}

fn status(console: &mut Console, rows: usize, steps: u32, delay_ms: u64) -> Result<(), String> {
    let colors = [ColorToken::PLAIN, settings::COLOR_HELP_LABEL];
    console.reserve_rows(rows).map_err(|e| e.to_string())?;
    for step in 1..=steps {
        let block = (0..rows)
            .map(|row| {
                (
                    format!("worker {row}: step {step}/{steps}"),
                    colors[row % colors.len()],
                )
            })
            .collect::<Vec<_>>();
        console.refresh_block(&block).map_err(|e| e.to_string())?;
        thread::sleep(Duration::from_millis(delay_ms));
    }
    Ok(())
}

fn ask(
    console: &mut Console,
    text: String,
    choices: Vec<String>,
    kind: cli::AnswerKind,
    expect: Option<String>,
    default: Option<String>,
) -> Result<(), String> {
    let validator = if !choices.is_empty() {
        Validator::Choice(choices)
    } else {
        match kind {
            cli::AnswerKind::Text => Validator::Freeform,
            cli::AnswerKind::Bool => Validator::Boolean,
            cli::AnswerKind::Int => Validator::Integer,
            cli::AnswerKind::Number => Validator::Numeric,
            cli::AnswerKind::Exact => Validator::Exact(
                expect.ok_or_else(|| "--kind exact needs --expect".to_string())?,
            ),
        }
    };
    let mut spec = PromptSpec::new(text, validator).with_color(settings::COLOR_PROMPT);
    if let Some(default) = default {
        spec = spec.with_default(default);
    }

    let color = console.settings().color && console.target() == RenderTarget::Terminal;
    let mut prompter = Prompter::new(default_line_input()).with_color(color);
    let answer = prompter.run(&spec).map_err(|e| e.to_string())?;
    console.println(&answer).map_err(|e| e.to_string())
}

fn info(console: &mut Console) -> Result<(), String> {
    let config_path = default_global_config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    let rows = [
        HelpRow::heading("termprint environment:"),
        HelpRow::entry("version", build_info::VERSION),
        HelpRow::entry("commit", build_info::GIT_COMMIT),
        HelpRow::entry("shell", detect_shell(|name| std::env::var(name).ok())),
        HelpRow::aliases(["columns", "width"], console.columns().to_string()),
        HelpRow::entry("target", console.target().as_str()),
        HelpRow::entry("color", if console.settings().color { "on" } else { "off" }),
        HelpRow::entry("user config", config_path),
    ];
    console
        .help(&rows, Some(&settings::COLOR_HELP_LABEL))
        .map_err(|e| e.to_string())
}
