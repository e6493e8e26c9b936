//! Line-input backends for interactive prompts.
//!
//! The prompt loop only needs "show this prompt, give me one line". A
//! line-editing backend is used when both ends are terminals; otherwise the
//! raw fallback writes the prompt and reads one line with no editing.

use crate::error::PromptError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of one line of user input per prompt.
pub trait LineInput {
    /// Show `prompt` and block until a line is entered.
    ///
    /// The trailing newline is stripped. End of input and interrupts are
    /// reported as [`PromptError::Eof`] and [`PromptError::Cancelled`].
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;
}

impl<T: LineInput + ?Sized> LineInput for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        (**self).read_line(prompt)
    }
}

/// Line-editing backend with in-session history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    /// Returns `None` when the editor cannot attach to the terminal.
    pub fn new() -> Option<Self> {
        match DefaultEditor::new() {
            Ok(editor) => Some(Self { editor }),
            Err(e) => {
                tracing::debug!("line editor unavailable: {e}");
                None
            }
        }
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(PromptError::Cancelled),
            Err(ReadlineError::Eof) => Err(PromptError::Eof),
            Err(ReadlineError::Io(e)) => Err(PromptError::Io(e)),
            Err(e) => Err(PromptError::Io(io::Error::other(e.to_string()))),
        }
    }
}

/// Raw fallback: write the prompt, read one line, no editing.
pub struct RawInput<R, W> {
    reader: R,
    writer: W,
}

impl RawInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> RawInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineInput for RawInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Replays a fixed list of answers and records the prompts shown.
///
/// Useful for scripted runs and tests; running out of answers is end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(PromptError::Eof)
    }
}

/// Pick the line editor on an interactive terminal, the raw reader otherwise.
pub fn default_line_input() -> Box<dyn LineInput> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        if let Some(editor) = EditorInput::new() {
            return Box::new(editor);
        }
    }
    Box::new(RawInput::stdio())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_input_writes_prompt_and_strips_line_endings() {
        let mut input = RawInput::new("yes\r\nno\n".as_bytes(), Vec::new());
        assert_eq!(input.read_line("ok? ").unwrap(), "yes");
        assert_eq!(input.read_line("again? ").unwrap(), "no");
        let written = String::from_utf8(input.into_writer()).unwrap();
        assert_eq!(written, "ok? again? ");
    }

    #[test]
    fn raw_input_reports_eof() {
        let mut input = RawInput::new("".as_bytes(), Vec::new());
        assert!(matches!(input.read_line("> "), Err(PromptError::Eof)));
    }

    #[test]
    fn scripted_input_replays_and_records() {
        let mut input = ScriptedInput::new(["a", ""]);
        assert_eq!(input.read_line("first").unwrap(), "a");
        assert_eq!(input.read_line("second").unwrap(), "");
        assert!(matches!(input.read_line("third"), Err(PromptError::Eof)));
        assert_eq!(input.prompts(), ["first", "second", "third"]);
        assert_eq!(input.remaining(), 0);
    }
}
