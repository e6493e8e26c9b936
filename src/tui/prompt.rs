//! Read-validate-retry prompts.
//!
//! Each prompt shows its text, reads one line, and either accepts it (or the
//! default, for empty input) or asks again. Rejected input is not an error;
//! the loop keeps asking until a value is accepted or input ends.

use crate::color::{self, ColorToken, RenderTarget};
use crate::error::PromptError;
use crate::tui::input::LineInput;
use crate::tui::settings;

/// Acceptance rule for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// Exactly one of the listed choices.
    Choice(Vec<String>),
    /// Yes/no/on/off spellings, ignoring case.
    Boolean,
    /// Base-10 integer with an optional sign.
    Integer,
    /// Any integer or floating-point literal.
    Numeric,
    /// Any non-empty line.
    Freeform,
    /// Exactly this string.
    Exact(String),
}

const BOOLEAN_SPELLINGS: [&str; 8] = ["y", "yes", "n", "no", "on", "off", "true", "false"];

impl Validator {
    pub fn choice<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choice(choices.into_iter().map(Into::into).collect())
    }

    /// Whether `candidate` is acceptable.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Choice(choices) => choices.iter().any(|choice| choice == candidate),
            Self::Boolean => BOOLEAN_SPELLINGS
                .iter()
                .any(|spelling| spelling.eq_ignore_ascii_case(candidate)),
            Self::Integer => is_integer(candidate),
            Self::Numeric => is_numeric(candidate),
            Self::Freeform => !candidate.is_empty(),
            Self::Exact(expected) => candidate == expected,
        }
    }

    /// Reject configurations that could never accept anything.
    pub fn check(&self) -> Result<(), PromptError> {
        match self {
            Self::Choice(choices) if choices.is_empty() => Err(PromptError::EmptyChoices),
            _ => Ok(()),
        }
    }

    /// Suffix listing the choices, e.g. `(y/n)`.
    fn hint(&self) -> Option<String> {
        match self {
            Self::Choice(choices) => Some(format!(
                "{}{}{}",
                settings::CHOICE_OPEN,
                choices.join(settings::CHOICE_SEPARATOR),
                settings::CHOICE_CLOSE
            )),
            _ => None,
        }
    }
}

fn is_integer(candidate: &str) -> bool {
    let digits = candidate.strip_prefix(['+', '-']).unwrap_or(candidate);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_numeric(candidate: &str) -> bool {
    // `f64::from_str` also takes "inf" and "NaN"; a literal needs a digit and
    // nothing alphabetic besides an exponent marker.
    candidate.bytes().any(|b| b.is_ascii_digit())
        && candidate
            .bytes()
            .all(|b| !b.is_ascii_alphabetic() || b == b'e' || b == b'E')
        && candidate.parse::<f64>().is_ok()
}

/// Everything needed to run one prompt round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub text: String,
    /// Returned for empty input, without consulting the validator.
    pub default: Option<String>,
    pub validator: Validator,
    pub color: ColorToken,
}

impl PromptSpec {
    pub fn new(text: impl Into<String>, validator: Validator) -> Self {
        Self {
            text: text.into(),
            default: None,
            validator,
            color: ColorToken::PLAIN,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    /// Prompt text as displayed, before coloring.
    pub fn display_text(&self) -> String {
        let mut text = self.text.clone();
        if let Some(hint) = self.validator.hint() {
            text.push_str(&hint);
        }
        text
    }
}

/// Prompt loop states.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptState {
    Prompting,
    Validating(String),
    Accepted(String),
}

/// Drives prompts against a line-input backend.
pub struct Prompter<I: LineInput> {
    input: I,
    color: bool,
}

impl<I: LineInput> Prompter<I> {
    pub fn new(input: I) -> Self {
        Self { input, color: true }
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }

    /// Ask until a value is accepted.
    ///
    /// There is no attempt limit; only end of input or an interrupt from the
    /// backend ends the loop without a value.
    pub fn run(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        spec.validator.check()?;
        let display = spec.display_text();
        let prompt = if self.color {
            color::encode(&display, &spec.color, RenderTarget::Terminal)
        } else {
            display
        };

        let mut state = PromptState::Prompting;
        let mut attempts = 0usize;
        loop {
            state = match state {
                PromptState::Prompting => {
                    attempts += 1;
                    PromptState::Validating(self.input.read_line(&prompt)?)
                }
                PromptState::Validating(line) => match &spec.default {
                    Some(default) if line.is_empty() => PromptState::Accepted(default.clone()),
                    _ if spec.validator.matches(&line) => PromptState::Accepted(line),
                    _ => {
                        tracing::trace!(attempts, input = %line, "prompt input rejected");
                        PromptState::Prompting
                    }
                },
                PromptState::Accepted(value) => {
                    tracing::debug!(attempts, "prompt accepted");
                    return Ok(value);
                }
            };
        }
    }

    /// Run each prompt in order and collect the answers positionally.
    pub fn interactive_sequence(
        &mut self,
        prompts: &[PromptSpec],
    ) -> Result<Vec<String>, PromptError> {
        for spec in prompts {
            spec.validator.check()?;
        }
        prompts.iter().map(|spec| self.run(spec)).collect()
    }
}
