//! Color tokens and their encodings.
//!
//! A [`ColorToken`] carries an optional foreground (one of seven hues, normal
//! or bright), an optional background hue, and a bold flag. It renders either
//! as an SGR escape sequence for terminals or as an inline-styled span for the
//! markup target. The historical packed-integer form lives in [`legacy`];
//! extended CSS color forms for the markup target live in [`markup`].

pub mod legacy;
pub mod markup;

use crate::error::ColorError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub use markup::{MarkupColor, MarkupStyle};

const SGR_BOLD: u8 = 1;
const SGR_FG_BASE: u8 = 30;
const SGR_FG_BRIGHT_BASE: u8 = 90;
const SGR_BG_BASE: u8 = 40;
const SGR_RESET: &str = "\x1b[0m";

/// Output target, fixed for the lifetime of a console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    /// ANSI terminal: SGR colors, raw newlines, cursor repositioning.
    #[default]
    Terminal,
    /// HTML-like sink: styled spans and `<br/>` line breaks.
    Markup,
}

impl RenderTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Markup => "markup",
        }
    }

    /// Line-break token emitted after one printed line.
    pub fn line_break(self) -> &'static str {
        match self {
            Self::Terminal => "\n",
            Self::Markup => "<br/>",
        }
    }

    /// Whether in-place refresh via cursor-up is available.
    pub fn supports_cursor(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl FromStr for RenderTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "term" | "cli" => Ok(Self::Terminal),
            "markup" | "html" | "web" => Ok(Self::Markup),
            other => Err(format!("unknown render target `{other}`")),
        }
    }
}

/// One of the seven palette hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    White,
}

impl Hue {
    pub const ALL: [Hue; 7] = [
        Hue::Black,
        Hue::Red,
        Hue::Green,
        Hue::Yellow,
        Hue::Blue,
        Hue::Purple,
        Hue::White,
    ];

    /// Lowercase palette name, also used as the CSS color keyword.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::White => "white",
        }
    }

    /// Resolve a hue by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|hue| hue.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Offset from the SGR color base (cyan, offset 6, is not in the palette).
    pub(crate) fn sgr_offset(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Blue => 4,
            Self::Purple => 5,
            Self::White => 7,
        }
    }

    pub(crate) fn from_sgr_offset(offset: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|hue| hue.sgr_offset() == offset)
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Foreground color: a hue at normal or bright intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Foreground {
    pub hue: Hue,
    pub bright: bool,
}

impl Foreground {
    pub fn normal(hue: Hue) -> Self {
        Self { hue, bright: false }
    }

    pub fn bright(hue: Hue) -> Self {
        Self { hue, bright: true }
    }

    /// SGR parameter: 30-37 for normal, 90-97 for bright.
    pub fn sgr_code(self) -> u8 {
        let base = if self.bright {
            SGR_FG_BRIGHT_BASE
        } else {
            SGR_FG_BASE
        };
        base + self.hue.sgr_offset()
    }
}

/// Foreground, background, and emphasis for one run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub foreground: Option<Foreground>,
    pub background: Option<Hue>,
    pub bold: bool,
}

impl ColorToken {
    /// Token with every field absent; renders as plain text.
    pub const PLAIN: ColorToken = ColorToken {
        foreground: None,
        background: None,
        bold: false,
    };

    /// Token with a normal-intensity foreground hue.
    pub fn fg(hue: Hue) -> Self {
        Self {
            foreground: Some(Foreground::normal(hue)),
            ..Self::PLAIN
        }
    }

    /// Token with only a background hue.
    pub fn bg(hue: Hue) -> Self {
        Self {
            background: Some(hue),
            ..Self::PLAIN
        }
    }

    pub fn with_background(mut self, hue: Hue) -> Self {
        self.background = Some(hue);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Promote the foreground (if any) to bright intensity.
    pub fn brightened(mut self) -> Self {
        if let Some(fg) = self.foreground.as_mut() {
            fg.bright = true;
        }
        self
    }

    pub fn is_plain(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.bold
    }

    /// SGR parameters in emission order: bold, background, foreground.
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(3);
        if self.bold {
            codes.push(SGR_BOLD);
        }
        if let Some(bg) = self.background {
            codes.push(SGR_BG_BASE + bg.sgr_offset());
        }
        if let Some(fg) = self.foreground {
            codes.push(fg.sgr_code());
        }
        codes
    }

    /// Parse either a legacy packed integer (all digits) or a `|`-delimited
    /// name list such as `"red|blue|bold"`.
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let trimmed = spec.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let bits = trimmed
                .parse::<u32>()
                .map_err(|_| ColorError::InvalidColorValue(trimmed.to_string()))?;
            return Self::try_from(bits);
        }
        parse_names(trimmed)
    }
}

impl FromStr for ColorToken {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One resolved segment of a name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Bold,
    /// Bare hue; slot (foreground or background) decided by position.
    Hue(Hue),
    Foreground(Foreground),
    Background(Hue),
}

fn classify(segment: &str) -> Option<Segment> {
    let lower = segment.to_ascii_lowercase();
    if lower == "bold" {
        return Some(Segment::Bold);
    }
    if let Some(hue) = Hue::from_name(&lower) {
        return Some(Segment::Hue(hue));
    }
    if let Some(rest) = lower
        .strip_prefix("bright_")
        .or_else(|| lower.strip_prefix("light_"))
    {
        return Hue::from_name(rest).map(|hue| Segment::Foreground(Foreground::bright(hue)));
    }
    if let Some(rest) = ["bg_", "on_", "b_"]
        .into_iter()
        .find_map(|prefix| lower.strip_prefix(prefix))
    {
        return Hue::from_name(rest).map(Segment::Background);
    }
    None
}

/// Resolve a single hue/emphasis name into a token.
///
/// A bare hue resolves to a foreground; `bg_<hue>` to a background.
pub fn decode_name(name: &str) -> Result<ColorToken, ColorError> {
    let unknown = || ColorError::UnknownColorName(name.trim().to_string());
    let token = match classify(name.trim()).ok_or_else(unknown)? {
        Segment::Bold => ColorToken::PLAIN.with_bold(),
        Segment::Hue(hue) => ColorToken::fg(hue),
        Segment::Foreground(fg) => ColorToken {
            foreground: Some(fg),
            ..ColorToken::PLAIN
        },
        Segment::Background(hue) => ColorToken::bg(hue),
    };
    Ok(token)
}

fn parse_names(spec: &str) -> Result<ColorToken, ColorError> {
    let mut token = ColorToken::PLAIN;
    // A leading empty segment (`"|blue"`) leaves the foreground unset.
    let mut foreground_slot_open = true;

    for (idx, raw) in spec.split('|').enumerate() {
        let segment = raw.trim();
        if segment.is_empty() {
            if idx == 0 {
                foreground_slot_open = false;
            }
            continue;
        }
        let unknown = || ColorError::UnknownColorName(segment.to_string());
        match classify(segment).ok_or_else(unknown)? {
            Segment::Bold => token.bold = true,
            Segment::Foreground(fg) => {
                if token.foreground.is_some() {
                    return Err(unknown());
                }
                token.foreground = Some(fg);
                foreground_slot_open = false;
            }
            Segment::Background(hue) => {
                if token.background.is_some() {
                    return Err(unknown());
                }
                token.background = Some(hue);
            }
            Segment::Hue(hue) => {
                if foreground_slot_open && token.foreground.is_none() {
                    token.foreground = Some(Foreground::normal(hue));
                    foreground_slot_open = false;
                } else if token.background.is_none() {
                    token.background = Some(hue);
                } else {
                    return Err(unknown());
                }
            }
        }
    }
    Ok(token)
}

/// Wrap `text` in an SGR sequence; plain tokens return the text unchanged.
pub fn sgr(text: &str, token: &ColorToken) -> String {
    let codes = token.sgr_codes();
    if codes.is_empty() {
        return text.to_string();
    }
    let params = codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("\x1b[{params}m{text}{SGR_RESET}")
}

/// Encode `text` with `token` for the given target.
pub fn encode(text: &str, token: &ColorToken, target: RenderTarget) -> String {
    match target {
        RenderTarget::Terminal => sgr(text, token),
        RenderTarget::Markup => markup::span(text, &MarkupStyle::from(token)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_orders_bold_background_foreground() {
        let token = ColorToken::fg(Hue::Red)
            .with_background(Hue::Blue)
            .with_bold();
        assert_eq!(sgr("hi", &token), "\x1b[1;44;31mhi\x1b[0m");
    }

    #[test]
    fn plain_token_leaves_text_untouched() {
        // No codes means no empty `ESC[m` wrapper.
        assert_eq!(sgr("plain", &ColorToken::PLAIN), "plain");
        assert_eq!(
            encode("plain", &ColorToken::PLAIN, RenderTarget::Markup),
            "plain"
        );
    }

    #[test]
    fn bright_foreground_uses_high_intensity_codes() {
        let token = ColorToken::fg(Hue::White).brightened();
        assert_eq!(token.sgr_codes(), vec![97]);
        assert_eq!(ColorToken::fg(Hue::White).sgr_codes(), vec![37]);
    }

    #[test]
    fn name_list_fills_foreground_then_background() {
        let token: ColorToken = "red|blue|bold".parse().unwrap();
        assert_eq!(
            token,
            ColorToken::fg(Hue::Red)
                .with_background(Hue::Blue)
                .with_bold()
        );
    }

    #[test]
    fn name_list_is_case_insensitive_and_trims() {
        let token = ColorToken::parse(" GREEN | Bold ").unwrap();
        assert_eq!(token, ColorToken::fg(Hue::Green).with_bold());
    }

    #[test]
    fn leading_empty_segment_skips_foreground() {
        let token = ColorToken::parse("|yellow").unwrap();
        assert_eq!(token, ColorToken::bg(Hue::Yellow));
    }

    #[test]
    fn explicit_prefixes_pick_slots() {
        let token = ColorToken::parse("bg_white|bright_black").unwrap();
        assert_eq!(token.background, Some(Hue::White));
        assert_eq!(token.foreground, Some(Foreground::bright(Hue::Black)));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert_eq!(
            ColorToken::parse("magenta"),
            Err(ColorError::UnknownColorName("magenta".into()))
        );
        assert_eq!(
            decode_name("cyan"),
            Err(ColorError::UnknownColorName("cyan".into()))
        );
        assert!(ColorToken::parse("red|blue|green").is_err());
    }

    #[test]
    fn decode_name_resolves_single_names() {
        assert_eq!(decode_name("Purple").unwrap(), ColorToken::fg(Hue::Purple));
        assert_eq!(decode_name("bold").unwrap(), ColorToken::PLAIN.with_bold());
        assert_eq!(decode_name("on_red").unwrap(), ColorToken::bg(Hue::Red));
    }

    #[test]
    fn short_background_prefix_is_accepted() {
        assert_eq!(decode_name("b_blue").unwrap(), ColorToken::bg(Hue::Blue));
        assert_eq!(
            ColorToken::parse("red|b_blue|bold").unwrap(),
            ColorToken::fg(Hue::Red)
                .with_background(Hue::Blue)
                .with_bold()
        );
    }

    #[test]
    fn digits_parse_as_legacy_bits() {
        // 190 is the historical red foreground constant.
        assert_eq!(ColorToken::parse("190").unwrap(), ColorToken::fg(Hue::Red));
        assert_eq!(
            ColorToken::parse("191").unwrap(),
            ColorToken::fg(Hue::Red).with_bold()
        );
    }

    #[test]
    fn markup_encoding_uses_span_declarations() {
        let token = ColorToken::fg(Hue::Green)
            .with_background(Hue::Black)
            .with_bold();
        assert_eq!(
            encode("ok", &token, RenderTarget::Markup),
            "<span style=\"font-weight: bold;background-color: black;color: green;\">ok</span>"
        );
    }

    #[test]
    fn render_target_parses_aliases() {
        assert_eq!("HTML".parse::<RenderTarget>(), Ok(RenderTarget::Markup));
        assert_eq!("terminal".parse::<RenderTarget>(), Ok(RenderTarget::Terminal));
        assert!("pdf".parse::<RenderTarget>().is_err());
        assert_eq!(RenderTarget::Markup.line_break(), "<br/>");
        assert!(!RenderTarget::Markup.supports_cursor());
    }
}
