//! Inline-style encoding for the markup target.
//!
//! Besides the palette hues, markup styles accept `#RRGGBB` hex literals,
//! `rgb(r.g.b)` with dot-separated channels, and `hsl(h,s%,l%)`.

use super::{ColorToken, Hue};
use crate::error::ColorError;
use std::fmt;

/// One CSS color value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupColor {
    Named(Hue),
    /// Hex literal including the leading `#`.
    Hex(String),
    Rgb(u8, u8, u8),
    Hsl { hue: u16, saturation: u8, lightness: u8 },
}

impl MarkupColor {
    /// Parse a palette name or an extended literal.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let value = raw.trim();
        let invalid = || ColorError::InvalidColorValue(value.to_string());

        if let Some(digits) = value.strip_prefix('#') {
            let well_formed = matches!(digits.len(), 3 | 6)
                && digits.bytes().all(|b| b.is_ascii_hexdigit());
            return if well_formed {
                Ok(Self::Hex(value.to_string()))
            } else {
                Err(invalid())
            };
        }
        if let Some(body) = function_body(value, "rgb") {
            return parse_rgb(body).ok_or_else(invalid);
        }
        if let Some(body) = function_body(value, "hsl") {
            return parse_hsl(body).ok_or_else(invalid);
        }
        Hue::from_name(value)
            .map(Self::Named)
            .ok_or_else(|| ColorError::UnknownColorName(value.to_string()))
    }
}

impl fmt::Display for MarkupColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(hue) => f.write_str(hue.name()),
            Self::Hex(hex) => f.write_str(hex),
            Self::Rgb(r, g, b) => write!(f, "rgb({r}, {g}, {b})"),
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
        }
    }
}

/// Return the text between `name(` and `)`, matching `name` case-insensitively.
fn function_body<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let open = name.len();
    if value.len() <= open || !value.is_char_boundary(open) {
        return None;
    }
    let (head, rest) = value.split_at(open);
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    rest.strip_prefix('(')?.strip_suffix(')')
}

/// Parse a channel of at most three ASCII digits, capped at `max`.
fn bounded(raw: &str, max: u16) -> Option<u16> {
    if raw.is_empty() || raw.len() > 3 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u16>().ok().filter(|value| *value <= max)
}

fn parse_rgb(body: &str) -> Option<MarkupColor> {
    let channels = body
        .split('.')
        .map(|part| bounded(part, 255).map(|v| v as u8))
        .collect::<Option<Vec<_>>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(MarkupColor::Rgb(*r, *g, *b)),
        _ => None,
    }
}

fn parse_hsl(body: &str) -> Option<MarkupColor> {
    let parts = body.split(',').collect::<Vec<_>>();
    let [hue, saturation, lightness] = parts.as_slice() else {
        return None;
    };
    Some(MarkupColor::Hsl {
        hue: bounded(hue, 360)?,
        saturation: bounded(saturation.strip_suffix('%')?, 100)? as u8,
        lightness: bounded(lightness.strip_suffix('%')?, 100)? as u8,
    })
}

/// Declarations for one styled span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupStyle {
    pub color: Option<MarkupColor>,
    pub background: Option<MarkupColor>,
    pub bold: bool,
}

impl MarkupStyle {
    /// Parse a `"fg|bg|bold"` list. `bold` may appear in any position; color
    /// segments fill the foreground slot first, then the background slot.
    /// An empty leading segment leaves the foreground unset.
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let mut style = Self::default();
        let mut slot = 0usize;
        for raw in spec.split('|') {
            let segment = raw.trim();
            if segment.eq_ignore_ascii_case("bold") {
                style.bold = true;
                continue;
            }
            if segment.is_empty() {
                slot += 1;
                continue;
            }
            let color = MarkupColor::parse(segment)?;
            match slot {
                0 => style.color = Some(color),
                1 => style.background = Some(color),
                _ => return Err(ColorError::UnknownColorName(segment.to_string())),
            }
            slot += 1;
        }
        Ok(style)
    }

    /// Inline CSS in emission order: weight, background, color.
    pub fn declarations(&self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str("font-weight: bold;");
        }
        if let Some(bg) = &self.background {
            out.push_str(&format!("background-color: {bg};"));
        }
        if let Some(fg) = &self.color {
            out.push_str(&format!("color: {fg};"));
        }
        out
    }
}

impl From<&ColorToken> for MarkupStyle {
    fn from(token: &ColorToken) -> Self {
        Self {
            color: token.foreground.map(|fg| MarkupColor::Named(fg.hue)),
            background: token.background.map(MarkupColor::Named),
            bold: token.bold,
        }
    }
}

/// Wrap `text` in a styled span; an empty style returns the text unchanged.
pub fn span(text: &str, style: &MarkupStyle) -> String {
    let declarations = style.declarations();
    if declarations.is_empty() {
        return text.to_string();
    }
    format!("<span style=\"{declarations}\">{text}</span>")
}
