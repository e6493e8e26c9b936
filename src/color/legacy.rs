//! Packed-integer color form kept for numeric literals from older callers.
//!
//! Layout: bit 0 is bold. Bits 1-7 hold the foreground: a normal hue is
//! `128 | (sgr << 1)` with `sgr` in `30..=37`, a bright hue is `sgr << 1`
//! with bit 7 clear. Bits 8 and up hold the background as `sgr << 8` with
//! `sgr` in `40..=47`. The two subranges never overlap.

use super::{ColorToken, Foreground, Hue};
use crate::error::ColorError;

pub const BOLD: u32 = 1;

pub const BLACK: u32 = 188;
pub const RED: u32 = 190;
pub const GREEN: u32 = 192;
pub const YELLOW: u32 = 194;
pub const BLUE: u32 = 196;
pub const PURPLE: u32 = 198;
pub const WHITE: u32 = 202;

pub const BG_BLACK: u32 = 10240;
pub const BG_RED: u32 = 10496;
pub const BG_GREEN: u32 = 10752;
pub const BG_YELLOW: u32 = 11008;
pub const BG_BLUE: u32 = 11264;
pub const BG_PURPLE: u32 = 11520;
pub const BG_WHITE: u32 = 12032;

const NORMAL_MARKER: u32 = 1 << 7;
const FOREGROUND_MASK: u32 = 0xFE;

fn decode_foreground(bits: u32) -> Option<Foreground> {
    let field = bits & FOREGROUND_MASK;
    if field == 0 {
        return None;
    }
    let bright = field & NORMAL_MARKER == 0;
    let code = (field & !NORMAL_MARKER) >> 1;
    let offset = code.checked_sub(30).filter(|off| *off <= 7)?;
    let hue = Hue::from_sgr_offset(offset as u8)?;
    Some(Foreground { hue, bright })
}

fn decode_background(bits: u32) -> Option<Hue> {
    let code = bits >> 8;
    if code == 0 {
        return None;
    }
    let offset = code.checked_sub(40).filter(|off| *off <= 7)?;
    Hue::from_sgr_offset(offset as u8)
}

impl ColorToken {
    /// Pack this token into the legacy integer form.
    pub fn to_bits(&self) -> u32 {
        let mut bits = u32::from(self.bold);
        if let Some(fg) = self.foreground {
            let code = 30 + u32::from(fg.hue.sgr_offset());
            bits |= code << 1;
            if !fg.bright {
                bits |= NORMAL_MARKER;
            }
        }
        if let Some(bg) = self.background {
            bits |= (40 + u32::from(bg.sgr_offset())) << 8;
        }
        bits
    }

    /// Lenient decode: subfields outside their valid range are dropped,
    /// matching how the terminal encoder skips out-of-range codes.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            foreground: decode_foreground(bits),
            background: decode_background(bits),
            bold: bits & BOLD != 0,
        }
    }
}

/// Strict decode: any non-empty subfield that does not resolve is an error.
impl TryFrom<u32> for ColorToken {
    type Error = ColorError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        let token = Self::from_bits(bits);
        let fg_garbage = bits & FOREGROUND_MASK != 0 && token.foreground.is_none();
        let bg_garbage = bits >> 8 != 0 && token.background.is_none();
        if fg_garbage || bg_garbage {
            return Err(ColorError::InvalidColorValue(bits.to_string()));
        }
        Ok(token)
    }
}
