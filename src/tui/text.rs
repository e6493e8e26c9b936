//! Width measuring, padding, and SGR stripping.

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Pad `s` with trailing spaces up to `width`; longer input is never truncated.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let used = visible_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(used));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}

/// Remove `ESC [ ... <final>` sequences so styled text can be measured.
pub fn strip_sgr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            out.push(ch);
            continue;
        }
        if chars.peek() != Some(&'[') {
            continue;
        }
        chars.next();
        for param in chars.by_ref() {
            if ('\x40'..='\x7e').contains(&param) {
                break;
            }
        }
    }
    out
}
