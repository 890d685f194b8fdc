//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI escape sequences so widths can be measured on the visible
/// text only.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Display width of the visible portion of `s`.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Left-align `s` into `width` columns, counting visible characters only
/// so colored cells stay lined up.
pub fn pad_visible(s: &str, width: usize) -> String {
    let vis = visible_width(s);
    if vis >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - vis))
}

/// Truncate to `max` visible columns, with an ellipsis when cut.
pub fn truncate_visible(s: &str, max: usize) -> String {
    if visible_width(s) <= max {
        return s.to_string();
    }

    let keep = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if used + w > keep {
            break;
        }
        out.push(c);
        used += w;
    }

    out.push_str("...");
    out
}
