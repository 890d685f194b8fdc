/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Greys out the documented fallback strings ("Unknown", "N/A") so real
/// values stand out in listings.
pub fn colorize_fallback(value: &str) -> String {
    if value.trim().is_empty() || value == "N/A" || value == "Unknown" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Count badge for a calendar cell: days with more than one interview get
/// the highlighted badge, single interviews stay plain.
pub fn count_badge(count: usize) -> String {
    if count > 1 {
        format!("{YELLOW}[{}]{RESET}", count)
    } else {
        String::new()
    }
}
