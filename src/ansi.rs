use console::strip_ansi_codes;

use crate::table::Alignment;

/// Number of character positions a string occupies on a terminal,
/// not counting ANSI escape sequences.
pub fn visible_width(ansi_str: &str) -> usize {
    strip_ansi_codes(ansi_str)
        .chars()
        .count()
}

/// Pad a string with spaces up to `width` visible characters.
/// Strings already at or past `width` are returned unchanged, never truncated.
pub fn pad(ansi_str: &str, width: usize, align: Alignment) -> String {
    let stripped_width = visible_width(ansi_str);
    if width <= stripped_width {
        return ansi_str.to_string();
    }
    let padding = " ".repeat(width - stripped_width);
    match align {
        Alignment::Right => format!("{padding}{ansi_str}"),
        Alignment::Left => format!("{ansi_str}{padding}"),
    }
}
