use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("space run regex should compile"));

/// Collapse runs of spaces and tabs to one space, then trim every line.
pub fn trim_whitespace(text: &str) -> String {
    SPACE_RUN
        .replace_all(text, " ")
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are empty after trimming.
pub fn remove_empty_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
