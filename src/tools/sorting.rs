/// Sort lines by code point, ascending.
pub fn sort_ascending(text: &str) -> String {
    sorted_lines(text).join("\n")
}

/// The ascending order reversed, so duplicates mirror their ascending order.
pub fn sort_descending(text: &str) -> String {
    let mut lines = sorted_lines(text);
    lines.reverse();
    lines.join("\n")
}

fn sorted_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.sort();
    lines
}
