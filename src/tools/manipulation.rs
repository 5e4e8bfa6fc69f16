const TAB_WIDTH: &str = "    ";

/// Prefix each line with its 1-based number and `". "`.
pub fn line_numbers(text: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tabs_to_spaces(text: &str) -> String {
    text.replace('\t', TAB_WIDTH)
}
