use super::style_map::{BOLD, ITALIC};

/// Combining low line, drawn under the preceding character.
const COMBINING_UNDERLINE: char = '\u{0332}';

pub fn bold(text: &str) -> String {
    BOLD.apply(text)
}

pub fn italic(text: &str) -> String {
    ITALIC.apply(text)
}

/// Follow every character, combining marks included, with U+0332.
pub fn underline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        out.push(c);
        out.push(COMBINING_UNDERLINE);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(bold("Hi 5!"), "\u{1D407}\u{1D422} \u{1D7D3}!");
        assert_eq!(italic("hi"), "\u{210E}\u{1D456}");
        assert_eq!(bold("ça va"), "ç\u{1D41A} \u{1D42F}\u{1D41A}");
    }

    #[test]
    fn test_underline_every_char() {
        assert_eq!(underline("ab"), "a\u{332}b\u{332}");
        assert_eq!(underline("a b"), "a\u{332} \u{332}b\u{332}");
    }

    #[test]
    fn test_underline_does_not_split_code_points() {
        let styled = bold("A");
        assert_eq!(underline(&styled), "\u{1D400}\u{332}");
    }

    #[test]
    fn test_underline_does_not_deduplicate() {
        let twice = underline(&underline("x"));
        // "x\u{332}" is two scalars, so each gets its own mark.
        assert_eq!(twice, "x\u{332}\u{332}\u{332}");
    }
}
