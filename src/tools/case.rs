use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Whitespace as JavaScript's `\s` defines it: Unicode `White_Space`
/// without U+0085, plus U+FEFF.
const JS_SPACE: &str = r"[\s\x{FEFF}&&[^\x{85}]]";

/// The start of the text or a `.`, `!` or `?` terminator, optional
/// whitespace, then one ASCII word character.
static SENTENCE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{space}*(?-u:\w)|[.!?]{space}*(?-u:\w)",
        space = JS_SPACE
    ))
    .expect("sentence start regex should compile")
});

/// Lowercase everything, then capitalize the first word character of the
/// text and the first word character after each `.`, `!` or `?` and any
/// whitespace that follows it.
///
/// Word characters are ASCII letters, digits and `_`. There is no
/// abbreviation handling: `"mr. smith"` becomes `"Mr. Smith"`.
pub fn sentence_case(text: &str) -> String {
    let lower = text.to_lowercase();
    SENTENCE_START
        .replace_all(&lower, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}
