//! Fixed substitution tables from ASCII letters and digits to their styled
//! Unicode counterparts.
//!
//! Each table is built once on first use and never mutated. Characters
//! outside `A-Z`, `a-z` and `0-9` have no entry and pass through.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Mathematical Italic small h (U+1D455) is unassigned; Unicode points to
/// the Planck constant instead.
const ITALIC_SMALL_H: char = '\u{210E}';

pub static BOLD: Lazy<StyleMap> = Lazy::new(|| {
    StyleMap::from_ranges(
        "bold",
        [('A', 0x1D400), ('a', 0x1D41A), ('0', 0x1D7CE)],
        &[],
    )
});

pub static ITALIC: Lazy<StyleMap> = Lazy::new(|| {
    // There are no italic digits; sans-serif digits stand in for them.
    StyleMap::from_ranges(
        "italic",
        [('A', 0x1D434), ('a', 0x1D44E), ('0', 0x1D7E2)],
        &[('h', ITALIC_SMALL_H)],
    )
});

/// A bidirectional `char -> char` table for one style.
#[derive(Debug)]
pub struct StyleMap {
    name: &'static str,
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl StyleMap {
    /// Build a table from the first styled code point of each ASCII run
    /// (`A-Z`, `a-z`, `0-9`), then apply `overrides`.
    ///
    /// Panics unless all 62 symbols map to valid, pairwise distinct chars.
    fn from_ranges(
        name: &'static str,
        starts: [(char, u32); 3],
        overrides: &[(char, char)],
    ) -> Self {
        let mut forward = HashMap::with_capacity(62);

        for (first, styled_first) in starts {
            let len = if first == '0' { 10 } else { 26 };
            for offset in 0..len {
                let plain = char::from(first as u8 + offset as u8);
                let code = styled_first + offset;
                match char::from_u32(code) {
                    Some(styled) => {
                        forward.insert(plain, styled);
                    }
                    None => panic!("{} style: U+{:X} for {:?} is not a char", name, code, plain),
                }
            }
        }

        for &(plain, styled) in overrides {
            forward.insert(plain, styled);
        }

        let reverse: HashMap<char, char> =
            forward.iter().map(|(&plain, &styled)| (styled, plain)).collect();

        assert_eq!(forward.len(), 62, "{} style must cover every ASCII alphanumeric", name);
        assert_eq!(reverse.len(), forward.len(), "{} style maps two symbols to one char", name);

        Self { name, forward, reverse }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn style(&self, c: char) -> char {
        self.forward.get(&c).copied().unwrap_or(c)
    }

    pub fn unstyle(&self, c: char) -> char {
        self.reverse.get(&c).copied().unwrap_or(c)
    }

    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.style(c)).collect()
    }

    pub fn restore(&self, text: &str) -> String {
        text.chars().map(|c| self.unstyle(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn alphanumerics() -> impl Iterator<Item = char> {
        ('A'..='Z').chain('a'..='z').chain('0'..='9')
    }

    #[test]
    fn test_every_alphanumeric_is_mapped_and_changed() {
        for map in [&*BOLD, &*ITALIC] {
            assert_eq!(map.len(), 62, "{} table size", map.name());
            for c in alphanumerics() {
                assert_ne!(map.style(c), c, "{} leaves {:?} unchanged", map.name(), c);
            }
        }
    }

    #[test]
    fn test_tables_are_injective() {
        for map in [&*BOLD, &*ITALIC] {
            let outputs: HashSet<char> = alphanumerics().map(|c| map.style(c)).collect();
            assert_eq!(outputs.len(), 62, "{} has colliding outputs", map.name());
            assert_eq!(map.reverse.len(), 62);
        }
    }

    #[test]
    #[should_panic(expected = "is not a char")]
    fn test_build_rejects_invalid_code_point() {
        // 0xD800.. is the surrogate range.
        StyleMap::from_ranges("broken", [('A', 0x1D400), ('a', 0x1D41A), ('0', 0xD800)], &[]);
    }

    #[test]
    #[should_panic(expected = "maps two symbols to one char")]
    fn test_build_rejects_colliding_override() {
        StyleMap::from_ranges(
            "colliding",
            [('A', 0x1D400), ('a', 0x1D41A), ('0', 0x1D7CE)],
            &[('b', '\u{1D41A}')],
        );
    }

    #[test]
    fn test_known_code_points() {
        assert_eq!(BOLD.style('A'), '\u{1D400}');
        assert_eq!(BOLD.style('z'), '\u{1D433}');
        assert_eq!(BOLD.style('9'), '\u{1D7D7}');
        assert_eq!(ITALIC.style('A'), '\u{1D434}');
        assert_eq!(ITALIC.style('g'), '\u{1D454}');
        assert_eq!(ITALIC.style('h'), '\u{210E}');
        assert_eq!(ITALIC.style('i'), '\u{1D456}');
        assert_eq!(ITALIC.style('0'), '\u{1D7E2}');
    }

    #[test]
    fn test_unmapped_pass_through() {
        for c in [' ', '.', '_', '\n', 'é', 'ß', '字', '\u{1D400}'] {
            assert_eq!(BOLD.style(c), c);
            assert_eq!(ITALIC.style(c), c);
        }
    }

    #[test]
    fn test_restore_inverts_apply() {
        let text = "Hello, World 2024! héllo";
        for map in [&*BOLD, &*ITALIC] {
            assert_eq!(map.restore(&map.apply(text)), text);
        }
    }
}
