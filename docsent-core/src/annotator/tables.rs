//! Character and word lookup tables used by the default annotators
//!
//! Optimized for hot-path lookups with an ASCII fast-path.

use std::collections::HashSet;

/// Fast character set lookup
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII members (rare)
    non_ascii: HashSet<char>,
}

impl CharTable {
    /// Create from list of characters
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check membership - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Whether every character of a non-empty string is in the table
    pub fn contains_all(&self, s: &str) -> bool {
        !s.is_empty() && s.chars().all(|ch| self.contains(ch))
    }
}

/// Case-insensitive abbreviation set
#[derive(Debug, Clone, Default)]
pub struct AbbrevTable {
    words: HashSet<String>,
}

impl AbbrevTable {
    /// Build from abbreviations written without their final period
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = abbreviations
            .into_iter()
            .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        Self { words }
    }

    /// Check whether a word is a known abbreviation
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of abbreviations
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_lookup() {
        let table = CharTable::new(['.', '!', '?', '。', '！', '？']);

        // ASCII fast path
        assert!(table.contains('.'));
        assert!(table.contains('!'));
        assert!(!table.contains(','));

        // Non-ASCII
        assert!(table.contains('。'));
        assert!(table.contains('？'));
        assert!(!table.contains('、'));
    }

    #[test]
    fn test_contains_all() {
        let table = CharTable::new(['.', '!', '?']);
        assert!(table.contains_all("?!"));
        assert!(table.contains_all("..."));
        assert!(!table.contains_all(".a"));
        assert!(!table.contains_all(""));
    }

    #[test]
    fn test_abbreviation_case_insensitive() {
        let table = AbbrevTable::new(["Dr", "e.g.", "U.S", ""]);
        assert_eq!(table.len(), 3);
        assert!(table.contains("dr"));
        assert!(table.contains("DR"));
        assert!(table.contains("E.G"));
        assert!(table.contains("u.s"));
        assert!(!table.contains("hello"));
    }
}
