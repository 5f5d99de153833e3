//! `word_list`: the player's list of words to hide, in the order they were entered.
//!
//! Words can be added one at a time (the interactive path) or parsed in bulk from text with one
//! word per line (the CLI and browser file-drop paths).
//!
//! Normalization rules, applied on every path:
//! - surrounding whitespace is trimmed;
//! - the word is uppercased;
//! - separators (inner whitespace, hyphens, apostrophes) are dropped, so "ice cream" becomes
//!   `ICECREAM`;
//! - words still holding anything outside A-Z (digits, accented letters) are rejected;
//! - empty words are rejected;
//! - duplicates are rejected (case-insensitive, since we uppercase first).
//!
//! Rejection is silent: the list is simply left unchanged. Only the interactive entry box caps
//! words at [`MAX_WORD_LEN`]; the engine itself accepts any length.
//!
//! This module is **WASM-friendly**: `parse_from_str(...)` works everywhere, and
//! `load_from_path(...)` is a native-only convenience.

use crate::alphabet::PuzzleChar;
use crate::errors::WordSearchError;

/// Longest word the interactive entry box accepts.
pub const MAX_WORD_LEN: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '\'' | '\u{2019}')
}

/// Uppercase and drop separators; `None` if nothing is left or a non-grid letter remains.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let word: String = raw.to_uppercase().chars().filter(|&ch| !is_separator(ch)).collect();
    (!word.is_empty() && word.chars().all(|ch| ch.is_grid_letter())).then_some(word)
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word. Returns `false` (and changes nothing) for empty input, a word with characters
    /// outside A-Z, or a duplicate.
    pub fn add_word(&mut self, raw: &str) -> bool {
        let Some(word) = normalize(raw) else {
            return false;
        };
        if self.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Remove a word (matched after normalization). Returns `false` if it was not present.
    pub fn remove_word(&mut self, raw: &str) -> bool {
        let Some(word) = normalize(raw) else {
            return false;
        };
        let before = self.words.len();
        self.words.retain(|w| *w != word);
        self.words.len() != before
    }

    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        normalize(raw).is_some_and(|word| self.words.contains(&word))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Parse newline-separated text, one word per line, through the same rules as [`add_word`].
    ///
    /// Blank lines are skipped and lines starting with `#` are treated as comments.
    ///
    /// [`add_word`]: WordList::add_word
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut list = WordList::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            list.add_word(line);
        }
        list
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`WordSearchError::WordListRead`] if the file cannot be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<WordList, WordSearchError> {
        let path_ref = path.as_ref();
        let data =
            std::fs::read_to_string(path_ref).map_err(|source| WordSearchError::WordListRead {
                path: path_ref.display().to_string(),
                source,
            })?;
        Ok(Self::parse_from_str(&data))
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = WordList::new();
        for w in iter {
            list.add_word(w.as_ref());
        }
        list
    }
}

impl<S: AsRef<str>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for w in iter {
            self.add_word(w.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_word_uppercases_and_trims() {
        let mut list = WordList::new();
        assert!(list.add_word("  cat "));
        assert_eq!(list.words(), ["CAT"]);
    }

    #[test]
    fn test_add_word_dedups_case_insensitively() {
        let mut list = WordList::new();
        assert!(list.add_word("cat"));
        assert!(!list.add_word("CAT"));
        assert!(!list.add_word(" Cat"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_word_rejects_empty() {
        let mut list = WordList::new();
        assert!(!list.add_word(""));
        assert!(!list.add_word("   "));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_word_drops_separators() {
        let mut list = WordList::new();
        assert!(list.add_word("ice cream"));
        assert!(list.add_word("t-rex"));
        assert!(list.add_word("o'clock"));
        assert_eq!(list.words(), ["ICECREAM", "TREX", "OCLOCK"]);
        assert!(!list.add_word("Ice-Cream"));
    }

    #[test]
    fn test_add_word_rejects_non_letters() {
        let mut list = WordList::new();
        assert!(!list.add_word("café"));
        assert!(!list.add_word("r2d2"));
        assert!(!list.add_word("--"));
        assert!(!list.add_word("日本"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let list: WordList = ["zebra", "apple", "mango"].into_iter().collect();
        assert_eq!(list.words(), ["ZEBRA", "APPLE", "MANGO"]);
    }

    #[test]
    fn test_remove_word() {
        let mut list: WordList = ["cat", "dog", "bird"].into_iter().collect();
        assert!(list.remove_word("dog"));
        assert_eq!(list.words(), ["CAT", "BIRD"]);
        assert!(!list.remove_word("dog"));
        assert!(list.remove_word("bird"));
        assert_eq!(list.words(), ["CAT"]);
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let list: WordList = ["Cat"].into_iter().collect();
        assert!(list.contains("cat"));
        assert!(list.contains("CAT"));
        assert!(!list.contains(""));
    }

    #[test]
    fn test_long_words_are_accepted() {
        // the entry cap belongs to the UI, not the list
        let mut list = WordList::new();
        assert!(list.add_word("SUPERCALIFRAGILISTIC"));
        assert!(list.words()[0].len() > MAX_WORD_LEN);
    }

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("cat\ndog\nbird");
        assert_eq!(list.words(), ["CAT", "DOG", "BIRD"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = WordList::parse_from_str("# animals\ncat\n\n   \ndog\n  # more\n");
        assert_eq!(list.words(), ["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let list = WordList::parse_from_str("cat\nCAT\ndog\n cat ");
        assert_eq!(list.words(), ["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_extend() {
        let mut list: WordList = ["cat"].into_iter().collect();
        list.extend(["dog", "cat"]);
        assert_eq!(list.words(), ["CAT", "DOG"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "E005");
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
