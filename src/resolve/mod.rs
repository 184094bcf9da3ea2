//! Per-word resolution of the ambiguous central vowel.
//!
//! Dictionary lookup wins outright; otherwise each placeholder is resolved
//! statistically from its 4-character context, except word-initially where
//! the vowel is always written î.

use crate::dict::WordDictionary;
use crate::rules::{Rules, CENTRAL_VOWEL};
use crate::stats::{CentralVowelModel, MASK_LEN};

/// The diacritic letter the placeholder always takes at the start of a word.
const WORD_INITIAL_VOWEL: char = 'î';

/// Build the 4-character context window around `index`: two characters
/// before and two after, each side padded with spaces near the string
/// boundaries. The character at `index` itself is excluded.
///
/// A mask of any other length is a construction bug; the assert aborts
/// rather than let a silent mis-resolution corrupt output text.
pub fn context_mask(chars: &[char], index: usize) -> String {
    let mut mask = String::with_capacity(MASK_LEN * 2);
    if index >= 2 {
        mask.extend(chars[index - 2..index].iter());
    } else if index >= 1 {
        mask.push(' ');
        mask.push(chars[index - 1]);
    } else {
        mask.push_str("  ");
    }
    if index + 2 < chars.len() {
        mask.extend(chars[index + 1..index + 3].iter());
    } else if index + 1 < chars.len() {
        mask.push(chars[index + 1]);
        mask.push(' ');
    } else {
        mask.push_str("  ");
    }
    assert_eq!(
        mask.chars().count(),
        MASK_LEN,
        "context mask must be exactly {MASK_LEN} chars"
    );
    mask
}

/// Resolves single words against a dictionary and a frequency model, both
/// borrowed immutable handles loaded at startup.
pub struct WordResolver<'a> {
    rules: &'a Rules,
    dict: &'a WordDictionary,
    vowels: &'a CentralVowelModel,
}

impl<'a> WordResolver<'a> {
    pub fn new(rules: &'a Rules, dict: &'a WordDictionary, vowels: &'a CentralVowelModel) -> Self {
        Self {
            rules,
            dict,
            vowels,
        }
    }

    /// Whole-word dictionary lookup. The word is lowercased and Cunia-
    /// canonicalized to form the key; a miss is a normal outcome.
    pub fn by_dictionary(&self, word: &str) -> Option<String> {
        let key = self.rules.diaro_to_cunia(&word.to_lowercase());
        self.dict.get(&key).map(str::to_string)
    }

    /// Statistical resolution of every placeholder in the word.
    ///
    /// Word-initial placeholders always become î, regardless of table
    /// contents. Elsewhere the frequency model decides from the context
    /// mask. A second pass restores the original casing by comparing the
    /// lowercased input against the original input position by position
    /// (not the resolved output against the original).
    pub fn by_statistics(&self, word: &str) -> String {
        let lower: Vec<char> = word.to_lowercase().chars().collect();

        let mut resolved = String::with_capacity(word.len());
        for (i, &ch) in lower.iter().enumerate() {
            if ch == CENTRAL_VOWEL && i == 0 {
                resolved.push(WORD_INITIAL_VOWEL);
            } else if ch == CENTRAL_VOWEL {
                let mask = context_mask(&lower, i);
                resolved.push(self.vowels.choose(&mask));
            } else {
                resolved.push(ch);
            }
        }

        let original: Vec<char> = word.chars().collect();
        let mut cased = String::with_capacity(resolved.len());
        for (i, ch) in resolved.chars().enumerate() {
            match (lower.get(i), original.get(i)) {
                (Some(l), Some(o)) if l != o => cased.extend(ch.to_uppercase()),
                _ => cased.push(ch),
            }
        }
        cased
    }

    /// Dictionary first, statistics as fallback. The precedence is a hard
    /// contract: a dictionary hit is returned without consulting the tables.
    pub fn resolve(&self, word: &str) -> String {
        match self.by_dictionary(word) {
            Some(spelling) => spelling,
            None => self.by_statistics(word),
        }
    }
}
