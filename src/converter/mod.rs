//! Top-level orthography conversion façade.
//!
//! Composes the rule passes, the word dictionary, the frequency model and
//! an injected segmenter into the two public directions: arbitrary input →
//! Cunia, and Cunia → DIARO with per-word central-vowel resolution.

#[cfg(test)]
mod tests;
#[cfg(test)]
pub(crate) mod testutil;

use std::str::FromStr;

use crate::dict::WordDictionary;
use crate::lang::LangCode;
use crate::resolve::WordResolver;
use crate::rules::{Rules, CENTRAL_VOWEL, CENTRAL_VOWEL_UPPER};
use crate::segment::{smart_join, Segmenter};
use crate::stats::CentralVowelModel;

/// Writing convention of a piece of text; names the *source* side of a
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orthography {
    /// ASCII-safe digraph convention.
    Cunia,
    /// Diacritic-letter convention (DIARO).
    Diaro,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown orthography {0:?} (expected \"cunia\" or \"diaro\")")]
pub struct UnknownOrthography(String);

impl FromStr for Orthography {
    type Err = UnknownOrthography;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("cunia") {
            Ok(Orthography::Cunia)
        } else if tag.eq_ignore_ascii_case("diaro") {
            Ok(Orthography::Diaro)
        } else {
            Err(UnknownOrthography(s.to_string()))
        }
    }
}

/// Bidirectional converter over immutable resources loaded at startup.
///
/// All methods are pure transforms; the converter is `Send + Sync` and safe
/// to share across threads once constructed.
pub struct OrthographyConverter {
    dict: WordDictionary,
    vowels: CentralVowelModel,
    segmenter: Box<dyn Segmenter>,
}

impl OrthographyConverter {
    pub fn new(
        dict: WordDictionary,
        vowels: CentralVowelModel,
        segmenter: Box<dyn Segmenter>,
    ) -> Self {
        Self {
            dict,
            vowels,
            segmenter,
        }
    }

    /// Convert from the named source orthography into the other one.
    /// Diaro-side input may be arbitrarily messy; it is canonicalized on
    /// the way in.
    pub fn convert(&self, text: &str, source: Orthography) -> String {
        tracing::debug!(?source, len = text.len(), "convert");
        match source {
            Orthography::Cunia => self.to_diaro(text),
            Orthography::Diaro => Rules::global().diaro_to_cunia(text),
        }
    }

    /// Canonicalize into Cunia (rule passes only, no per-word work).
    pub fn to_cunia(&self, text: &str) -> String {
        Rules::global().to_cunia(text)
    }

    /// Full Cunia → DIARO conversion: canonicalize, segment, resolve the
    /// central vowel per word (dictionary first, statistics as fallback),
    /// restore diacritic consonants, and reassemble.
    pub fn to_diaro(&self, text: &str) -> String {
        let rules = Rules::global();
        let resolver = WordResolver::new(rules, &self.dict, &self.vowels);

        let cunia = rules.to_cunia(text);
        let tokens = self.segmenter.segment(&cunia);

        let mut out = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let has_placeholder = token
                .chars()
                .any(|c| c == CENTRAL_VOWEL || c == CENTRAL_VOWEL_UPPER);
            let resolved = if has_placeholder {
                resolver.resolve(token)
            } else {
                token.clone()
            };
            out.push(rules.digraphs_to_diaro(&resolved));
        }
        smart_join(&out)
    }
}

/// Pre-translation cleanup for user-supplied text.
///
/// Collapses whitespace runs, rewrites old-Romanian word-inner î to â, and
/// normalizes the convention per language: comma-below consonants for
/// Romanian, full Cunia canonicalization otherwise. Em-dashes, ellipses and
/// curly quotes are flattened for every language; asterisks, angle
/// brackets, NBSP and BOM characters are dropped.
pub fn clean_text(text: &str, lang: LangCode) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let chars: Vec<char> = collapsed.chars().collect();
    let mut rewritten = String::with_capacity(collapsed.len());
    for (i, &ch) in chars.iter().enumerate() {
        let inner = i > 0
            && chars[i - 1].is_alphanumeric()
            && chars.get(i + 1).is_some_and(|c| c.is_alphanumeric());
        rewritten.push(if ch == 'î' && inner { 'â' } else { ch });
    }

    let text = match lang {
        LangCode::Ron => rewritten
            .replace('ş', "ș")
            .replace('Ş', "Ș")
            .replace('ţ', "ț")
            .replace('Ţ', "Ț"),
        _ => Rules::global().to_cunia(&rewritten),
    };

    text.replace('—', "-")
        .replace('…', "...")
        .replace(['*', '<', '>'], "")
        .replace(['„', '”', '“'], "\"")
        .replace(['\u{a0}', '\u{feff}'], "")
}
