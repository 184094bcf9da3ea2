//! Ordered character substitution rule sets for the two Aromanian
//! orthographies.
//!
//! Rule tables live in embedded TOML (see `default_rules.toml`) and are
//! parsed once into a `OnceLock` global. Three forward sets collapse messy
//! input into ASCII-safe Cunia (consonant digraphs, central-vowel
//! placeholder, foreign-glyph approximations); the `digraphs` set restores
//! DIARO diacritic consonants.

mod config;

use std::sync::OnceLock;

pub use config::RulesConfigError;

pub const DEFAULT_RULES_TOML: &str = include_str!("default_rules.toml");

/// The ASCII-safe placeholder for the ambiguous central vowel.
pub const CENTRAL_VOWEL: char = 'ã';
/// Uppercase form of the placeholder.
pub const CENTRAL_VOWEL_UPPER: char = 'Ã';

/// One ordered list of literal `(pattern, replacement)` substitutions.
pub struct RuleSet {
    rules: Vec<(String, String)>,
}

impl RuleSet {
    fn new(rules: Vec<(String, String)>) -> Self {
        Self { rules }
    }

    /// Apply the rule set in a single deterministic left-to-right pass.
    ///
    /// At each position the first rule (in declaration order) whose pattern
    /// matches wins and the scan resumes after the consumed pattern;
    /// otherwise one character is copied through. Total over any input.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        'scan: while let Some(ch) = rest.chars().next() {
            for (from, to) in &self.rules {
                if let Some(tail) = rest.strip_prefix(from.as_str()) {
                    out.push_str(to);
                    rest = tail;
                    continue 'scan;
                }
            }
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
        out
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The four rule sets plus the composed orthography passes.
pub struct Rules {
    consonants: RuleSet,
    central_vowel: RuleSet,
    foreign: RuleSet,
    digraphs: RuleSet,
}

impl Rules {
    /// Get or initialize the global tables from the embedded TOML.
    pub fn global() -> &'static Rules {
        static INSTANCE: OnceLock<Rules> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Rules::from_toml(DEFAULT_RULES_TOML).expect("embedded rule tables must be valid")
        })
    }

    /// Build rule tables from custom TOML (validated eagerly).
    pub fn from_toml(toml_str: &str) -> Result<Self, RulesConfigError> {
        let parsed = config::parse_rules_toml(toml_str)?;
        Ok(Self {
            consonants: RuleSet::new(parsed.consonants),
            central_vowel: RuleSet::new(parsed.central_vowel),
            foreign: RuleSet::new(parsed.foreign),
            digraphs: RuleSet::new(parsed.digraphs),
        })
    }

    /// Canonicalize any input into Cunia: consonant digraphs, then the
    /// central-vowel placeholder, then foreign-glyph approximations.
    ///
    /// The set order matters: the vowel and foreign sets assume consonant
    /// variants are already collapsed. Idempotent.
    pub fn to_cunia(&self, text: &str) -> String {
        let text = self.consonants.apply(text);
        let text = self.central_vowel.apply(&text);
        self.foreign.apply(&text)
    }

    /// Restore DIARO diacritic consonants from their Cunia digraphs.
    ///
    /// Inverse of the consonant set only; not an inverse of [`to_cunia`].
    ///
    /// [`to_cunia`]: Rules::to_cunia
    pub fn digraphs_to_diaro(&self, text: &str) -> String {
        self.digraphs.apply(text)
    }

    /// Canonicalize mixed-convention input to the DIARO consonant base:
    /// consonant and foreign variants collapse, digraphs become diacritic
    /// letters, and the central vowel is left untouched for later
    /// resolution.
    pub fn normalize_diaro(&self, text: &str) -> String {
        let text = self.consonants.apply(text);
        let text = self.foreign.apply(&text);
        self.digraphs.apply(&text)
    }

    /// Round-trip arbitrary messy DIARO input into clean Cunia.
    pub fn diaro_to_cunia(&self, text: &str) -> String {
        self.to_cunia(&self.normalize_diaro(text))
    }
}
