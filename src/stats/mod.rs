//! Context-frequency tables for statistical central-vowel resolution.
//!
//! Two tables are shipped as flat JSON objects (`{"mask": count}`), one
//! counting contexts where the vowel was written â, one where it was ă.
//! Both are loaded once at startup and immutable after.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Required length of a context-mask key, in characters.
pub const MASK_LEN: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("context mask key must be exactly {MASK_LEN} chars, got {0:?}")]
    BadMaskKey(String),
}

/// Mapping from a 4-character context mask to an occurrence count.
/// Absent masks count as zero.
#[derive(Debug)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn empty() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    pub fn from_json_str(json_str: &str) -> Result<Self, StatsError> {
        let counts: HashMap<String, u64> = serde_json::from_str(json_str)?;
        for key in counts.keys() {
            if key.chars().count() != MASK_LEN {
                return Err(StatsError::BadMaskKey(key.clone()));
            }
        }
        Ok(Self { counts })
    }

    pub fn open(path: &Path) -> Result<Self, StatsError> {
        let table = Self::from_json_str(&fs::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), masks = table.len(), "loaded frequency table");
        Ok(table)
    }

    pub fn count(&self, mask: &str) -> u64 {
        self.counts.get(mask).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// The pair of frequency tables plus the fixed tie-break rule.
pub struct CentralVowelModel {
    a_circumflex: FrequencyTable,
    a_breve: FrequencyTable,
}

impl CentralVowelModel {
    pub fn new(a_circumflex: FrequencyTable, a_breve: FrequencyTable) -> Self {
        Self {
            a_circumflex,
            a_breve,
        }
    }

    /// Model with no counts; every mask resolves to ă.
    pub fn empty() -> Self {
        Self::new(FrequencyTable::empty(), FrequencyTable::empty())
    }

    pub fn open(circumflex_path: &Path, breve_path: &Path) -> Result<Self, StatsError> {
        Ok(Self::new(
            FrequencyTable::open(circumflex_path)?,
            FrequencyTable::open(breve_path)?,
        ))
    }

    /// Pick the vowel letter for a context mask: â iff its count is strictly
    /// greater, otherwise ă. Ties and unseen masks deliberately fall to ă;
    /// this matches the shipped tables and must not be re-smoothed.
    pub fn choose(&self, mask: &str) -> char {
        if self.a_circumflex.count(mask) > self.a_breve.count(mask) {
            'â'
        } else {
            'ă'
        }
    }
}
