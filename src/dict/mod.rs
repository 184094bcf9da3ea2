//! Word dictionary storage: canonical Cunia word → preferred DIARO spelling.
//!
//! `WordDictionary` is built from TSV word lists and shipped as a compact
//! binary file (AODX) that is mmap-loaded at startup and immutable after.


use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;

use memmap2::Mmap;

const MAGIC: &[u8; 4] = b"AODX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 4 + 1; // magic + version

/// Unified error type for dictionary binary I/O and text import.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected AODX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Immutable mapping from a canonical (Cunia-normalized, lowercase) word to
/// its preferred DIARO spelling. A missing key is a normal outcome, not an
/// error; callers fall back to statistical resolution.
#[derive(Debug)]
pub struct WordDictionary {
    entries: HashMap<String, String>,
}

impl WordDictionary {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Import a TSV word list: one `cunia<TAB>diaro` pair per line.
    ///
    /// Blank lines and `#` comments are skipped; on duplicate keys the last
    /// line wins.
    pub fn from_tsv_reader(reader: impl BufRead) -> Result<Self, DictError> {
        let mut entries = HashMap::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (cunia, diaro) = line.split_once('\t').ok_or_else(|| {
                DictError::Parse(format!(
                    "line {}: expected <cunia>\\t<diaro>, got {line:?}",
                    lineno + 1
                ))
            })?;
            entries.insert(cunia.trim().to_string(), diaro.trim().to_string());
        }
        tracing::debug!(entries = entries.len(), "imported dictionary from TSV");
        Ok(Self { entries })
    }

    pub fn get(&self, cunia_word: &str) -> Option<&str> {
        self.entries.get(cunia_word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let payload = bincode::serialize(&self.entries).map_err(DictError::Serialize)?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }

        let entries: HashMap<String, String> =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        Ok(Self { entries })
    }

    /// Open a dictionary file, using mmap to avoid doubling peak memory.
    ///
    /// The entries are deserialized from the mapped region, then the mapping
    /// is dropped.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        let dict = Self::from_bytes(&mmap)?;
        tracing::debug!(path = %path.display(), entries = dict.len(), "opened dictionary");
        Ok(dict)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}
