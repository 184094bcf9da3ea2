//! Bidirectional converter between the two Aromanian writing conventions:
//! ASCII-safe Cunia (consonant digraphs, one placeholder letter ã for the
//! ambiguous central vowel) and the diacritic-based DIARO form (ș, ț, ľ,
//! ń, d̦ and the two distinct vowels â/ă).
//!
//! The Cunia direction is a pure rule-table pass; the DIARO direction
//! additionally resolves each ã per word, first against a dictionary of
//! known spellings, then against context-frequency tables.

pub mod converter;
pub mod dict;
pub mod lang;
pub mod resolve;
pub mod rules;
pub mod segment;
pub mod stats;
pub mod trace_init;
