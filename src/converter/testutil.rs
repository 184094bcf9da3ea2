use crate::dict::WordDictionary;
use crate::segment::LatinSegmenter;
use crate::stats::{CentralVowelModel, FrequencyTable};

use super::OrthographyConverter;

/// Small dictionary covering the fixture words.
pub(crate) fn fixture_dict() -> WordDictionary {
    WordDictionary::from_pairs([
        ("shi".to_string(), "shi".to_string()),
        ("cãntã".to_string(), "cântă".to_string()),
    ])
}

/// Frequency model with a few decided contexts and everything else unseen.
///
/// `" cni"` and `" cnt"`/`"nt  "` are the masks seen in "cãni" and "cãntã";
/// the â table dominates them so the statistical path visibly disagrees
/// with the dictionary entry for "cãntã".
pub(crate) fn fixture_vowels() -> CentralVowelModel {
    CentralVowelModel::new(
        FrequencyTable::from_json_str(r#"{" cni": 9, " cnt": 9, "nt  ": 9}"#).unwrap(),
        FrequencyTable::from_json_str(r#"{" cni": 2}"#).unwrap(),
    )
}

pub(crate) fn fixture_converter() -> OrthographyConverter {
    OrthographyConverter::new(fixture_dict(), fixture_vowels(), Box::new(LatinSegmenter))
}

pub(crate) fn empty_converter() -> OrthographyConverter {
    OrthographyConverter::new(
        WordDictionary::from_pairs([]),
        CentralVowelModel::empty(),
        Box::new(LatinSegmenter),
    )
}
