use super::testutil::{empty_converter, fixture_converter};
use super::*;

#[test]
fn test_orthography_from_str() {
    assert_eq!("cunia".parse::<Orthography>().unwrap(), Orthography::Cunia);
    assert_eq!("CUNIA".parse::<Orthography>().unwrap(), Orthography::Cunia);
    assert_eq!(" diaro ".parse::<Orthography>().unwrap(), Orthography::Diaro);
    assert!("klingon".parse::<Orthography>().is_err());
    assert!("".parse::<Orthography>().is_err());
}

#[test]
fn test_to_cunia_is_idempotent() {
    let conv = empty_converter();
    for text in ["Ți faț, frate!", "ńicã ḑuã", "Hîrios ș-cu harauã"] {
        let once = conv.to_cunia(text);
        assert_eq!(conv.to_cunia(&once), once, "input {text:?}");
    }
}

#[test]
fn test_to_diaro_dictionary_fixture() {
    // "shi" carries no central vowel; only the consonant digraph is restored
    let conv = fixture_converter();
    assert_eq!(conv.to_diaro("shi"), "și");
}

#[test]
fn test_to_diaro_statistical_path() {
    let conv = fixture_converter();
    // "cãni" is not in the dictionary; the â table dominates its context
    assert_eq!(conv.to_diaro("cãni"), "câni");
}

#[test]
fn test_to_diaro_dictionary_precedence() {
    let conv = fixture_converter();
    // the frequency fixture would resolve the final vowel to â; the
    // dictionary entry ("cântă") must win untouched
    assert_eq!(conv.to_diaro("cãntã"), "cântă");
}

#[test]
fn test_to_diaro_word_initial_vowel() {
    let conv = empty_converter();
    assert_eq!(conv.to_diaro("ãnj"), "îń");
    assert_eq!(conv.to_diaro("Ãnj"), "Îń");
}

#[test]
fn test_to_diaro_all_caps_word_is_resolved() {
    let conv = empty_converter();
    assert_eq!(conv.to_diaro("ÃNJ"), "ÎŃ");
}

#[test]
fn test_to_diaro_sentence_with_punctuation() {
    let conv = empty_converter();
    assert_eq!(
        conv.to_diaro("Tsi fats, frate (ghini)?"),
        "Ți faț, frate (ghini)?"
    );
}

#[test]
fn test_to_diaro_accepts_messy_diacritic_input() {
    let conv = empty_converter();
    assert_eq!(conv.to_diaro("Hîrios ş-cu harauã"), "Hărios ș-cu harauă");
}

#[test]
fn test_round_trip_without_placeholder() {
    // dictionary-absent words with no central vowel may only change in
    // consonant normalization, never in word choice
    let conv = empty_converter();
    for (word, expected) in [("șoput", "șoput"), ("gione", "gione"), ("njel", "ńel")] {
        let cunia = conv.to_cunia(word);
        assert_eq!(conv.to_diaro(&cunia), expected, "word {word:?}");
    }
}

#[test]
fn test_convert_direction_dispatch() {
    let conv = empty_converter();
    assert_eq!(conv.convert("tsãne", Orthography::Cunia), "țăne");
    assert_eq!(conv.convert("Ţîne", Orthography::Diaro), "Tsãne");
}

#[test]
fn test_clean_text_collapses_whitespace() {
    assert_eq!(clean_text("unã  \n dzuã\t mushatã", LangCode::Rup), "unã dzuã mushatã");
}

#[test]
fn test_clean_text_old_romanian_inner_i() {
    assert_eq!(clean_text("cuvînt", LangCode::Ron), "cuvânt");
    // word-initial î is left alone
    assert_eq!(clean_text("în cuvînt", LangCode::Ron), "în cuvânt");
}

#[test]
fn test_clean_text_romanian_comma_below() {
    assert_eq!(clean_text("ştiinţă", LangCode::Ron), "știință");
}

#[test]
fn test_clean_text_aromanian_goes_to_cunia() {
    assert_eq!(clean_text("Tîrnova ş-Gramoste", LangCode::Rup), "Tãrnova sh-Gramoste");
}

#[test]
fn test_clean_text_shared_replacements() {
    assert_eq!(
        clean_text("el dzãse — „da”…", LangCode::Rup),
        "el dzãse - \"da\"..."
    );
    assert_eq!(clean_text("a *b* <c>\u{a0}", LangCode::Eng), "a b c");
}
