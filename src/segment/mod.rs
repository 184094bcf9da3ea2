//! Word/punctuation segmentation seam and display-text reassembly.
//!
//! The converter only needs an ordered token sequence; the actual
//! segmenter is an injected capability so a language-aware tokenizer can
//! be plugged in. `LatinSegmenter` is the default for Latin-script
//! Aromanian text.

/// Splits text into an ordered sequence of word and punctuation tokens.
/// Tokens keep their original casing and punctuation verbatim;
/// `smart_join` reassembles them into a display-equivalent string.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Default segmenter for Latin-script text: maximal alphanumeric runs
/// (including word-internal apostrophes) are words, every other
/// non-whitespace character is its own punctuation token.
pub struct LatinSegmenter;

impl Segmenter for LatinSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut word = String::new();

        for (i, &ch) in chars.iter().enumerate() {
            let in_word_apostrophe = matches!(ch, '\'' | '’')
                && !word.is_empty()
                && chars.get(i + 1).is_some_and(|c| c.is_alphanumeric());
            if ch.is_alphanumeric() || in_word_apostrophe {
                word.push(ch);
            } else {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
                if !ch.is_whitespace() {
                    tokens.push(ch.to_string());
                }
            }
        }
        if !word.is_empty() {
            tokens.push(word);
        }
        tokens
    }
}

/// Join tokens with spaces, attaching punctuation naturally: a token whose
/// first character is punctuation other than `(` glues to the previous
/// unit, and any token glues to a previous unit ending in `(` or `-`.
/// Everything else starts a new space-separated unit. Hyphens glue on both
/// sides, so `["word", "-", "continued"]` reassembles to `word-continued`.
pub fn smart_join<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut units: Vec<String> = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        let Some(first) = token.chars().next() else {
            continue;
        };
        match units.last_mut() {
            Some(last)
                if (first.is_ascii_punctuation() && first != '(')
                    || last.ends_with('(')
                    || last.ends_with('-') =>
            {
                last.push_str(token);
            }
            _ => units.push(token.to_string()),
        }
    }
    units.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_words_and_punctuation() {
        let tokens = LatinSegmenter.segment("Ghini vinjish, frate!");
        assert_eq!(tokens, vec!["Ghini", "vinjish", ",", "frate", "!"]);
    }

    #[test]
    fn test_segment_parentheses_and_hyphen() {
        let tokens = LatinSegmenter.segment("un (dauã) trei-patru");
        assert_eq!(tokens, vec!["un", "(", "dauã", ")", "trei", "-", "patru"]);
    }

    #[test]
    fn test_segment_keeps_word_internal_apostrophe() {
        let tokens = LatinSegmenter.segment("s'dusi acasã");
        assert_eq!(tokens, vec!["s'dusi", "acasã"]);
    }

    #[test]
    fn test_segment_trailing_apostrophe_splits() {
        let tokens = LatinSegmenter.segment("zbor' ");
        assert_eq!(tokens, vec!["zbor", "'"]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(LatinSegmenter.segment("").is_empty());
        assert!(LatinSegmenter.segment("   ").is_empty());
    }

    #[test]
    fn test_join_attaches_closing_punctuation() {
        let joined = smart_join(&["Hello", ",", "world", "(", "test", ")"]);
        assert_eq!(joined, "Hello, world (test)");
    }

    #[test]
    fn test_join_hyphen_continuation() {
        assert_eq!(smart_join(&["word", "-", "continued"]), "word-continued");
    }

    #[test]
    fn test_join_open_paren_attaches_next_token() {
        assert_eq!(smart_join(&["(", "aoa", ")"]), "(aoa)");
    }

    #[test]
    fn test_join_plain_words() {
        assert_eq!(smart_join(&["unã", "dzuã"]), "unã dzuã");
    }

    #[test]
    fn test_join_single_and_empty() {
        assert_eq!(smart_join(&["zbor"]), "zbor");
        assert_eq!(smart_join::<&str>(&[]), "");
    }

    #[test]
    fn test_join_hyphen_glues_both_sides() {
        assert_eq!(smart_join(&["trei", "-", "patru"]), "trei-patru");
    }

    #[test]
    fn test_segment_then_join_round_trip() {
        let text = "Ghini vinjish, frate (sh-tini)!";
        let tokens = LatinSegmenter.segment(text);
        assert_eq!(smart_join(&tokens), text);
    }
}
