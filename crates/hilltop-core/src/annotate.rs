//! Annotation boundary between raw text and the coverage core.
//!
//! The real linguistic pipeline (sentence segmentation, lemmatization,
//! part-of-speech filtering) is an external concern. The core only needs
//! "given raw text, produce sentences of filtered lemma strings", expressed
//! here as the [`Annotator`] trait so the sweep can be exercised with
//! synthetic token streams in tests.
//!
//! [`BasicAnnotator`] is the built-in rule-based implementation: no
//! morphological normalization, just case folding, punctuation stripping,
//! and a positional heuristic standing in for proper-noun filtering.

use crate::corpus::Sentence;
use crate::text;

/// Turns raw text into sentences of filtered lemma strings.
///
/// Implementations must exclude punctuation, whitespace-only, and
/// proper-noun tokens, and must not emit empty sentences.
pub trait Annotator {
    /// Annotate one cleaned text into filtered sentences.
    fn annotate(&self, text: &str) -> Vec<Sentence>;
}

/// Rule-based annotator with no external language model.
///
/// Lemmas are lowercased surface forms. Tokens without any alphabetic
/// character are dropped (the punctuation/whitespace analog), as are
/// capitalized tokens past the first word of a sentence (the proper-noun
/// analog). Sentence-initial capitals are ordinary words and are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAnnotator;

impl Annotator for BasicAnnotator {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn annotate(&self, text: &str) -> Vec<Sentence> {
        text::split_sentences(text)
            .iter()
            .filter_map(|s| Sentence::new(extract_lemmas(s)))
            .collect()
    }
}

/// Extract lowercased lemma tokens from one sentence.
fn extract_lemmas(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .enumerate()
        .filter(|(i, w)| !w.is_empty() && w.chars().any(char::is_alphabetic) && !is_proper(*i, w))
        .map(|(_, w)| w.to_lowercase())
        .collect()
}

/// Mid-sentence capitalized token, treated as a proper noun.
fn is_proper(index: usize, word: &str) -> bool {
    index > 0 && word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmas(sentences: &[Sentence]) -> Vec<Vec<&str>> {
        sentences
            .iter()
            .map(|s| s.lemmas().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        let sentences = BasicAnnotator.annotate("The cat sat, happily, on the mat.");
        assert_eq!(
            lemmas(&sentences),
            vec![vec!["the", "cat", "sat", "happily", "on", "the", "mat"]]
        );
    }

    #[test]
    fn drops_mid_sentence_capitals() {
        let sentences = BasicAnnotator.annotate("Yesterday we visited Paris together.");
        assert_eq!(
            lemmas(&sentences),
            vec![vec!["yesterday", "we", "visited", "together"]]
        );
    }

    #[test]
    fn keeps_sentence_initial_capital() {
        let sentences = BasicAnnotator.annotate("Dogs bark loudly.");
        assert_eq!(lemmas(&sentences), vec![vec!["dogs", "bark", "loudly"]]);
    }

    #[test]
    fn drops_non_alphabetic_tokens() {
        let sentences = BasicAnnotator.annotate("There are 42 reasons - maybe more.");
        assert_eq!(
            lemmas(&sentences),
            vec![vec!["there", "are", "reasons", "maybe", "more"]]
        );
    }

    #[test]
    fn empty_text_yields_no_sentences() {
        assert!(BasicAnnotator.annotate("").is_empty());
        assert!(BasicAnnotator.annotate("1234 ... !!").is_empty());
    }

    #[test]
    fn splits_multiple_sentences() {
        let sentences = BasicAnnotator.annotate("One ran fast. Two ran faster.");
        assert_eq!(sentences.len(), 2);
    }
}
