//! Frequency ranking over an annotated corpus.
//!
//! Aggregates lemma occurrence counts across all sentences and produces a
//! ranked list ordered by descending count. Tied counts keep the order the
//! lemmas were first encountered — the sort must be stable, so entries are
//! accumulated in first-encounter order and sorted with [`slice::sort_by`],
//! which Rust guarantees is stable.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::corpus::Sentence;

/// One ranked entry: a lemma and its total occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyEntry {
    /// The lemma string.
    pub lemma: String,
    /// Total occurrences across the corpus (repeats within a sentence each count).
    pub count: u64,
}

/// A ranked list of (lemma, count) pairs, unique lemmas, descending count.
///
/// Built once from the full corpus and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyList {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyList {
    /// Rank lemma frequencies across the given sentences.
    ///
    /// Every occurrence counts: a sentence with the same lemma three times
    /// contributes three to that lemma's total. Empty input yields an empty
    /// list.
    #[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
    pub fn rank(sentences: &[Sentence]) -> Self {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for sentence in sentences {
            for lemma in sentence.lemmas() {
                let slot = counts.entry(lemma.as_str()).or_insert(0);
                if *slot == 0 {
                    first_seen.push(lemma.as_str());
                }
                *slot += 1;
            }
        }

        // First-encounter order in, stable sort by count out: ties keep
        // their encounter order.
        let mut entries: Vec<FrequencyEntry> = first_seen
            .into_iter()
            .map(|lemma| FrequencyEntry {
                lemma: lemma.to_string(),
                count: counts[lemma],
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        tracing::debug!(vocabulary = entries.len(), "frequency list ranked");
        Self { entries }
    }

    /// The ranked entries, highest count first.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Vocabulary size (number of distinct lemmas).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts in the list.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn corpus(streams: &[&[&str]]) -> Corpus {
        Corpus::from_token_streams(
            streams
                .iter()
                .map(|s| s.iter().map(ToString::to_string).collect()),
        )
    }

    fn pairs(list: &FrequencyList) -> Vec<(&str, u64)> {
        list.entries()
            .iter()
            .map(|e| (e.lemma.as_str(), e.count))
            .collect()
    }

    #[test]
    fn counts_descend_with_first_encounter_ties() {
        let corpus = corpus(&[&["a", "b"], &["a", "c"]]);
        let list = FrequencyList::rank(corpus.sentences());
        // b before c: equal counts, b seen first
        assert_eq!(pairs(&list), vec![("a", 2), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn tie_order_follows_encounter_not_lexicographic() {
        let corpus = corpus(&[&["zeta", "alpha"]]);
        let list = FrequencyList::rank(corpus.sentences());
        assert_eq!(pairs(&list), vec![("zeta", 1), ("alpha", 1)]);
    }

    #[test]
    fn repeats_within_a_sentence_each_count() {
        let corpus = corpus(&[&["x", "x", "x"], &["y"]]);
        let list = FrequencyList::rank(corpus.sentences());
        assert_eq!(pairs(&list), vec![("x", 3), ("y", 1)]);
        assert_eq!(list.total(), 4);
    }

    #[test]
    fn empty_corpus_yields_empty_list() {
        let list = FrequencyList::rank(&[]);
        assert!(list.is_empty());
        assert_eq!(list.total(), 0);
    }

    #[test]
    fn many_ties_keep_full_encounter_order() {
        let corpus = corpus(&[&["d", "c", "b", "a"]]);
        let list = FrequencyList::rank(corpus.sentences());
        assert_eq!(pairs(&list), vec![("d", 1), ("c", 1), ("b", 1), ("a", 1)]);
    }
}
