//! Coverage sweep: 1T-sentence counts as a function of vocabulary size.
//!
//! For each threshold k in [0, vocabulary size], the first k entries of the
//! frequency list form the known set; a sentence is "1T" when exactly one of
//! its distinct lemma types falls outside that set. The sweep also reports
//! the cumulative share of total word occurrences covered by the top-k
//! lemmas.
//!
//! The literal formulation rebuilds the known set and rescans every sentence
//! at every k, an O(K×N) pass. This implementation grows the known set one
//! lemma per step instead, keeping a per-sentence count of not-yet-known
//! types and a running tally of sentences sitting at exactly one unknown.
//! The produced values are identical (see the equivalence test below).

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::corpus::Sentence;
use crate::frequency::FrequencyList;

/// One point on the coverage curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoveragePoint {
    /// Vocabulary threshold k: the top-k lemmas are considered known.
    pub known: usize,
    /// Number of sentences with exactly one unknown lemma type.
    pub one_t_sentences: usize,
    /// Percentage of total word occurrences covered by the top-k lemmas,
    /// in [0, 100]. Zero for an empty corpus.
    pub cumulative_share: f64,
}

/// Dense mapping from k in [0, vocabulary size] to 1T count and coverage.
///
/// Always holds at least the k=0 point; computed once per run and handed to
/// a reporting or visualization consumer, never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoverageCurve {
    points: Vec<CoveragePoint>,
}

impl CoverageCurve {
    /// The curve points in ascending k order, k dense from 0.
    pub fn points(&self) -> &[CoveragePoint] {
        &self.points
    }

    /// The point with the highest 1T count (smallest k on ties).
    pub fn peak(&self) -> CoveragePoint {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| {
                a.one_t_sentences
                    .cmp(&b.one_t_sentences)
                    .then(b.known.cmp(&a.known))
            })
            .unwrap_or(CoveragePoint {
                known: 0,
                one_t_sentences: 0,
                cumulative_share: 0.0,
            })
    }
}

/// Sweep vocabulary thresholds over the corpus.
///
/// Every lemma in the sentences must appear in `freq` (guaranteed when the
/// list was ranked from the same corpus); at k = vocabulary size no unknowns
/// remain and the 1T count is zero. Degenerate inputs are well-defined: an
/// empty corpus yields the single point (0, 0, 0.0).
#[tracing::instrument(skip_all, fields(vocabulary = freq.len(), sentences = sentences.len()))]
pub fn sweep(freq: &FrequencyList, sentences: &[Sentence]) -> CoverageCurve {
    let total = freq.total();

    // Index: lemma -> sentences containing it as a type, alongside each
    // sentence's remaining unknown-type count.
    let mut containing: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut unknowns: Vec<usize> = Vec::with_capacity(sentences.len());
    for (idx, sentence) in sentences.iter().enumerate() {
        let types = sentence.types();
        unknowns.push(types.len());
        for lemma in types {
            containing.entry(lemma).or_default().push(idx);
        }
    }

    // Sentences currently at exactly one unknown type. Non-empty sentences
    // start with at least one unknown, so k=0 counts the single-type ones.
    let mut one_t = unknowns.iter().filter(|&&u| u == 1).count();

    let mut points = Vec::with_capacity(freq.len() + 1);
    points.push(CoveragePoint {
        known: 0,
        one_t_sentences: one_t,
        cumulative_share: 0.0,
    });

    let mut covered: u64 = 0;
    for (i, entry) in freq.entries().iter().enumerate() {
        covered += entry.count;

        // Learning this lemma removes one unknown from every sentence that
        // contains it; track the 2->1 and 1->0 transitions.
        if let Some(indices) = containing.get(entry.lemma.as_str()) {
            for &idx in indices {
                match unknowns[idx] {
                    2 => one_t += 1,
                    1 => one_t -= 1,
                    _ => {}
                }
                unknowns[idx] -= 1;
            }
        }

        let share = if total == 0 {
            0.0
        } else {
            100.0 * covered as f64 / total as f64
        };
        points.push(CoveragePoint {
            known: i + 1,
            one_t_sentences: one_t,
            cumulative_share: share,
        });
    }

    CoverageCurve { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use std::collections::HashSet;

    fn corpus(streams: &[&[&str]]) -> Corpus {
        Corpus::from_token_streams(
            streams
                .iter()
                .map(|s| s.iter().map(ToString::to_string).collect()),
        )
    }

    /// Literal O(K×N) formulation: rebuild the known set at every k.
    fn sweep_literal(freq: &FrequencyList, sentences: &[Sentence]) -> Vec<usize> {
        (0..=freq.len())
            .map(|k| {
                let known: HashSet<&str> = freq.entries()[..k]
                    .iter()
                    .map(|e| e.lemma.as_str())
                    .collect();
                sentences
                    .iter()
                    .filter(|s| s.types().difference(&known).count() == 1)
                    .count()
            })
            .collect()
    }

    fn one_t_counts(curve: &CoverageCurve) -> Vec<usize> {
        curve.points().iter().map(|p| p.one_t_sentences).collect()
    }

    #[test]
    fn two_sentence_scenario() {
        let corpus = corpus(&[&["a", "b"], &["a", "c"]]);
        let freq = FrequencyList::rank(corpus.sentences());
        let curve = sweep(&freq, corpus.sentences());

        // k=0: both sentences have two unknowns. k=1 (a known): both 1T.
        // k=2 (a,b known): only ["a","c"] is 1T. k=3: none.
        assert_eq!(one_t_counts(&curve), vec![0, 2, 1, 0]);
        assert_eq!(curve.points()[0].cumulative_share, 0.0);
        assert_eq!(curve.points()[1].cumulative_share, 50.0);
        assert_eq!(curve.points()[3].cumulative_share, 100.0);
    }

    #[test]
    fn empty_corpus_yields_single_zero_point() {
        let freq = FrequencyList::rank(&[]);
        let curve = sweep(&freq, &[]);
        assert_eq!(
            curve.points(),
            &[CoveragePoint {
                known: 0,
                one_t_sentences: 0,
                cumulative_share: 0.0,
            }]
        );
    }

    #[test]
    fn repeated_lemmas_count_as_one_type() {
        let corpus = corpus(&[&["x", "x", "x"]]);
        let freq = FrequencyList::rank(corpus.sentences());
        // Single distinct type: 1T at k=0, resolved at k=1.
        let curve = sweep(&freq, corpus.sentences());
        assert_eq!(one_t_counts(&curve), vec![1, 0]);
        assert_eq!(freq.total(), 3);
    }

    #[test]
    fn share_is_monotonic_and_ends_at_100() {
        let corpus = corpus(&[
            &["the", "cat", "sat"],
            &["the", "dog", "ran"],
            &["the", "cat", "ran", "home"],
        ]);
        let freq = FrequencyList::rank(corpus.sentences());
        let curve = sweep(&freq, corpus.sentences());

        let shares: Vec<f64> = curve.points().iter().map(|p| p.cumulative_share).collect();
        for pair in shares.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(*shares.last().unwrap(), 100.0);
    }

    #[test]
    fn final_point_has_no_one_t_sentences() {
        let corpus = corpus(&[&["a", "b", "c"], &["b", "c"], &["c"]]);
        let freq = FrequencyList::rank(corpus.sentences());
        let curve = sweep(&freq, corpus.sentences());
        assert_eq!(curve.points().last().unwrap().one_t_sentences, 0);
    }

    #[test]
    fn incremental_matches_literal_recomputation() {
        let corpus = corpus(&[
            &["one", "ring", "to", "rule", "them", "all"],
            &["one", "ring", "to", "find", "them"],
            &["one", "ring", "to", "bring", "them", "all"],
            &["and", "in", "the", "darkness", "bind", "them"],
            &["ring", "ring"],
            &["them"],
        ]);
        let freq = FrequencyList::rank(corpus.sentences());
        let curve = sweep(&freq, corpus.sentences());
        assert_eq!(one_t_counts(&curve), sweep_literal(&freq, corpus.sentences()));
    }

    #[test]
    fn curve_is_dense_over_k() {
        let corpus = corpus(&[&["a", "b"], &["c"]]);
        let freq = FrequencyList::rank(corpus.sentences());
        let curve = sweep(&freq, corpus.sentences());
        let ks: Vec<usize> = curve.points().iter().map(|p| p.known).collect();
        assert_eq!(ks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn peak_reports_highest_count_at_smallest_k() {
        let corpus = corpus(&[&["a", "b"], &["a", "c"]]);
        let freq = FrequencyList::rank(corpus.sentences());
        let curve = sweep(&freq, corpus.sentences());
        let peak = curve.peak();
        assert_eq!(peak.known, 1);
        assert_eq!(peak.one_t_sentences, 2);
    }
}
