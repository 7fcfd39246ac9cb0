//! Report structs for the coverage sweep.
//!
//! The sweep hands off two aligned sequences over the k domain — 1T counts
//! and cumulative coverage percentages — to an external reporting or
//! visualization consumer. All structs derive `Serialize` and `JsonSchema`
//! for CLI JSON output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageCurve;

/// Summary and aligned curve data for one sweep.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CoverageReport {
    /// Number of distinct lemmas in the frequency list.
    pub vocabulary_size: usize,
    /// Number of non-empty sentences in the corpus.
    pub sentence_count: usize,
    /// Total lemma occurrences across the corpus.
    pub total_occurrences: u64,
    /// Highest 1T count observed on the curve.
    pub peak_one_t: usize,
    /// Vocabulary threshold at which the peak occurs (smallest on ties).
    pub peak_known: usize,
    /// 1T sentence counts, indexed by k from 0.
    pub one_t_counts: Vec<usize>,
    /// Cumulative coverage percentages, indexed by k from 0.
    pub cumulative_shares: Vec<f64>,
}

impl CoverageReport {
    /// Assemble the hand-off report from a computed curve.
    pub fn from_curve(
        curve: &CoverageCurve,
        sentence_count: usize,
        total_occurrences: u64,
    ) -> Self {
        let peak = curve.peak();
        Self {
            vocabulary_size: curve.points().len().saturating_sub(1),
            sentence_count,
            total_occurrences,
            peak_one_t: peak.one_t_sentences,
            peak_known: peak.known,
            one_t_counts: curve.points().iter().map(|p| p.one_t_sentences).collect(),
            cumulative_shares: curve.points().iter().map(|p| p.cumulative_share).collect(),
        }
    }

    /// Render the dense curve as CSV for an external plotting consumer.
    ///
    /// Columns: `known,one_t_sentences,cumulative_share`.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("known,one_t_sentences,cumulative_share\n");
        for (k, (count, share)) in self
            .one_t_counts
            .iter()
            .zip(&self.cumulative_shares)
            .enumerate()
        {
            out.push_str(&format!("{k},{count},{share:.4}\n"));
        }
        out
    }
}
