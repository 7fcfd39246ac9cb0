//! Sweep command — the full coverage pipeline over a corpus directory.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use hilltop_core::annotate::BasicAnnotator;
use hilltop_core::config::Config;
use hilltop_core::coverage::sweep;
use hilltop_core::frequency::FrequencyList;
use hilltop_core::report::CoverageReport;

use super::{load_corpus, resolve_corpus_root};

/// Coverage milestones reported in text output.
const MILESTONES: &[f64] = &[50.0, 80.0, 90.0, 95.0, 98.0, 100.0];

/// Arguments for the `sweep` subcommand.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Corpus directory (falls back to corpus_dir from config).
    pub dir: Option<Utf8PathBuf>,

    /// Write the dense curve as CSV to this file.
    #[arg(long, value_name = "FILE")]
    pub csv: Option<Utf8PathBuf>,

    /// Report only the top-N vocabulary thresholds.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Run the full pipeline: discover, annotate, rank, sweep, report.
#[instrument(name = "cmd_sweep", skip_all, fields(dir = ?args.dir))]
pub fn cmd_sweep(
    args: SweepArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(dir = ?args.dir, csv = ?args.csv, limit = ?args.limit, "executing sweep command");

    let root = resolve_corpus_root(args.dir, config)?;
    let show_progress = !global_json && !quiet;
    let corpus = load_corpus(&root, config, &BasicAnnotator, show_progress)?;

    let freq = FrequencyList::rank(corpus.sentences());
    let curve = sweep(&freq, corpus.sentences());
    let mut report = CoverageReport::from_curve(&curve, corpus.len(), freq.total());

    if let Some(limit) = args.limit {
        truncate_report(&mut report, limit);
    }

    if let Some(ref csv_path) = args.csv {
        std::fs::write(csv_path.as_std_path(), report.to_csv())
            .with_context(|| format!("failed to write {csv_path}"))?;
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} sentences, {} distinct lemmas, {} occurrences",
        "Corpus:".bold(),
        report.sentence_count,
        report.vocabulary_size,
        report.total_occurrences,
    );
    println!(
        "{} {} 1T sentences at {} known lemmas",
        "Peak:".bold(),
        report.peak_one_t.to_string().green(),
        report.peak_known,
    );

    if report.total_occurrences > 0 {
        println!();
        println!("{}", "Coverage milestones".bold().underline());
        for &target in MILESTONES {
            if let Some(k) = first_k_reaching(&report, target) {
                println!(
                    "{:>5.0}% coverage at {:>6} lemmas ({} 1T sentences)",
                    target,
                    k,
                    report.one_t_counts[k],
                );
            }
        }
    }

    if let Some(ref csv_path) = args.csv {
        println!();
        println!("{} curve written to {}", "CSV:".dimmed(), csv_path.cyan());
    }

    Ok(())
}

/// Smallest k whose cumulative share reaches `target` percent.
fn first_k_reaching(report: &CoverageReport, target: f64) -> Option<usize> {
    report
        .cumulative_shares
        .iter()
        .position(|&share| share >= target)
}

/// Keep only the dense prefix of the curve up to threshold `limit`.
fn truncate_report(report: &mut CoverageReport, limit: usize) {
    let keep = (limit + 1).min(report.one_t_counts.len());
    report.one_t_counts.truncate(keep);
    report.cumulative_shares.truncate(keep);
    // Recompute the peak over the kept prefix
    let (peak_known, peak_one_t) = report
        .one_t_counts
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
        .map_or((0, 0), |(k, &count)| (k, count));
    report.peak_known = peak_known;
    report.peak_one_t = peak_one_t;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> CoverageReport {
        CoverageReport {
            vocabulary_size: 3,
            sentence_count: 2,
            total_occurrences: 4,
            peak_one_t: 2,
            peak_known: 1,
            one_t_counts: vec![0, 2, 1, 0],
            cumulative_shares: vec![0.0, 50.0, 75.0, 100.0],
        }
    }

    #[test]
    fn milestone_lookup_finds_smallest_k() {
        let report = sample_report();
        assert_eq!(first_k_reaching(&report, 50.0), Some(1));
        assert_eq!(first_k_reaching(&report, 60.0), Some(2));
        assert_eq!(first_k_reaching(&report, 100.0), Some(3));
    }

    #[test]
    fn truncate_keeps_dense_prefix_and_repeaks() {
        let mut report = sample_report();
        truncate_report(&mut report, 2);
        assert_eq!(report.one_t_counts, vec![0, 2, 1]);
        assert_eq!(report.cumulative_shares, vec![0.0, 50.0, 75.0]);
        assert_eq!(report.peak_known, 1);
        assert_eq!(report.peak_one_t, 2);
    }

    #[test]
    fn truncate_beyond_len_is_noop() {
        let mut report = sample_report();
        truncate_report(&mut report, 10);
        assert_eq!(report.one_t_counts.len(), 4);
    }
}
