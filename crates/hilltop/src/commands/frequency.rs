//! Frequency command — print the ranked lemma frequency list.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use hilltop_core::annotate::BasicAnnotator;
use hilltop_core::config::Config;
use hilltop_core::frequency::{FrequencyEntry, FrequencyList};

use super::{load_corpus, resolve_corpus_root};

/// Arguments for the `frequency` subcommand.
#[derive(Args, Debug)]
pub struct FrequencyArgs {
    /// Corpus directory (falls back to corpus_dir from config).
    pub dir: Option<Utf8PathBuf>,

    /// Show only the top N lemmas.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Serialize)]
struct FrequencyOutput<'a> {
    vocabulary_size: usize,
    total_occurrences: u64,
    entries: &'a [FrequencyEntry],
}

/// Rank lemma frequencies for a corpus and print them.
#[instrument(name = "cmd_frequency", skip_all, fields(dir = ?args.dir))]
pub fn cmd_frequency(
    args: FrequencyArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(dir = ?args.dir, top = ?args.top, "executing frequency command");

    let root = resolve_corpus_root(args.dir, config)?;
    let show_progress = !global_json && !quiet;
    let corpus = load_corpus(&root, config, &BasicAnnotator, show_progress)?;

    let list = FrequencyList::rank(corpus.sentences());
    let shown = args.top.unwrap_or(list.len()).min(list.len());
    let entries = &list.entries()[..shown];

    if global_json {
        let output = FrequencyOutput {
            vocabulary_size: list.len(),
            total_occurrences: list.total(),
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} distinct lemmas, {} occurrences",
        "Vocabulary:".bold(),
        list.len(),
        list.total(),
    );
    for (rank, entry) in entries.iter().enumerate() {
        println!("{:>6}  {:>8}  {}", rank + 1, entry.count, entry.lemma);
    }

    Ok(())
}
