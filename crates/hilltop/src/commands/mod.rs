//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use hilltop_core::annotate::Annotator;
use hilltop_core::config::Config;
use hilltop_core::corpus::{self, Corpus};

pub mod frequency;
pub mod info;
pub mod sweep;

/// Resolve the corpus root: CLI argument first, then `corpus_dir` from config.
pub fn resolve_corpus_root(
    arg: Option<Utf8PathBuf>,
    config: &Config,
) -> anyhow::Result<Utf8PathBuf> {
    arg.or_else(|| config.corpus_dir.clone()).context(
        "no corpus directory given: pass DIR or set corpus_dir in the configuration file",
    )
}

/// Discover, read, clean, and annotate a corpus directory.
///
/// Shared by the `sweep` and `frequency` commands. Progress bars mirror the
/// per-file stages; they are suppressed by `--quiet` and `--json`.
pub fn load_corpus(
    root: &Utf8Path,
    config: &Config,
    annotator: &dyn Annotator,
    show_progress: bool,
) -> anyhow::Result<Corpus> {
    let include = config
        .include_set()
        .context("invalid include patterns in configuration")?;
    let files = corpus::find_corpus_files(root, &include)
        .with_context(|| format!("failed to scan corpus directory {root}"))?;

    let bar = progress_bar(files.len() as u64, "annotating", show_progress);
    let limit = config.file_limit();

    let mut corpus = Corpus::default();
    for path in &files {
        let raw = corpus::read_corpus_file(path, limit)
            .with_context(|| format!("failed to read corpus file {path}"))?;
        let cleaned = hilltop_core::text::clean_text(&raw);
        corpus.extend(annotator.annotate(&cleaned));
        bar.inc(1);
    }
    bar.finish_and_clear();

    tracing::info!(
        files = files.len(),
        sentences = corpus.len(),
        "corpus loaded"
    );
    Ok(corpus)
}

/// A progress bar on stderr, or a hidden one when output must stay clean.
pub fn progress_bar(len: u64, message: &'static str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len).with_message(message);
    bar.set_style(
        ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}")
            .expect("valid progress template")
            .progress_chars("=> "),
    );
    bar
}
