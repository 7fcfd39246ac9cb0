//! Corpus types and on-disk discovery.
//!
//! A [`Sentence`] is an ordered sequence of lemma strings, already filtered
//! of punctuation, whitespace-only, and proper-noun tokens by the annotation
//! stage. Sentences are immutable once built; empty sentences never enter a
//! [`Corpus`].

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, CorpusResult};

/// One sentence as an ordered sequence of lemma strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    lemmas: Vec<String>,
}

impl Sentence {
    /// Build a sentence from lemma strings. Returns `None` when no lemmas
    /// survived upstream filtering — empty sentences are discarded at
    /// ingestion rather than carried through the sweep.
    pub fn new(lemmas: Vec<String>) -> Option<Self> {
        if lemmas.is_empty() {
            None
        } else {
            Some(Self { lemmas })
        }
    }

    /// The lemmas in order of occurrence, repeats included.
    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// The distinct lemma types in this sentence.
    ///
    /// 1T counting is over types: a sentence of all-repeated lemmas has a
    /// single unknown when that lemma is unknown.
    pub fn types(&self) -> HashSet<&str> {
        self.lemmas.iter().map(String::as_str).collect()
    }

    /// Number of distinct lemma types.
    pub fn type_count(&self) -> usize {
        self.types().len()
    }
}

/// An in-memory corpus of annotated sentences.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    /// Build a corpus from pre-annotated sentences, discarding empties.
    pub fn from_token_streams<I>(streams: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let sentences = streams.into_iter().filter_map(Sentence::new).collect();
        Self { sentences }
    }

    /// All sentences in corpus order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the corpus holds no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Append already-filtered sentences from one annotated text.
    pub fn extend(&mut self, sentences: Vec<Sentence>) {
        self.sentences.extend(sentences);
    }
}

/// Default include pattern for corpus discovery.
pub const DEFAULT_INCLUDE: &str = "**/*.txt";

/// Compile include glob patterns into a matcher.
pub fn build_include_set(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

/// Recursively find corpus files under `root` matching the include set.
///
/// Paths are matched relative to `root` and returned sorted for a
/// deterministic processing order.
#[tracing::instrument(skip(include))]
pub fn find_corpus_files(root: &Utf8Path, include: &GlobSet) -> CorpusResult<Vec<Utf8PathBuf>> {
    if !root.is_dir() {
        return Err(CorpusError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    walk(root, root, include, &mut files)?;
    files.sort();
    tracing::debug!(count = files.len(), "corpus files discovered");
    Ok(files)
}

fn walk(
    root: &Utf8Path,
    dir: &Utf8Path,
    include: &GlobSet,
    files: &mut Vec<Utf8PathBuf>,
) -> CorpusResult<()> {
    let entries = dir.read_dir_utf8().map_err(|source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| CorpusError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if file_type.is_dir() {
            walk(root, path, include, files)?;
        } else if file_type.is_file() {
            let relative = path.strip_prefix(root).unwrap_or(path);
            if include.is_match(relative.as_str()) {
                files.push(path.to_path_buf());
            }
        }
    }

    Ok(())
}

/// Read one corpus file, enforcing the optional size limit before the read.
pub fn read_corpus_file(path: &Utf8Path, max_bytes: Option<u64>) -> CorpusResult<String> {
    let metadata = path.metadata().map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(limit) = max_bytes {
        let size = metadata.len();
        if size > limit {
            return Err(CorpusError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    std::fs::read_to_string(path.as_std_path()).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}
