//! Core library for hilltop.
//!
//! This crate provides the vocabulary-coverage analyzer used by the
//! `hilltop` CLI and any downstream consumers: frequency ranking over an
//! annotated corpus and the 1T-sentence coverage sweep, plus the thin
//! boundary layers around them (corpus discovery, text cleanup, a
//! rule-based annotator, configuration).
//!
//! # Modules
//!
//! - [`annotate`] - The raw-text → lemma-sentences boundary
//! - [`config`] - Configuration loading and management
//! - [`corpus`] - Sentence/corpus types and on-disk discovery
//! - [`coverage`] - The 1T coverage sweep
//! - [`error`] - Error types and result aliases
//! - [`frequency`] - Frequency ranking
//! - [`report`] - Hand-off report types
//! - [`text`] - Cleanup and sentence splitting
//!
//! # Quick Start
//!
//! ```
//! use hilltop_core::annotate::{Annotator, BasicAnnotator};
//! use hilltop_core::corpus::Corpus;
//! use hilltop_core::coverage::sweep;
//! use hilltop_core::frequency::FrequencyList;
//!
//! let mut corpus = Corpus::default();
//! corpus.extend(BasicAnnotator.annotate("The cat sat. The cat ran."));
//!
//! let freq = FrequencyList::rank(corpus.sentences());
//! let curve = sweep(&freq, corpus.sentences());
//! assert_eq!(curve.points().len(), freq.len() + 1);
//! ```
#![deny(unsafe_code)]

pub mod annotate;
pub mod config;
pub mod corpus;
pub mod coverage;
pub mod error;
pub mod frequency;
pub mod report;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use corpus::{Corpus, Sentence};
pub use coverage::{CoverageCurve, CoveragePoint, sweep};
pub use error::{ConfigError, ConfigResult, CorpusError, CorpusResult};
pub use frequency::{FrequencyEntry, FrequencyList};
pub use report::CoverageReport;
