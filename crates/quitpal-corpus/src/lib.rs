//! Corpus acquisition for QuitPal.
//!
//! Fetches source articles over HTTP, extracts their readable text, and
//! segments the result into the sentence pool the engine answers from.
//! Every source failure degrades: unreachable or unparseable sources are
//! logged and skipped, and when nothing at all can be fetched a placeholder
//! text keeps the engine supplied with a non-empty, segmentable corpus.
//!
//! # Main types
//!
//! - [`CorpusSource`] — Trait for fetching one source into raw text.
//! - [`ArticleFetcher`] — `reqwest`-backed [`CorpusSource`].
//! - [`build_corpus`] — Fetch all sources, degrade per-source.
//! - [`split_sentences`] — Sentence segmentation.

/// HTML-to-text extraction.
pub mod extract;
/// Article fetching over HTTP.
pub mod fetch;
/// Sentence segmentation.
pub mod segment;

pub use extract::extract_text;
pub use fetch::{build_corpus, ArticleFetcher, CorpusSource, PLACEHOLDER_CORPUS};
pub use segment::split_sentences;
