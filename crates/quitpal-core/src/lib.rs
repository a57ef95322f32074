//! Core types and error definitions for QuitPal.
//!
//! This crate provides the foundational types shared across all QuitPal
//! crates: error handling and the user profile model.
//!
//! # Main types
//!
//! - [`QuitpalError`] — Unified error enum for all QuitPal subsystems.
//! - [`QuitpalResult`] — Convenience alias for `Result<T, QuitpalError>`.
//! - [`UserProfile`] — Normalized per-session user profile.
//! - [`ProfilePayload`] — Raw initialize payload before normalization.

/// User profile model and payload normalization.
pub mod profile;

pub use profile::{ProfilePayload, UserProfile};

// --- Error types ---

/// Top-level error type for QuitPal.
///
/// Each variant corresponds to a subsystem that can produce errors.
#[derive(Debug, thiserror::Error)]
pub enum QuitpalError {
    /// An error from corpus acquisition (fetch, extraction, segmentation).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// An error originating inside the response-selection engine.
    #[error("Engine error: {0}")]
    Engine(String),

    /// The sentence set produced zero distinct tokens, so no term-count
    /// matrix can be built.
    #[error("empty vocabulary: sentence set contains no tokens")]
    EmptyVocabulary,

    /// An error from the HTTP gateway layer.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// An error in configuration parsing or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// An error from an outbound HTTP request (corpus sources).
    #[error("HTTP error: {0}")]
    Http(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`QuitpalError`].
pub type QuitpalResult<T> = Result<T, QuitpalError>;
