//! Markov word-chain library.
//!
//! This crate builds a statistical model of word sequences from raw text
//! and generates new text from it:
//! - Whitespace tokenization
//! - Chain construction (per-prefix suffix observation logs)
//! - Frequency tables (aggregated suffix counts, persisted to disk)
//! - Weighted random generation over a frequency table
//!
//! Only the high-level API is exposed publicly. Internal representations
//! are kept private to ensure consistency and prevent misuse.

/// Core chain models and generation logic.
pub mod model;

/// Error type shared by training, persistence and generation.
pub mod error;

pub use error::{Error, Result};
