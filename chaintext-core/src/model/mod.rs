//! Word-level Markov chain models.
//!
//! The training path runs text through `tokenizer` into a `chain`, which
//! is then aggregated into a `frequency` table and persisted. The
//! generation path loads a table and walks it with `generator`.

/// Whitespace word splitting.
pub mod tokenizer;

/// Raw prefix -> suffix observation logs and the `Prefix` key type.
pub mod chain;

/// Aggregated per-prefix suffix counts, with on-disk persistence.
pub mod frequency;

/// Weighted random walk producing generated text.
pub mod generator;

pub use chain::{Chain, Prefix};
pub use frequency::{FrequencyTable, TableRecord};
