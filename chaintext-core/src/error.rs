use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by chain training, table persistence and generation.
///
/// A generation walk running out of suffixes is not an error; it is a
/// normal terminal state and simply shortens the output.
#[derive(Debug, Error)]
pub enum Error {
	/// An input or table file could not be read or written.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// A frequency table could not be encoded for writing.
	#[error("table encoding failed: {0}")]
	Encode(postcard::Error),

	/// A persisted record violates the table invariants: wrong prefix
	/// arity, a zero count, or bytes that do not decode as a table at
	/// all. Corrupt records are never dropped or repaired.
	#[error("malformed table record: {0}")]
	MalformedRecord(String),

	/// A prefix length of zero was requested.
	#[error("prefix length must be at least 1")]
	InvalidPrefixLength,
}
