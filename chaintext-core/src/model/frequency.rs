use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::chain::{Chain, Prefix};
use crate::error::{Error, Result};

/// One persisted table entry: the prefix words in order, the suffix
/// word, and how many times that suffix was observed after that prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
	pub prefix: Vec<String>,
	pub suffix: String,
	pub count: u64,
}

/// Flat on-disk form of a frequency table.
#[derive(Serialize, Deserialize)]
struct TableFile {
	prefix_len: usize,
	records: Vec<TableRecord>,
}

/// Aggregated per-prefix suffix counts, derived from a [`Chain`].
///
/// # Invariants
/// - Every stored count is >= 1 (zero-count entries are never kept)
/// - For a given prefix, the counts sum to the number of times that
///   prefix was observed in the source chain
/// - Every prefix has exactly `prefix_len` words
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
	prefix_len: usize,
	entries: HashMap<Prefix, HashMap<String, u64>>,
}

impl FrequencyTable {
	/// Tallies a chain's observation logs into counted distributions.
	///
	/// Deterministic: the same chain always produces the same counts.
	pub fn build(chain: &Chain) -> Self {
		let mut entries: HashMap<Prefix, HashMap<String, u64>> = HashMap::new();
		for (prefix, suffixes) in chain.iter() {
			let counts = entries.entry(prefix.clone()).or_default();
			for suffix in suffixes {
				*counts.entry(suffix.clone()).or_insert(0) += 1;
			}
		}
		Self { prefix_len: chain.prefix_len(), entries }
	}

	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Number of distinct prefixes in the table.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Suffix counts recorded for `prefix`.
	///
	/// `None` means no observations exist for that prefix; for the
	/// generator this is the terminal state.
	pub fn suffixes_for(&self, prefix: &Prefix) -> Option<&HashMap<String, u64>> {
		self.entries.get(prefix)
	}

	/// Flattens the table into records, one per non-zero entry.
	///
	/// No ordering is guaranteed; the record *set* is what round-trips.
	pub fn to_records(&self) -> Vec<TableRecord> {
		let mut records = Vec::new();
		for (prefix, counts) in &self.entries {
			for (suffix, count) in counts {
				records.push(TableRecord {
					prefix: prefix.words().to_vec(),
					suffix: suffix.clone(),
					count: *count,
				});
			}
		}
		records
	}

	/// Rebuilds a table from records, in any order.
	///
	/// Duplicate (prefix, suffix) records have their counts summed.
	///
	/// # Errors
	/// [`Error::MalformedRecord`] if a record's prefix arity differs
	/// from `prefix_len` or its count is zero;
	/// [`Error::InvalidPrefixLength`] if `prefix_len` is zero.
	pub fn from_records(prefix_len: usize, records: Vec<TableRecord>) -> Result<Self> {
		if prefix_len == 0 {
			return Err(Error::InvalidPrefixLength);
		}

		let mut entries: HashMap<Prefix, HashMap<String, u64>> = HashMap::new();
		for record in records {
			if record.prefix.len() != prefix_len {
				return Err(Error::MalformedRecord(format!(
					"prefix has {} words, table expects {}",
					record.prefix.len(),
					prefix_len
				)));
			}
			if record.count == 0 {
				return Err(Error::MalformedRecord(format!(
					"suffix {:?} has a zero count",
					record.suffix
				)));
			}
			*entries
				.entry(Prefix::from_words(record.prefix))
				.or_default()
				.entry(record.suffix)
				.or_insert(0) += record.count;
		}

		Ok(Self { prefix_len, entries })
	}

	/// Writes the table to `path` as a postcard-encoded record set.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let file = TableFile {
			prefix_len: self.prefix_len,
			records: self.to_records(),
		};
		let bytes = postcard::to_stdvec(&file).map_err(Error::Encode)?;
		std::fs::write(path, bytes)?;
		Ok(())
	}

	/// Reads a table previously written by [`FrequencyTable::save`].
	///
	/// # Errors
	/// Bytes that do not decode as a table (truncated or foreign files)
	/// and records that violate the invariants are all reported as
	/// [`Error::MalformedRecord`]; nothing is silently dropped.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		let file: TableFile = postcard::from_bytes(&bytes)
			.map_err(|e| Error::MalformedRecord(e.to_string()))?;
		Self::from_records(file.prefix_len, file.records)
	}
}
