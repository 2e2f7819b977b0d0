use std::collections::HashMap;

use crate::error::{Error, Result};

/// A fixed-length ordered sequence of words used as a lookup key for
/// predicting the next word.
///
/// Prefixes compare by value: two prefixes are equal iff every position
/// matches in order. The start-of-text state is a prefix of empty words
/// ([`Prefix::start`]); it is an explicit sentinel value handled like
/// any other key, not a special case in the generation logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix(Vec<String>);

impl Prefix {
	/// The start-of-text sentinel: `len` empty words.
	pub fn start(len: usize) -> Self {
		Self(vec![String::new(); len])
	}

	/// Builds a prefix from concrete words.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(words.into_iter().map(Into::into).collect())
	}

	/// Number of words in the prefix.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// The words, in order.
	pub fn words(&self) -> &[String] {
		&self.0
	}

	/// Slides the window forward: drops the first word and appends
	/// `word` at the end, keeping the length fixed.
	pub fn shift(&mut self, word: &str) {
		self.0.remove(0);
		self.0.push(word.to_owned());
	}
}

/// Raw prefix -> suffix observation log.
///
/// For every prefix of length `prefix_len` seen in the input, records
/// the ordered list of words observed immediately after it. Duplicates
/// are kept; repetition is what encodes frequency.
///
/// # Invariants
/// - `prefix_len` >= 1
/// - Every key has exactly `prefix_len` words
/// - Observation lists preserve insertion order and are never empty
#[derive(Debug)]
pub struct Chain {
	prefix_len: usize,
	observations: HashMap<Prefix, Vec<String>>,
}

impl Chain {
	/// Creates an empty chain for prefixes of `prefix_len` words.
	///
	/// # Errors
	/// Returns [`Error::InvalidPrefixLength`] if `prefix_len` is zero.
	pub fn new(prefix_len: usize) -> Result<Self> {
		if prefix_len == 0 {
			return Err(Error::InvalidPrefixLength);
		}
		Ok(Self { prefix_len, observations: HashMap::new() })
	}

	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Feeds one tokenized text into the chain.
	///
	/// The sliding window starts at the start sentinel, so the opening
	/// words of every fed text are recorded as transitions emanating
	/// from it (a text shorter than the prefix length still contributes
	/// its ramp-up transitions). Repeated calls accumulate into the same
	/// chain; each call restarts its window at the sentinel.
	pub fn feed<'a, I>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut window = Prefix::start(self.prefix_len);
		for token in tokens {
			self.observations
				.entry(window.clone())
				.or_default()
				.push(token.to_owned());
			window.shift(token);
		}
	}

	/// Iterates over all (prefix, observed suffixes) pairs.
	///
	/// Map iteration order is unspecified; the suffix lists themselves
	/// are in observation order.
	pub fn iter(&self) -> impl Iterator<Item = (&Prefix, &[String])> {
		self.observations.iter().map(|(prefix, suffixes)| (prefix, suffixes.as_slice()))
	}

	/// Number of distinct prefixes observed.
	pub fn len(&self) -> usize {
		self.observations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.observations.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::tokenizer::tokenize;

	fn suffixes<'a>(chain: &'a Chain, words: &[&str]) -> Option<Vec<&'a str>> {
		let key = Prefix::from_words(words.iter().copied());
		chain
			.iter()
			.find(|(prefix, _)| **prefix == key)
			.map(|(_, list)| list.iter().map(String::as_str).collect())
	}

	#[test]
	fn records_interior_prefixes() {
		let mut chain = Chain::new(2).unwrap();
		chain.feed(tokenize("the quick brown fox"));

		assert_eq!(suffixes(&chain, &["the", "quick"]), Some(vec!["brown"]));
		assert_eq!(suffixes(&chain, &["quick", "brown"]), Some(vec!["fox"]));
		assert_eq!(suffixes(&chain, &["brown", "fox"]), None);
	}

	#[test]
	fn records_start_sentinel_ramp_up() {
		let mut chain = Chain::new(2).unwrap();
		chain.feed(tokenize("the quick brown fox"));

		assert_eq!(suffixes(&chain, &["", ""]), Some(vec!["the"]));
		assert_eq!(suffixes(&chain, &["", "the"]), Some(vec!["quick"]));
	}

	#[test]
	fn duplicate_suffixes_are_retained_in_order() {
		let mut chain = Chain::new(1).unwrap();
		chain.feed(tokenize("a b a b a c"));

		assert_eq!(suffixes(&chain, &["a"]), Some(vec!["b", "b", "c"]));
		assert_eq!(suffixes(&chain, &["b"]), Some(vec!["a", "a"]));
	}

	#[test]
	fn feeds_accumulate_and_share_the_start_prefix() {
		let mut chain = Chain::new(2).unwrap();
		chain.feed(tokenize("one two three"));
		chain.feed(tokenize("four five"));

		// Both texts emanate from the same sentinel
		assert_eq!(suffixes(&chain, &["", ""]), Some(vec!["one", "four"]));
		// The second file's window did not continue from the first
		assert_eq!(suffixes(&chain, &["two", "three"]), None);
	}

	#[test]
	fn short_text_still_contributes_ramp_up() {
		let mut chain = Chain::new(3).unwrap();
		chain.feed(tokenize("hi"));

		assert_eq!(suffixes(&chain, &["", "", ""]), Some(vec!["hi"]));
		assert_eq!(chain.len(), 1);
	}

	#[test]
	fn empty_text_adds_nothing() {
		let mut chain = Chain::new(2).unwrap();
		chain.feed(tokenize(""));
		assert!(chain.is_empty());
	}

	#[test]
	fn zero_prefix_length_is_rejected() {
		assert!(matches!(Chain::new(0), Err(Error::InvalidPrefixLength)));
	}

	#[test]
	fn prefix_shift_slides_the_window() {
		let mut prefix = Prefix::from_words(["I", "am"]);
		prefix.shift("not");
		assert_eq!(prefix, Prefix::from_words(["am", "not"]));
	}
}
