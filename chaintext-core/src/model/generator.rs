use rand::Rng;

use super::chain::Prefix;
use super::frequency::FrequencyTable;

/// Generates up to `word_limit` words by a weighted random walk.
///
/// The walk starts from the start sentinel and halts early when the
/// current prefix has no recorded suffixes. Early exhaustion is normal
/// termination; the output is simply shorter than requested.
pub fn generate(table: &FrequencyTable, word_limit: usize) -> Vec<String> {
	generate_with(table, word_limit, &mut rand::rng())
}

/// Same walk with a caller-supplied randomness source.
///
/// Useful for seeded, reproducible runs in tests.
pub fn generate_with<R: Rng + ?Sized>(
	table: &FrequencyTable,
	word_limit: usize,
	rng: &mut R,
) -> Vec<String> {
	let mut window = Prefix::start(table.prefix_len());
	let mut words = Vec::new();

	while words.len() < word_limit {
		match next_word(table, &window, rng) {
			Some(word) => {
				window.shift(&word);
				words.push(word);
			}
			None => break,
		}
	}

	words
}

/// Weighted pick of the word following `window`.
///
/// Suffixes are walked in sorted token order so the cumulative buckets
/// are laid out identically on every call, then a single uniform draw
/// over the total count selects a bucket. Ties fall to the randomness
/// source, never to a fixed rule.
fn next_word<R: Rng + ?Sized>(
	table: &FrequencyTable,
	window: &Prefix,
	rng: &mut R,
) -> Option<String> {
	let counts = table.suffixes_for(window)?;

	let mut ordered: Vec<(&String, u64)> =
		counts.iter().map(|(word, count)| (word, *count)).collect();
	ordered.sort_by(|a, b| a.0.cmp(b.0));

	let total: u64 = ordered.iter().map(|(_, count)| count).sum();
	if total == 0 {
		// Should not happen, counts are >= 1 by construction
		return None;
	}

	let mut draw = rng.random_range(0..total);
	for (word, count) in &ordered {
		if draw < *count {
			return Some((*word).clone());
		}
		draw -= count;
	}

	// Unreachable, the buckets cover 0..total; kept for safety
	ordered.last().map(|(word, _)| (*word).clone())
}
