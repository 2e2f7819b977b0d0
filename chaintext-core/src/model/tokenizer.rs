/// Splits raw text into word tokens.
///
/// A word is a maximal run of non-whitespace characters; runs of spaces,
/// tabs and newlines separate words and empty fragments are discarded.
/// No case or punctuation normalization is applied. The returned
/// iterator is lazy; call again on the same text to restart.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
	text.split_whitespace()
}
