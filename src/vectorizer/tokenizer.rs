use std::collections::HashSet;
use std::slice::Windows;

use ahash::RandomState;
use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of anything that is not a letter, digit or underscore.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid non-word pattern"));

/// Case-insensitive stop-word set
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<Box<str>, RandomState>,
}

impl StopWords {
    /// Build a set from any list of words; entries are lower-cased.
    pub fn new<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .map(String::into_boxed_str)
            .collect();
        Self { words }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STOP_WORDS)
    }
}

/// Lower-case `text`, split it on non-word runs and drop empty tokens and stop words.
pub fn split_words(text: &str, stop_words: &StopWords) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .split(&lowered)
        .filter(|word| !word.is_empty() && !stop_words.contains(word))
        .map(str::to_owned)
        .collect()
}

/// Tokenize `text` into its contiguous `n`-grams.
///
/// The returned value owns the surviving words; iterating it builds each
/// n-gram on demand, and it can be iterated any number of times.
///
/// # Examples
/// ```
/// use tfidf_matcher::vectorizer::tokenizer::{tokenize, StopWords};
///
/// let grams = tokenize("Rust and the borrow checker", 2, &StopWords::default());
/// let grams: Vec<String> = grams.iter().collect();
/// assert_eq!(grams, vec!["rust borrow", "borrow checker"]);
/// ```
pub fn tokenize(text: &str, n: usize, stop_words: &StopWords) -> NGrams {
    NGrams::new(split_words(text, stop_words), n)
}

/// Sliding window of `n` words over a filtered word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGrams {
    words: Vec<String>,
    n: usize,
}

impl NGrams {
    pub fn new(words: Vec<String>, n: usize) -> Self {
        Self { words, n }
    }

    /// Window size
    #[inline]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Words that survived stop-word filtering
    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of n-grams the sequence yields
    #[inline]
    pub fn len(&self) -> usize {
        if self.n == 0 {
            return 0;
        }
        (self.words.len() + 1).saturating_sub(self.n)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the n-grams from left to right.
    /// An order of zero yields nothing.
    pub fn iter(&self) -> NGramIter<'_> {
        let windows = if self.n == 0 { None } else { Some(self.words.windows(self.n)) };
        NGramIter { windows }
    }
}

impl<'a> IntoIterator for &'a NGrams {
    type Item = String;
    type IntoIter = NGramIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the space-joined windows of an [`NGrams`]
#[derive(Debug, Clone)]
pub struct NGramIter<'a> {
    windows: Option<Windows<'a, String>>,
}

impl Iterator for NGramIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.windows.as_mut()?.next().map(|window| window.join(" "))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.windows {
            Some(windows) => windows.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for NGramIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn grams(text: &str, n: usize) -> Vec<String> {
        tokenize(text, n, &StopWords::default()).iter().collect()
    }

    #[test]
    fn unigrams_drop_only_listed_stop_words() {
        // "over" is not a stop word, only "the" is removed
        assert_eq!(
            grams("The quick brown fox jumps over the lazy dog.", 1),
            vec!["quick", "brown", "fox", "jumps", "over", "lazy", "dog"]
        );
    }

    #[test]
    fn bigrams_join_adjacent_surviving_words() {
        assert_eq!(
            grams("Data science involves analyzing data", 2),
            vec!["data science", "science involves", "involves analyzing", "analyzing data"]
        );
    }

    #[test]
    fn punctuation_and_symbols_split_words() {
        // '#' and '.' are non-word characters, '_' is a word character
        assert_eq!(grams("C#, ASP.NET & snake_case", 1), vec!["c", "asp", "net", "snake_case"]);
    }

    #[test]
    fn too_few_words_yield_nothing() {
        assert!(grams("rust", 2).is_empty());
        assert!(grams("", 1).is_empty());
        assert!(grams("the and of", 1).is_empty());
    }

    #[test]
    fn zero_order_yields_nothing() {
        let ngrams = tokenize("some words here", 0, &StopWords::default());
        assert_eq!(ngrams.len(), 0);
        assert_eq!(ngrams.iter().count(), 0);
    }

    #[test]
    fn sequence_is_restartable() {
        let ngrams = tokenize("alpha beta gamma", 2, &StopWords::default());
        let first: Vec<String> = ngrams.iter().collect();
        let second: Vec<String> = (&ngrams).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(ngrams.len(), first.len());
        assert_eq!(ngrams.iter().len(), 2);
    }

    #[test]
    fn custom_stop_words_are_case_insensitive() {
        let stop = StopWords::new(["Rust", " LOVE "]);
        assert_eq!(stop.len(), 2);
        let words = split_words("I love RUST", &stop);
        assert_eq!(words, vec!["i"]);
    }
}
