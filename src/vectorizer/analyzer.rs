use crate::config::MatcherConfig;
use crate::vectorizer::phrase::PhraseDictionary;
use crate::vectorizer::term::TermFrequency;
use crate::vectorizer::tokenizer::{tokenize, NGrams, StopWords};

/// Turns raw document text into terms.
///
/// A document's terms for order `n` are the dictionary phrases found in it
/// followed by its `n`-grams. Both are counted, so a phrase that is also an
/// n-gram (`"docker"` for `n = 1`) contributes twice.
#[derive(Debug, Clone)]
pub struct Analyzer {
    phrases: PhraseDictionary,
    stop_words: StopWords,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&MatcherConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: &MatcherConfig) -> Self {
        Self {
            phrases: PhraseDictionary::new(&config.phrases),
            stop_words: StopWords::new(&config.stop_words),
        }
    }

    pub fn phrases(&self) -> &PhraseDictionary {
        &self.phrases
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// n-grams of `text` with this analyzer's stop words removed
    pub fn tokenize(&self, text: &str, n: usize) -> NGrams {
        tokenize(text, n, &self.stop_words)
    }

    /// Dictionary phrases found in `text`, then every `n`-gram of it.
    ///
    /// # Examples
    /// ```
    /// use tfidf_matcher::Analyzer;
    ///
    /// let terms = Analyzer::default().extract_phrases("Machine learning in Python", 1);
    /// assert_eq!(terms, vec!["machine learning", "python", "machine", "learning", "python"]);
    /// ```
    pub fn extract_phrases(&self, text: &str, n: usize) -> Vec<String> {
        let lowered = text.to_lowercase();
        let ngrams = self.tokenize(text, n);
        let mut terms: Vec<String> = self.phrases.find_in(&lowered).map(str::to_owned).collect();
        terms.reserve(ngrams.len());
        terms.extend(ngrams.iter());
        terms
    }

    /// Occurrence counts of the terms of [`Analyzer::extract_phrases`]
    pub fn term_frequency(&self, document: &str, n: usize) -> TermFrequency {
        let lowered = document.to_lowercase();
        let mut freq = TermFrequency::new();
        freq.add_terms(self.phrases.find_in(&lowered));
        freq.add_terms(&self.tokenize(document, n));
        freq
    }
}
