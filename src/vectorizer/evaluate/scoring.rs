use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::vectorizer::{
    analyzer::Analyzer,
    compare::cosine_similarity,
    corpus::Corpus,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine, TermVector},
    TFIDFVectorizer,
};

/// Unigram and bigram similarity of one document pair, and their mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchScore {
    pub unigram: f64,
    pub bigram: f64,
    pub average: f64,
}

impl MatchScore {
    pub fn new(unigram: f64, bigram: f64) -> Self {
        Self {
            unigram,
            bigram,
            average: (unigram + bigram) / 2.0,
        }
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} (unigram {:.6}, bigram {:.6})",
            self.average, self.unigram, self.bigram
        )
    }
}

fn warn_if_empty(vec: &TermVector<f64>, side: &str, n: usize) {
    if vec.is_empty() {
        warn!(side, n, "document has no terms, similarity is 0");
    }
}

/// Pairwise scorer over a stateful [`TFIDFVectorizer`].
///
/// Each score transforms both documents as single-document corpora, so every
/// call grows the vectorizer's document-frequency table and idf cache.
/// Scores can depend on what was scored before on the same instance.
#[derive(Debug, Clone)]
pub struct Matcher<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    vectorizer: TFIDFVectorizer<E>,
}

impl<E> Default for Matcher<E>
where
    E: TFIDFEngine,
{
    fn default() -> Self {
        Self {
            vectorizer: TFIDFVectorizer::new(),
        }
    }
}

impl<E> Matcher<E>
where
    E: TFIDFEngine,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &MatcherConfig) -> Self {
        Self {
            vectorizer: TFIDFVectorizer::with_config(config),
        }
    }

    pub fn vectorizer(&self) -> &TFIDFVectorizer<E> {
        &self.vectorizer
    }

    /// Cosine similarity of `a` and `b` vectorized with `n`-grams.
    ///
    /// # Arguments
    /// * `a` - first document
    /// * `b` - second document
    /// * `n` - n-gram order, at least 1
    ///
    /// # Errors
    /// [`MatchError::InvalidNgramOrder`] when `n` is zero.
    pub fn matching_score(&mut self, a: &str, b: &str, n: usize) -> Result<f64> {
        if n == 0 {
            return Err(MatchError::InvalidNgramOrder(n));
        }
        Ok(self.score_unchecked(a, b, n))
    }

    fn score_unchecked(&mut self, a: &str, b: &str, n: usize) -> f64 {
        let vec_a = self.vectorizer.transform_unchecked(&[a], n);
        let vec_b = self.vectorizer.transform_unchecked(&[b], n);
        warn_if_empty(&vec_a, "left", n);
        warn_if_empty(&vec_b, "right", n);
        cosine_similarity(&vec_a, &vec_b)
    }

    /// Unigram score, then bigram score, of `a` against `b`
    pub fn score_breakdown(&mut self, a: &str, b: &str) -> MatchScore {
        let unigram = self.score_unchecked(a, b, 1);
        let bigram = self.score_unchecked(a, b, 2);
        let score = MatchScore::new(unigram, bigram);
        debug!(unigram, bigram, average = score.average, "scored pair");
        score
    }

    /// Mean of the unigram and bigram scores
    pub fn average_matching_score(&mut self, a: &str, b: &str) -> f64 {
        self.score_breakdown(a, b).average
    }
}

/// Pairwise scorer against fixed reference corpora.
///
/// The unigram and bigram corpora are fitted once; scoring reads them and
/// never changes them, so results do not depend on call order and the
/// matcher can be shared between threads.
#[derive(Debug, Clone)]
pub struct CorpusMatcher<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    analyzer: Analyzer,
    unigram: Corpus,
    bigram: Corpus,
    _marker: std::marker::PhantomData<E>,
}

impl<E> CorpusMatcher<E>
where
    E: TFIDFEngine,
{
    /// Fit unigram and bigram corpora on `documents`
    pub fn fit<T>(config: &MatcherConfig, documents: &[T]) -> Result<Self>
    where
        T: AsRef<str> + Sync,
    {
        let analyzer = Analyzer::new(config);
        let unigram = Corpus::fit(&analyzer, documents, 1)?;
        let bigram = Corpus::fit(&analyzer, documents, 2)?;
        Ok(Self {
            analyzer,
            unigram,
            bigram,
            _marker: std::marker::PhantomData,
        })
    }

    /// Corpus used for order `n`, if the matcher keeps one
    pub fn corpus(&self, n: usize) -> Option<&Corpus> {
        match n {
            1 => Some(&self.unigram),
            2 => Some(&self.bigram),
            _ => None,
        }
    }

    /// # Errors
    /// [`MatchError::InvalidArgument`] unless `n` is 1 or 2.
    pub fn matching_score(&self, a: &str, b: &str, n: usize) -> Result<f64> {
        let corpus = self.corpus(n).ok_or_else(|| {
            MatchError::invalid_argument(format!("no corpus fitted for n-gram order {n}"))
        })?;
        let vec_a = corpus.transform::<E>(&self.analyzer, a);
        let vec_b = corpus.transform::<E>(&self.analyzer, b);
        warn_if_empty(&vec_a, "left", n);
        warn_if_empty(&vec_b, "right", n);
        Ok(cosine_similarity(&vec_a, &vec_b))
    }

    pub fn score_breakdown(&self, a: &str, b: &str) -> MatchScore {
        let unigram = cosine_similarity(
            &self.unigram.transform::<E>(&self.analyzer, a),
            &self.unigram.transform::<E>(&self.analyzer, b),
        );
        let bigram = cosine_similarity(
            &self.bigram.transform::<E>(&self.analyzer, a),
            &self.bigram.transform::<E>(&self.analyzer, b),
        );
        MatchScore::new(unigram, bigram)
    }

    pub fn average_matching_score(&self, a: &str, b: &str) -> f64 {
        self.score_breakdown(a, b).average
    }
}
