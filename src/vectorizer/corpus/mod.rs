use std::collections::HashMap;

use ahash::RandomState;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{MatchError, Result};
use crate::vectorizer::{
    analyzer::Analyzer,
    term::TermFrequency,
    tfidf::{TFIDFEngine, TermVector},
};

/// Reference document statistics for one n-gram order.
///
/// Holds only the number of documents and, per term, how many of them
/// contain it. Once built it is read-only, so weighting a document against
/// it is a pure function and the corpus can be shared across threads.
#[derive(Debug, Clone)]
pub struct Corpus {
    ngram_order: usize,
    doc_num: u64,
    term_counts: HashMap<Box<str>, u64, RandomState>,
}

impl Corpus {
    /// Create an empty corpus for `n`-grams
    ///
    /// # Errors
    /// [`MatchError::InvalidNgramOrder`] when `ngram_order` is zero.
    pub fn new(ngram_order: usize) -> Result<Self> {
        if ngram_order == 0 {
            return Err(MatchError::InvalidNgramOrder(ngram_order));
        }
        Ok(Self {
            ngram_order,
            doc_num: 0,
            term_counts: HashMap::with_hasher(RandomState::new()),
        })
    }

    /// Build a corpus from reference documents.
    /// Documents are analyzed in parallel.
    ///
    /// # Errors
    /// [`MatchError::InvalidNgramOrder`] when `n` is zero.
    pub fn fit<T>(analyzer: &Analyzer, documents: &[T], n: usize) -> Result<Self>
    where
        T: AsRef<str> + Sync,
    {
        let mut corpus = Corpus::new(n)?;
        let freqs: Vec<TermFrequency> = documents
            .par_iter()
            .map(|doc| analyzer.term_frequency(doc.as_ref(), n))
            .collect();
        for freq in &freqs {
            corpus.add_set(&freq.term_set_ref_str());
        }
        debug!(
            n,
            documents = corpus.doc_num,
            vocabulary = corpus.vocab_size(),
            "fitted corpus"
        );
        Ok(corpus)
    }

    /// Add one document given its distinct terms
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            let term = term.as_ref();
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.into(), 1);
            }
        }
    }

    /// Analyze `document` and add it
    pub fn add_document(&mut self, analyzer: &Analyzer, document: &str) {
        let freq = analyzer.term_frequency(document, self.ngram_order);
        self.add_set(&freq.term_set_ref_str());
    }

    #[inline]
    pub fn ngram_order(&self) -> usize {
        self.ngram_order
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// IDF of `term` against this corpus
    #[inline]
    pub fn idf<E: TFIDFEngine>(&self, term: &str) -> f64 {
        E::idf(self.doc_num, self.get_term_count(term))
    }

    /// TF-IDF vector of `document` weighted by this corpus.
    /// Never modifies the corpus; equal inputs give equal vectors.
    pub fn transform<E: TFIDFEngine>(&self, analyzer: &Analyzer, document: &str) -> TermVector<f64> {
        analyzer
            .term_frequency(document, self.ngram_order)
            .tf_vector::<E>()
            .iter()
            .map(|(term, tf)| (term, tf * self.idf::<E>(term)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::tfidf::DefaultTFIDFEngine;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn fit_counts_documents_containing_each_term() {
        let analyzer = Analyzer::default();
        let docs = ["brown fox", "brown dog", "lazy dog dog"];
        let corpus = Corpus::fit(&analyzer, &docs, 1).unwrap();
        assert_eq!(corpus.get_doc_num(), 3);
        assert_eq!(corpus.get_term_count("brown"), 2);
        // presence, not occurrences
        assert_eq!(corpus.get_term_count("dog"), 2);
        assert_eq!(corpus.get_term_count("cat"), 0);
        assert_eq!(corpus.vocab_size(), 4);
    }

    #[test]
    fn transform_is_repeatable() {
        let analyzer = Analyzer::default();
        let corpus = Corpus::fit(&analyzer, &["brown fox", "brown dog"], 1).unwrap();
        let a = corpus.transform::<DefaultTFIDFEngine>(&analyzer, "brown fox jumps");
        let b = corpus.transform::<DefaultTFIDFEngine>(&analyzer, "brown fox jumps");
        assert_eq!(a, b);
        assert_eq!(corpus.get_doc_num(), 2);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let analyzer = Analyzer::default();
        let corpus = Corpus::fit(&analyzer, &["brown fox", "brown dog"], 1).unwrap();
        let vec = corpus.transform::<DefaultTFIDFEngine>(&analyzer, "brown fox");
        // brown: ln(2/3)+1, fox: ln(2/2)+1
        assert!(approx(vec.get("brown").unwrap(), 0.5 * ((2.0f64 / 3.0).ln() + 1.0)));
        assert!(approx(vec.get("fox").unwrap(), 0.5));
        assert!(vec.get("fox").unwrap() > vec.get("brown").unwrap());
    }

    #[test]
    fn add_document_uses_corpus_order() {
        let analyzer = Analyzer::default();
        let mut corpus = Corpus::new(2).unwrap();
        corpus.add_document(&analyzer, "quick brown fox");
        assert_eq!(corpus.get_term_count("quick brown"), 1);
        assert_eq!(corpus.get_term_count("quick"), 0);
    }

    #[test]
    fn zero_order_is_rejected() {
        let err = Corpus::fit(&Analyzer::default(), &["x"], 0).unwrap_err();
        assert!(matches!(err, MatchError::InvalidNgramOrder(0)));
        assert!(matches!(Corpus::new(0), Err(MatchError::InvalidNgramOrder(0))));
    }
}
