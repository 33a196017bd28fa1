pub mod analyzer;
pub mod compare;
pub mod corpus;
pub mod evaluate;
pub mod phrase;
pub mod term;
pub mod tfidf;
pub mod tokenizer;

use std::collections::HashMap;
use std::marker::PhantomData;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::vectorizer::{
    analyzer::Analyzer,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine, TermVector},
};

/// Stateful TF-IDF vectorizer.
///
/// Every `transform` call adds its documents to a document-frequency table
/// that lives as long as the instance, and the first IDF computed for a term
/// is cached and never recomputed. Results therefore depend on call history:
/// transforming the same text twice may not give the same vector. Use
/// [`corpus::Corpus`] for order-independent weighting.
///
/// `transform` takes `&mut self`; concurrent callers each need their own instance.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    analyzer: Analyzer,
    /// documents containing each term, over every transform call
    doc_freq: HashMap<Box<str>, u64, RandomState>,
    /// first idf computed per term
    idf_cache: HashMap<Box<str>, f64, RandomState>,
    _marker: PhantomData<E>,
}

impl<E> Default for TFIDFVectorizer<E>
where
    E: TFIDFEngine,
{
    fn default() -> Self {
        Self::with_analyzer(Analyzer::default())
    }
}

impl<E> TFIDFVectorizer<E>
where
    E: TFIDFEngine,
{
    /// Create a vectorizer with the built-in dictionary and stop words
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &MatcherConfig) -> Self {
        Self::with_analyzer(Analyzer::new(config))
    }

    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            doc_freq: HashMap::with_hasher(RandomState::new()),
            idf_cache: HashMap::with_hasher(RandomState::new()),
            _marker: PhantomData,
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Normalized term frequencies of one document for order `n`.
    /// Does not touch the document-frequency table.
    pub fn compute_term_frequency(&self, document: &str, n: usize) -> TermVector<f64> {
        self.analyzer.term_frequency(document, n).tf_vector::<E>()
    }

    /// TF-IDF vector of `documents`, summed over the documents.
    ///
    /// Counts each document into the document-frequency table, then weights
    /// every term frequency by the term's idf, computed against the number of
    /// documents in this call the first time the term is weighted and cached
    /// from then on.
    ///
    /// # Errors
    /// [`MatchError::InvalidNgramOrder`] when `n` is zero.
    pub fn transform<T>(&mut self, documents: &[T], n: usize) -> Result<TermVector<f64>>
    where
        T: AsRef<str>,
    {
        if n == 0 {
            return Err(MatchError::InvalidNgramOrder(n));
        }
        Ok(self.transform_unchecked(documents, n))
    }

    pub(crate) fn transform_unchecked<T>(&mut self, documents: &[T], n: usize) -> TermVector<f64>
    where
        T: AsRef<str>,
    {
        let doc_num = documents.len() as u64;
        let tf_vecs: Vec<TermVector<f64>> = documents
            .iter()
            .map(|doc| self.compute_term_frequency(doc.as_ref(), n))
            .collect();

        for tf in &tf_vecs {
            for (term, freq) in tf.iter() {
                if freq > 0.0 {
                    self.count_document(term);
                }
            }
        }

        let mut tfidf = TermVector::with_capacity(tf_vecs.iter().map(TermVector::len).sum());
        for tf in &tf_vecs {
            for (term, freq) in tf.iter() {
                let idf = self.idf(term, doc_num);
                tfidf.add(term, freq * idf);
            }
        }
        debug!(
            documents = doc_num,
            n,
            terms = tfidf.len(),
            vocabulary = self.doc_freq.len(),
            "transformed documents"
        );
        tfidf
    }

    fn count_document(&mut self, term: &str) {
        if let Some(count) = self.doc_freq.get_mut(term) {
            *count += 1;
        } else {
            self.doc_freq.insert(term.into(), 1);
        }
    }

    fn idf(&mut self, term: &str, doc_num: u64) -> f64 {
        if let Some(&idf) = self.idf_cache.get(term) {
            return idf;
        }
        let idf = E::idf(doc_num, self.doc_freq(term));
        trace!(term, idf, doc_num, "idf cache miss");
        self.idf_cache.insert(term.into(), idf);
        idf
    }

    /// Number of documents, over all calls so far, that contained `term`
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Cached idf of `term`, if it has been weighted before
    pub fn cached_idf(&self, term: &str) -> Option<f64> {
        self.idf_cache.get(term).copied()
    }

    /// Distinct terms in the document-frequency table
    pub fn vocab_size(&self) -> usize {
        self.doc_freq.len()
    }

    /// Forget all accumulated document frequencies and cached idf values
    pub fn clear(&mut self) {
        self.doc_freq.clear();
        self.idf_cache.clear();
    }
}
