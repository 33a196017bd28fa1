//! This crate scores how well a candidate profile matches a job advertisement
//! using TF-IDF weighted n-gram vectors and cosine similarity.
pub mod config;
pub mod error;
pub mod profile;
pub mod scenario;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// The stateful vectorizer: every `transform` call adds its documents to a
/// document-frequency table owned by the instance, and each term's first idf
/// is cached for the instance's lifetime.
///
/// Internally, it holds:
/// - The analyzer (phrase dictionary and stop words)
/// - The document-frequency table
/// - The idf cache
///
/// `TFIDFVectorizer<E>` is generic over the TF-IDF calculation engine `E`.
///
/// # Thread Safety
/// `transform` takes `&mut self`. Give each thread its own instance, or use
/// `Corpus` for shared, read-only statistics.
pub use vectorizer::TFIDFVectorizer;

/// Corpus for TF-IDF weighting
/// Holds the number of reference documents and, per term, how many of them
/// contain it. It does not store document text.
///
/// Built once with `Corpus::fit`, it is read-only afterwards, so
/// `Corpus::transform` gives the same vector for the same document no matter
/// what was transformed before.
pub use vectorizer::corpus::Corpus;

/// Text analyzer
/// Lower-cases, splits on non-word characters, drops stop words, builds
/// n-grams, and adds the dictionary phrases found in the text.
pub use vectorizer::analyzer::Analyzer;

/// Term Frequency structure
/// Occurrence counts of each term within one document, plus the total.
///
/// Used as base data for TF (Term Frequency) calculation.
pub use vectorizer::term::TermFrequency;

/// Sparse term-keyed weight vector, used for TF and TF-IDF vectors
pub use vectorizer::tfidf::TermVector;

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug different TF-IDF calculation strategies
/// into `TFIDFVectorizer<E>`, `Corpus` and the matchers.
/// A default implementation, `DefaultTFIDFEngine`, is provided:
/// tf = count / total, idf = ln(N / (df + 1)) + 1.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Cosine similarity of two term vectors, `0.0` when either is all zeros
pub use vectorizer::compare::cosine_similarity;

/// Pairwise matchers
/// - `Matcher`: scores over a stateful `TFIDFVectorizer`; history-dependent
/// - `CorpusMatcher`: scores against fitted unigram and bigram corpora; pure
/// - `MatchScore`: unigram, bigram and averaged score of one pair
pub use vectorizer::evaluate::scoring::{CorpusMatcher, MatchScore, Matcher};

/// Threshold classification
/// A score is a match only when strictly above the threshold.
pub use vectorizer::evaluate::classify::{classify, ThresholdClassifier};

/// Evaluation metrics
/// Accuracy, precision, recall and F1 of predicted labels against ground truth.
pub use vectorizer::evaluate::metrics::{calculate_metrics, ConfusionMatrix, Metrics};

pub use config::MatcherConfig;
pub use error::{MatchError, Result};
