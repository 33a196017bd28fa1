use indexmap::IndexMap;
use num::Num;

/// TF-IDF weighting formulas.
///
/// The vectorizer and the corpus are generic over this trait so the weighting
/// can be swapped without touching tokenization or accumulation.
pub trait TFIDFEngine {
    /// Frequency of a term seen `count` times among `total` term occurrences
    fn tf(count: u64, total: u64) -> f64;
    /// Inverse document frequency of a term found in `doc_freq` of `doc_num` documents
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
}

/// Default engine
/// tf  = count / total
/// idf = ln(doc_num / (doc_freq + 1)) + 1
///
/// An empty corpus (`doc_num == 0`) gives every term idf `1.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        if doc_num == 0 {
            return 1.0;
        }
        (doc_num as f64 / (doc_freq as f64 + 1.0)).ln() + 1.0
    }
}

/// Sparse term-keyed vector.
/// Used for both term-frequency and TF-IDF vectors; keys keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector<N = f64>
where
    N: Num + Copy,
{
    weights: IndexMap<String, N>,
}

impl<N> Default for TermVector<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy,
{
    pub fn new() -> Self {
        Self { weights: IndexMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { weights: IndexMap::with_capacity(capacity) }
    }

    /// Add `value` to the weight of `term`, inserting it at zero first if absent
    #[inline]
    pub fn add(&mut self, term: &str, value: N) -> &mut Self {
        if let Some(weight) = self.weights.get_mut(term) {
            *weight = *weight + value;
        } else {
            self.weights.insert(term.to_string(), value);
        }
        self
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.weights.get(term).copied()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = N> + '_ {
        self.weights.values().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<K, N> FromIterator<(K, N)> for TermVector<N>
where
    K: AsRef<str>,
    N: Num + Copy,
{
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        let mut vec = TermVector::new();
        for (term, value) in iter {
            vec.add(term.as_ref(), value);
        }
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_idf_of_single_document_corpus() {
        // a term first seen in a one-document call has df = 1
        let idf = DefaultTFIDFEngine::idf(1, 1);
        assert!((idf - (1.0 - 2f64.ln())).abs() < 1e-12);
        // unseen term in a one-document call
        assert_eq!(DefaultTFIDFEngine::idf(1, 0), 1.0);
        assert_eq!(DefaultTFIDFEngine::idf(0, 0), 1.0);
    }

    #[test]
    fn tf_guards_empty_documents() {
        assert_eq!(DefaultTFIDFEngine::tf(3, 0), 0.0);
        assert_eq!(DefaultTFIDFEngine::tf(1, 4), 0.25);
    }

    #[test]
    fn collecting_duplicate_terms_sums_weights() {
        let vec: TermVector<f64> = [("a", 0.5), ("b", 1.0), ("a", 0.25)].into_iter().collect();
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.get("a"), Some(0.75));
        let order: Vec<&str> = vec.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn integer_weights_are_supported() {
        let vec: TermVector<u32> = [("x", 2u32), ("x", 3)].into_iter().collect();
        assert_eq!(vec.get("x"), Some(5));
    }
}
