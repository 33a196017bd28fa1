use serde::{Deserialize, Serialize};

/// `true` when `score` is strictly above `threshold`.
/// A score equal to the threshold is not a match; a NaN score never is.
#[inline]
pub fn classify(score: f64, threshold: f64) -> bool {
    score > threshold
}

/// Fixed cutoff turning scores into match decisions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdClassifier {
    pub threshold: f64,
}

impl ThresholdClassifier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[inline]
    pub fn classify(&self, score: f64) -> bool {
        classify(score, self.threshold)
    }

    pub fn classify_all(&self, scores: &[f64]) -> Vec<bool> {
        scores.iter().map(|&score| self.classify(score)).collect()
    }

    /// Keep only the scored items that classify as matches, in input order
    pub fn accepts<T, I>(&self, scored: I) -> impl Iterator<Item = (T, f64)>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let threshold = self.threshold;
        scored
            .into_iter()
            .filter(move |(_, score)| classify(*score, threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!classify(0.5, 0.5));
        assert!(classify(0.500001, 0.5));
        assert!(!classify(0.0, 0.0));
        assert!(!classify(f64::NAN, 0.1));
    }

    #[test]
    fn classifier_applies_its_cutoff() {
        let classifier = ThresholdClassifier::new(0.3);
        assert_eq!(classifier.classify_all(&[0.1, 0.3, 0.31, 0.9]), vec![false, false, true, true]);
    }

    #[test]
    fn accepts_filters_in_order() {
        let classifier = ThresholdClassifier::new(0.4);
        let kept: Vec<&str> = classifier
            .accepts([("a", 0.9), ("b", 0.2), ("c", 0.41), ("d", 0.4)])
            .map(|(label, _)| label)
            .collect();
        assert_eq!(kept, vec!["a", "c"]);
    }
}
