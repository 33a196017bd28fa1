use std::fmt;

use serde::Serialize;

use crate::error::{MatchError, Result};

/// Counts of predicted against actual labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub true_positive: u64,
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
}

impl ConfusionMatrix {
    /// Tally `actual` against `predicted`, position by position.
    ///
    /// # Errors
    /// [`MatchError::InvalidArgument`] when the slices differ in length.
    pub fn from_labels(actual: &[bool], predicted: &[bool]) -> Result<Self> {
        if actual.len() != predicted.len() {
            return Err(MatchError::invalid_argument(format!(
                "label sequences differ in length: {} actual, {} predicted",
                actual.len(),
                predicted.len()
            )));
        }
        let mut matrix = ConfusionMatrix::default();
        for (&actual, &predicted) in actual.iter().zip(predicted) {
            match (actual, predicted) {
                (true, true) => matrix.true_positive += 1,
                (false, false) => matrix.true_negative += 1,
                (false, true) => matrix.false_positive += 1,
                (true, false) => matrix.false_negative += 1,
            }
        }
        Ok(matrix)
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    pub fn metrics(&self) -> Metrics {
        let accuracy = ratio(self.true_positive + self.true_negative, self.total());
        let precision = ratio(self.true_positive, self.true_positive + self.false_positive);
        let recall = ratio(self.true_positive, self.true_positive + self.false_negative);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };
        Metrics {
            accuracy,
            precision,
            recall,
            f1,
        }
    }
}

#[inline]
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Classification quality, every value in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Accuracy: {:.2}, Precision: {:.2}, Recall: {:.2}, F1 Score: {:.2}",
            self.accuracy, self.precision, self.recall, self.f1
        )
    }
}

/// Accuracy, precision, recall and F1 of `predicted` against ground truth.
/// Zero denominators give `0.0`.
///
/// # Errors
/// [`MatchError::InvalidArgument`] when the slices differ in length.
///
/// # Examples
/// ```
/// use tfidf_matcher::calculate_metrics;
///
/// let metrics = calculate_metrics(&[true, false], &[false, false]).unwrap();
/// assert_eq!(metrics.accuracy, 0.5);
/// assert_eq!(metrics.precision, 0.0);
/// ```
pub fn calculate_metrics(actual: &[bool], predicted: &[bool]) -> Result<Metrics> {
    Ok(ConfusionMatrix::from_labels(actual, predicted)?.metrics())
}
