use num::Num;

use crate::vectorizer::tfidf::TermVector;

/// Dot product
/// d(a, b) = Σ(a_t * b_t) over terms present in both vectors
pub fn dot<N>(a: &TermVector<N>, b: &TermVector<N>) -> f64
where
    N: Num + Copy + Into<f64>,
{
    // walk the shorter vector, probe the longer one
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    short
        .iter()
        .filter_map(|(term, wa)| {
            long.get(term).map(|wb| Into::<f64>::into(wa) * Into::<f64>::into(wb))
        })
        // an empty f64 `sum()` is -0.0; disjoint vectors must give +0.0
        .fold(0.0, |acc, w| acc + w)
}

/// Euclidean norm
/// ||a|| = sqrt(Σ(a_t^2))
pub fn magnitude<N>(vec: &TermVector<N>) -> f64
where
    N: Num + Copy + Into<f64>,
{
    vec.values()
        .map(|w| {
            let w: f64 = w.into();
            w * w
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity
/// cosθ = A・B / (|A||B|)
///
/// Returns `0.0` when either vector has zero magnitude. With non-negative
/// weights the result lies in `[0, 1]`; rounding above `1.0` is clamped.
pub fn cosine_similarity<N>(a: &TermVector<N>, b: &TermVector<N>) -> f64
where
    N: Num + Copy + Into<f64>,
{
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (norm_a * norm_b)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec(entries: &[(&str, f64)]) -> TermVector<f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = vec(&[("rust", 0.3), ("tokio", 0.1), ("serde", 0.6)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_vectors_have_similarity_zero() {
        let a = vec(&[("rust", 1.0)]);
        let b = vec(&[("python", 1.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn disjoint_similarity_is_positive_zero() {
        let a = vec(&[("rust", 1.0)]);
        let b = vec(&[("python", 1.0)]);
        assert!(!dot(&a, &b).is_sign_negative());
        let sim = cosine_similarity(&a, &b);
        assert!(!sim.is_sign_negative());
        assert_eq!(format!("{sim:.6}"), "0.000000");
    }

    #[test]
    fn zero_magnitude_short_circuits() {
        let empty = TermVector::<f64>::new();
        let zeros = vec(&[("rust", 0.0)]);
        let a = vec(&[("rust", 1.0)]);
        assert_eq!(cosine_similarity(&empty, &a), 0.0);
        assert_eq!(cosine_similarity(&a, &zeros), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn partial_overlap_matches_hand_computation() {
        let a = vec(&[("x", 1.0), ("y", 1.0)]);
        let b = vec(&[("y", 1.0), ("z", 1.0)]);
        // 1 / (sqrt2 * sqrt2)
        assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-12);
        assert_eq!(dot(&a, &b), dot(&b, &a));
    }

    #[test]
    fn scale_does_not_change_similarity() {
        let a = vec(&[("x", 1.0), ("y", 2.0)]);
        let b = vec(&[("x", 10.0), ("y", 20.0)]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn works_on_single_precision_weights() {
        let a: TermVector<f32> = [("x", 3.0f32), ("y", 4.0)].into_iter().collect();
        assert!((magnitude(&a) - 5.0).abs() < 1e-6);
    }
}
