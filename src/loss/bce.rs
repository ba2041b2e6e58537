/// Binary cross-entropy between {0, 1} labels and predicted probabilities.
pub struct BceLoss;

impl BceLoss {
    /// Scalar BCE: -Σ (y·ln(p) + (1-y)·ln(1-p))
    ///
    /// `predicted` — probabilities, expected in the open interval (0, 1)
    /// `expected`  — binary labels, 0.0 or 1.0
    ///
    /// The logs are not clamped: p = 0 or p = 1 yields an infinite term, and
    /// y = p = 1 hits 0·ln(0) = NaN; either anomaly propagates into the
    /// result. Pairing stops at the shorter slice when lengths differ.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| -(y * p.ln() + (1.0 - y) * (1.0 - p).ln()))
            .sum()
    }

    /// Per-output gradient: (p - y) / (p · (1 - p)), unclamped like `loss`.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y) / (p * (1.0 - p)))
            .collect()
    }
}
