/// Softmax is a vector-valued activation: it maps a slice of real-valued
/// scores to a probability distribution over the same indices.
///
///   R[i] = exp(L[i]) / Σ_j exp(L[j])
///
/// Every output is strictly positive and the outputs sum to 1.0 (up to f64
/// rounding). An empty slice yields an empty Vec; no division takes place.
///
/// No max-subtraction is applied, so a score large enough to overflow `exp`
/// turns the denominator infinite and the affected quotients degrade to
/// NaN / 0.0.
pub fn softmax(values: &[f64]) -> Vec<f64> {
    let denominator: f64 = values.iter().map(|v| v.exp()).sum();
    values.iter().map(|v| v.exp() / denominator).collect()
}
