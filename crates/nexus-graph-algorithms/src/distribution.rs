//! Distribution statistics over per-node measures

/// Arithmetic mean (0 for an empty slice)
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Gini coefficient of a set of non-negative values.
///
/// Uses the rank-weighted form over the ascending sort:
/// `sum((2(i+1) - n - 1) * x_i) / (n^2 * mean)`.
/// Empty input and an all-zero distribution both yield 0.
pub fn gini_coefficient(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len() as f64;
    let avg = mean(&sorted);
    if avg == 0.0 {
        return 0.0;
    }

    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (2.0 * (i as f64 + 1.0) - n - 1.0) * x)
        .sum();

    weighted / (n * n * avg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gini_uniform_is_zero() {
        assert_eq!(gini_coefficient(&[3.0, 3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_gini_degenerate() {
        assert_eq!(gini_coefficient(&[]), 0.0);
        assert_eq!(gini_coefficient(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_gini_concentrated() {
        // One node holds everything: (n - 1) / n
        let gini = gini_coefficient(&[0.0, 0.0, 0.0, 4.0]);
        assert!((gini - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_gini_order_independent() {
        let a = gini_coefficient(&[1.0, 2.0, 1.0]);
        let b = gini_coefficient(&[2.0, 1.0, 1.0]);
        assert!((a - b).abs() < 1e-12);
        assert!((a - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }
}
