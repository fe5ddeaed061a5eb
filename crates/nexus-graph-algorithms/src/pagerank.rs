//! PageRank and degree centrality
//!
//! Both measures treat the graph as undirected: every neighbor links to a
//! node and every node spreads its score evenly over its neighbors.

use super::common::GraphView;
use rayon::prelude::*;

/// PageRank configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of iterations; always run to completion, no convergence check
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 20,
        }
    }
}

/// Calculate raw (unnormalized) PageRank scores, indexed like the view.
///
/// Scores start at `1/N`; each iteration sets
/// `score(v) = (1 - d)/N + d * sum(score(u) / degree(u))` over neighbors `u`.
/// An isolated node therefore stays at the shared baseline `(1 - d)/N`.
pub fn page_rank(view: &GraphView, config: &PageRankConfig) -> Vec<f64> {
    let n = view.node_count;

    if n == 0 {
        return Vec::new();
    }

    let n_f = n as f64;
    let d = config.damping_factor;
    let base_score = (1.0 - d) / n_f;

    let mut scores = vec![1.0 / n_f; n];

    for _ in 0..config.iterations {
        let next_scores: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|i| {
                let sum_incoming: f64 = view
                    .neighbors(i)
                    .iter()
                    .map(|&source_idx| scores[source_idx] / view.degree(source_idx) as f64)
                    .sum();
                base_score + d * sum_incoming
            })
            .collect();

        scores = next_scores;
    }

    scores
}

/// Divide every value by the maximum, with the denominator floored at `floor`
pub fn normalize_by_max(values: &[f64], floor: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(floor, f64::max);
    values.iter().map(|v| v / max).collect()
}

/// Degree centrality: degree over the maximum degree (denominator floored at 1)
pub fn degree_centrality(view: &GraphView) -> Vec<f64> {
    let max_degree = view.max_degree().max(1) as f64;
    (0..view.node_count)
        .map(|i| view.degree(i) as f64 / max_degree)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagerank_star() {
        // Center 0 connected to leaves 1, 2, 3
        let view = GraphView::from_edges(4, vec![(0, 1), (0, 2), (0, 3)]);
        let scores = page_rank(&view, &PageRankConfig::default());

        assert!(scores[0] > scores[1]);
        assert!((scores[1] - scores[2]).abs() < 1e-12);
        assert!((scores[2] - scores[3]).abs() < 1e-12);
    }

    #[test]
    fn test_pagerank_isolated_node_stays_at_baseline() {
        let view = GraphView::from_edges(3, vec![(0, 1)]);
        let config = PageRankConfig::default();
        let scores = page_rank(&view, &config);

        let baseline = (1.0 - config.damping_factor) / 3.0;
        assert!((scores[2] - baseline).abs() < 1e-12);
        assert!(scores[0] > baseline);
    }

    #[test]
    fn test_pagerank_empty() {
        let view = GraphView::default();
        assert!(page_rank(&view, &PageRankConfig::default()).is_empty());
    }

    #[test]
    fn test_normalize_by_max() {
        let normalized = normalize_by_max(&[0.2, 0.4, 0.1], 0.001);
        assert!((normalized[0] - 0.5).abs() < 1e-12);
        assert_eq!(normalized[1], 1.0);
        assert!((normalized[2] - 0.25).abs() < 1e-12);

        let zeros = normalize_by_max(&[0.0, 0.0], 0.001);
        assert_eq!(zeros, vec![0.0, 0.0]);
    }

    #[test]
    fn test_degree_centrality() {
        let view = GraphView::from_edges(4, vec![(0, 1), (0, 2)]);
        let centrality = degree_centrality(&view);
        assert_eq!(centrality, vec![1.0, 0.5, 0.5, 0.0]);

        let isolated = GraphView::with_nodes(2);
        assert_eq!(degree_centrality(&isolated), vec![0.0, 0.0]);
    }
}
