//! Structural metrics of the graph index
//!
//! Per-node degree, clustering coefficient and a betweenness proxy, plus
//! graph-wide connectivity, average degree and degree balance.

use crate::algo::GraphIndex;
use nexus_graph_algorithms::{
    clustering_coefficients, connected_components, gini_coefficient, mean,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structural metrics indexed by dense node index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralMetrics {
    pub degrees: Vec<usize>,
    pub clustering: Vec<f64>,
    /// `degree / max_degree`. Not true betweenness centrality: shortest
    /// paths are never enumerated.
    pub betweenness: Vec<f64>,
    /// Largest connected component over total node count
    pub global_connectivity: f64,
    pub average_degree: f64,
    /// `1 - gini(degrees)`
    pub structural_balance: f64,
}

impl StructuralMetrics {
    pub fn compute(index: &GraphIndex) -> Self {
        let view = &index.view;
        let n = view.node_count;
        if n == 0 {
            return Self::default();
        }

        let degrees = view.degrees();
        let max_degree = view.max_degree().max(1) as f64;
        let betweenness = degrees.iter().map(|&d| d as f64 / max_degree).collect();
        let clustering = clustering_coefficients(view);

        let components = connected_components(view);
        let global_connectivity = components.largest() as f64 / n as f64;

        let degree_values: Vec<f64> = degrees.iter().map(|&d| d as f64).collect();
        let average_degree = mean(&degree_values);
        let structural_balance = 1.0 - gini_coefficient(&degree_values);

        debug!(
            "Structural metrics: {} component(s), connectivity {:.3}, average degree {:.3}",
            components.count(),
            global_connectivity,
            average_degree
        );

        Self {
            degrees,
            clustering,
            betweenness,
            global_connectivity,
            average_degree,
            structural_balance,
        }
    }

    pub fn degree(&self, idx: usize) -> usize {
        self.degrees.get(idx).copied().unwrap_or(0)
    }

    pub fn clustering_of(&self, idx: usize) -> f64 {
        self.clustering.get(idx).copied().unwrap_or(0.0)
    }

    pub fn betweenness_of(&self, idx: usize) -> f64 {
        self.betweenness.get(idx).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Connection, IntelNode, NodeCategory};

    fn index(ids: &[&str], edges: &[(&str, &str)]) -> GraphIndex {
        let nodes: Vec<IntelNode> = ids
            .iter()
            .map(|id| IntelNode::new(*id, NodeCategory::Entity))
            .collect();
        let connections: Vec<Connection> = edges
            .iter()
            .enumerate()
            .map(|(i, (s, t))| Connection::new(format!("e{}", i), *s, *t))
            .collect();
        GraphIndex::build(&nodes, &connections)
    }

    #[test]
    fn test_empty_graph() {
        let metrics = StructuralMetrics::compute(&GraphIndex::default());
        assert_eq!(metrics, StructuralMetrics::default());
        assert_eq!(metrics.degree(0), 0);
    }

    #[test]
    fn test_two_disjoint_pairs() {
        let metrics = StructuralMetrics::compute(&index(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("c", "d")],
        ));

        assert_eq!(metrics.global_connectivity, 0.5);
        assert_eq!(metrics.average_degree, 1.0);
        assert_eq!(metrics.structural_balance, 1.0);
        assert!(metrics.betweenness.iter().all(|&b| b == 1.0));
    }

    #[test]
    fn test_chain() {
        let metrics = StructuralMetrics::compute(&index(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));

        assert_eq!(metrics.degrees, vec![1, 2, 1]);
        assert_eq!(metrics.betweenness, vec![0.5, 1.0, 0.5]);
        assert_eq!(metrics.clustering, vec![0.0, 0.0, 0.0]);
        assert_eq!(metrics.global_connectivity, 1.0);
        assert!((metrics.average_degree - 4.0 / 3.0).abs() < 1e-12);
        assert!(metrics.structural_balance < 1.0);
    }

    #[test]
    fn test_triangle_with_isolated_node() {
        let metrics = StructuralMetrics::compute(&index(
            &["a", "b", "c", "z"],
            &[("a", "b"), ("b", "c"), ("c", "a")],
        ));

        assert_eq!(metrics.clustering_of(0), 1.0);
        assert_eq!(metrics.clustering_of(3), 0.0);
        assert_eq!(metrics.degree(3), 0);
        assert_eq!(metrics.betweenness_of(3), 0.0);
        assert_eq!(metrics.global_connectivity, 0.75);
    }

    #[test]
    fn test_all_isolated() {
        let metrics = StructuralMetrics::compute(&index(&["a", "b"], &[]));
        assert_eq!(metrics.average_degree, 0.0);
        assert_eq!(metrics.structural_balance, 1.0);
        assert_eq!(metrics.global_connectivity, 0.5);
        assert_eq!(metrics.betweenness, vec![0.0, 0.0]);
    }
}
