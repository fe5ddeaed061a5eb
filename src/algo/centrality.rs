//! Composite centrality and key-node selection
//!
//! Composite centrality blends degree centrality with a max-normalized
//! PageRank. Key nodes are picked with a mixed absolute/percentile cut.

use super::index::GraphIndex;
use crate::graph::NodeId;
use nexus_graph_algorithms::{degree_centrality, normalize_by_max, page_rank, PageRankConfig};
use serde::{Deserialize, Serialize};

/// Centrality configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralityConfig {
    /// PageRank parameters
    pub page_rank: PageRankConfig,
    /// Weight of degree centrality in the composite
    pub degree_weight: f64,
    /// Weight of normalized PageRank in the composite
    pub page_rank_weight: f64,
    /// Lower bound on the PageRank normalization denominator
    pub normalization_floor: f64,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            page_rank: PageRankConfig::default(),
            degree_weight: 0.4,
            page_rank_weight: 0.6,
            normalization_floor: 0.001,
        }
    }
}

/// Key-node selection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyNodeConfig {
    /// Score a node must reach regardless of the distribution
    pub absolute_floor: f64,
    /// Position in the descending ranking used as the relative cut
    pub percentile: f64,
}

impl Default for KeyNodeConfig {
    fn default() -> Self {
        Self {
            absolute_floor: 0.5,
            percentile: 0.2,
        }
    }
}

/// Per-node centrality measures, indexed like the graph index
#[derive(Debug, Clone, Default)]
pub struct CentralityScores {
    /// Degree over maximum degree
    pub degree: Vec<f64>,
    /// PageRank before normalization
    pub raw_page_rank: Vec<f64>,
    /// PageRank divided by its maximum
    pub page_rank: Vec<f64>,
    /// Weighted blend of degree and normalized PageRank
    pub composite: Vec<f64>,
}

/// Compute degree, PageRank and composite centrality
pub fn compute_centrality(index: &GraphIndex, config: &CentralityConfig) -> CentralityScores {
    let degree = degree_centrality(&index.view);
    let raw_page_rank = page_rank(&index.view, &config.page_rank);
    let page_rank = normalize_by_max(&raw_page_rank, config.normalization_floor);

    let composite = degree
        .iter()
        .zip(&page_rank)
        .map(|(dc, pr)| dc * config.degree_weight + pr * config.page_rank_weight)
        .collect();

    CentralityScores {
        degree,
        raw_page_rank,
        page_rank,
        composite,
    }
}

/// Select key nodes from composite scores.
///
/// Ranks nodes by descending score, reads the score at position
/// `floor(percentile * N)` and keeps every node scoring at least
/// `max(absolute_floor, that score)`. Returned in descending score order.
pub fn select_key_nodes(
    index: &GraphIndex,
    composite: &[f64],
    config: &KeyNodeConfig,
) -> Vec<NodeId> {
    if composite.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<usize> = (0..composite.len()).collect();
    ranked.sort_by(|&a, &b| composite[b].total_cmp(&composite[a]));

    let cut = ((composite.len() as f64 * config.percentile).floor() as usize)
        .min(composite.len() - 1);
    let threshold = config.absolute_floor.max(composite[ranked[cut]]);

    ranked
        .into_iter()
        .take_while(|&idx| composite[idx] >= threshold)
        .map(|idx| index.index_to_node[idx].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Connection, IntelNode, NodeCategory};

    fn chain() -> GraphIndex {
        let nodes = vec![
            IntelNode::new("a", NodeCategory::Note),
            IntelNode::new("b", NodeCategory::Note),
            IntelNode::new("c", NodeCategory::Note),
        ];
        let connections = vec![Connection::new("e1", "a", "b"), Connection::new("e2", "b", "c")];
        GraphIndex::build(&nodes, &connections)
    }

    #[test]
    fn test_chain_center_dominates() {
        let index = chain();
        let scores = compute_centrality(&index, &CentralityConfig::default());

        assert!(scores.composite[1] > scores.composite[0]);
        assert!(scores.composite[1] > scores.composite[2]);
        assert!((scores.composite[0] - scores.composite[2]).abs() < 1e-12);
        assert!((scores.composite[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scores_bounded() {
        let index = chain();
        let scores = compute_centrality(&index, &CentralityConfig::default());
        for value in scores.composite.iter().chain(&scores.page_rank).chain(&scores.degree) {
            assert!((0.0..=1.0 + 1e-12).contains(value));
        }
    }

    #[test]
    fn test_key_nodes_threshold() {
        let index = chain();
        let scores = compute_centrality(&index, &CentralityConfig::default());
        let key_nodes = select_key_nodes(&index, &scores.composite, &KeyNodeConfig::default());

        // N = 3 -> cut index 0, threshold = max(0.5, top score)
        assert_eq!(key_nodes, vec![NodeId::new("b")]);
    }

    #[test]
    fn test_key_nodes_absolute_floor() {
        let index = GraphIndex::build(
            &[
                IntelNode::new("a", NodeCategory::Note),
                IntelNode::new("b", NodeCategory::Note),
            ],
            &[],
        );
        // Everything below the absolute floor
        let key_nodes = select_key_nodes(&index, &[0.3, 0.2], &KeyNodeConfig::default());
        assert!(key_nodes.is_empty());

        let empty = select_key_nodes(&GraphIndex::default(), &[], &KeyNodeConfig::default());
        assert!(empty.is_empty());
    }
}
