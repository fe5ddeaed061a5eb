//! Graph analytics over a snapshot
//!
//! The algorithms themselves live in the `nexus-graph-algorithms` crate.
//! This module provides the adapter layer: projecting a snapshot onto a dense
//! view and mapping results back onto node ids.

pub mod centrality;
pub mod community;
pub mod index;

pub use centrality::{
    compute_centrality, select_key_nodes, CentralityConfig, CentralityScores, KeyNodeConfig,
};
pub use community::{community_palette_index, detect_communities, CommunityPartition};
pub use index::GraphIndex;

// Re-export algorithm primitives
pub use nexus_graph_algorithms::{
    clustering_coefficients, connected_components, gini_coefficient, label_propagation,
    page_rank, ComponentsResult, GraphView, LabelPropagationConfig, PageRankConfig,
};

use crate::graph::NodeId;
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Communities, centrality and key nodes of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphAnalysis {
    pub communities: CommunityPartition,
    /// Composite centrality in [0, 1] per node, in snapshot order
    pub centrality: IndexMap<NodeId, f64>,
    /// Nodes at or above the key-node threshold, highest first
    pub key_nodes: Vec<NodeId>,
}

impl GraphAnalysis {
    pub fn community_count(&self) -> usize {
        self.communities.community_count
    }

    pub fn centrality_of(&self, id: &NodeId) -> Option<f64> {
        self.centrality.get(id).copied()
    }

    pub fn is_key_node(&self, id: &NodeId) -> bool {
        self.key_nodes.contains(id)
    }

    /// Node ids grouped by community, for reporting
    pub fn community_members(&self) -> BTreeMap<usize, Vec<NodeId>> {
        self.communities.members()
    }
}

/// Run community detection, centrality and key-node selection
pub fn analyze_graph<R: Rng + ?Sized>(
    index: &GraphIndex,
    propagation: &LabelPropagationConfig,
    centrality: &CentralityConfig,
    key_nodes: &KeyNodeConfig,
    rng: &mut R,
) -> GraphAnalysis {
    if index.is_empty() {
        return GraphAnalysis::default();
    }

    let communities = detect_communities(index, propagation, rng);
    let scores = compute_centrality(index, centrality);
    let key_nodes = select_key_nodes(index, &scores.composite, key_nodes);

    let centrality = index
        .index_to_node
        .iter()
        .cloned()
        .zip(scores.composite)
        .collect();

    GraphAnalysis {
        communities,
        centrality,
        key_nodes,
    }
}
