//! Community partition of a snapshot
//!
//! Runs label propagation over the graph index and maps the dense labels
//! back onto node ids.

use super::index::GraphIndex;
use crate::graph::NodeId;
use indexmap::IndexMap;
use nexus_graph_algorithms::{label_propagation, LabelPropagationConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Community assignment for every indexed node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPartition {
    /// Node id to community id, contiguous from 0, in snapshot order
    pub assignments: IndexMap<NodeId, usize>,
    /// Number of distinct communities
    pub community_count: usize,
    /// Label propagation passes executed
    pub iterations: usize,
    /// Whether propagation settled before the iteration cap
    pub converged: bool,
}

impl CommunityPartition {
    pub fn community_of(&self, id: &NodeId) -> Option<usize> {
        self.assignments.get(id).copied()
    }

    /// Members of each community, ordered by community id
    pub fn members(&self) -> BTreeMap<usize, Vec<NodeId>> {
        let mut groups: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
        for (id, &community) in &self.assignments {
            groups.entry(community).or_default().push(id.clone());
        }
        groups
    }
}

/// Palette slot for a community id, as used by the rendering layer
pub fn community_palette_index(community: usize, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    community % palette_len
}

/// Partition the indexed nodes into communities
pub fn detect_communities<R: Rng + ?Sized>(
    index: &GraphIndex,
    config: &LabelPropagationConfig,
    rng: &mut R,
) -> CommunityPartition {
    let result = label_propagation(&index.view, config, rng);

    debug!(
        "Label propagation finished after {} pass(es), converged: {}, communities: {}",
        result.iterations, result.converged, result.community_count
    );

    let assignments = index
        .index_to_node
        .iter()
        .cloned()
        .zip(result.labels)
        .collect();

    CommunityPartition {
        assignments,
        community_count: result.community_count,
        iterations: result.iterations,
        converged: result.converged,
    }
}
