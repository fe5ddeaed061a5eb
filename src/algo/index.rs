//! Graph index: projection of a snapshot onto a dense undirected view
//!
//! Maps caller-assigned `NodeId`s to dense indices (0..N) so the algorithms
//! crate can iterate over plain vectors.

use crate::graph::{Connection, IntelNode, NodeCategory, NodeId};
use nexus_graph_algorithms::GraphView;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Undirected adjacency over the nodes of a snapshot
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    /// Dense topology
    pub view: GraphView,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,
    /// Category of each indexed node
    pub categories: Vec<NodeCategory>,
    /// Connections skipped because an endpoint is not in the snapshot
    pub dangling_connections: usize,
}

impl GraphIndex {
    /// Build the index from a node and connection list.
    ///
    /// Every node id becomes a key even without connections. When the same id
    /// appears twice the first node wins. Connections with an unknown endpoint
    /// contribute nothing; parallel connections collapse. A self-loop makes the
    /// node its own neighbor once, so it counts toward degree.
    pub fn build(nodes: &[IntelNode], connections: &[Connection]) -> Self {
        // 1. Build index mappings
        let mut index_to_node = Vec::with_capacity(nodes.len());
        let mut node_to_index =
            FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        let mut categories = Vec::with_capacity(nodes.len());

        for node in nodes {
            if node_to_index.contains_key(&node.id) {
                warn!("Duplicate node id {} ignored by graph index", node.id);
                continue;
            }
            node_to_index.insert(node.id.clone(), index_to_node.len());
            index_to_node.push(node.id.clone());
            categories.push(node.category);
        }

        // 2. Build adjacency
        let mut view = GraphView::with_nodes(index_to_node.len());
        let mut dangling_connections = 0;

        for conn in connections {
            match (
                node_to_index.get(&conn.source_id),
                node_to_index.get(&conn.target_id),
            ) {
                (Some(&u), Some(&v)) => {
                    view.add_edge(u, v);
                }
                _ => dangling_connections += 1,
            }
        }

        if dangling_connections > 0 {
            warn!(
                "{} connection(s) reference unknown nodes and were skipped",
                dangling_connections
            );
        }
        debug!(
            "Graph index built: {} nodes, {} distinct edges",
            view.node_count,
            view.edge_count()
        );

        Self {
            view,
            index_to_node,
            node_to_index,
            categories,
            dangling_connections,
        }
    }

    pub fn node_count(&self) -> usize {
        self.view.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.view.node_count == 0
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.node_to_index.get(id).copied()
    }

    /// Degree of a node (0 for unknown ids)
    pub fn degree(&self, id: &NodeId) -> usize {
        self.index_of(id).map(|idx| self.view.degree(idx)).unwrap_or(0)
    }

    /// Neighbor ids of a node, in first-connected order
    pub fn neighbors<'a>(&'a self, id: &NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        let neighbors: &[usize] = match self.index_of(id) {
            Some(idx) => self.view.neighbors(idx),
            None => &[],
        };
        neighbors.iter().map(move |&n| &self.index_to_node[n])
    }

    /// Categories of a node's neighbors, in first-connected order (may repeat)
    pub fn neighbor_categories<'a>(
        &'a self,
        id: &NodeId,
    ) -> impl Iterator<Item = NodeCategory> + 'a {
        let neighbors: &[usize] = match self.index_of(id) {
            Some(idx) => self.view.neighbors(idx),
            None => &[],
        };
        neighbors.iter().map(move |&n| self.categories[n])
    }

    /// Adjacency keyed by node id
    pub fn adjacency(&self) -> HashMap<NodeId, Vec<NodeId>> {
        self.index_to_node
            .iter()
            .enumerate()
            .map(|(idx, id)| {
                let neighbors = self
                    .view
                    .neighbors(idx)
                    .iter()
                    .map(|&n| self.index_to_node[n].clone())
                    .collect();
                (id.clone(), neighbors)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, category: NodeCategory) -> IntelNode {
        IntelNode::new(id, category)
    }

    #[test]
    fn test_index_projection() {
        let nodes = vec![
            node("a", NodeCategory::Entity),
            node("b", NodeCategory::Email),
            node("c", NodeCategory::Entity),
        ];
        let connections = vec![
            Connection::new("e1", "a", "b"),
            Connection::new("e2", "b", "c"),
        ];

        let index = GraphIndex::build(&nodes, &connections);

        assert_eq!(index.node_count(), 3);
        assert_eq!(index.degree(&NodeId::new("b")), 2);

        let neighbors: Vec<&str> = index
            .neighbors(&NodeId::new("b"))
            .map(NodeId::as_str)
            .collect();
        assert_eq!(neighbors, vec!["a", "c"]);

        let categories: Vec<NodeCategory> =
            index.neighbor_categories(&NodeId::new("a")).collect();
        assert_eq!(categories, vec![NodeCategory::Email]);
    }

    #[test]
    fn test_isolated_nodes_are_keys() {
        let nodes = vec![node("a", NodeCategory::Entity), node("b", NodeCategory::Entity)];
        let index = GraphIndex::build(&nodes, &[]);

        let adjacency = index.adjacency();
        assert_eq!(adjacency.len(), 2);
        assert!(adjacency[&NodeId::new("a")].is_empty());
    }

    #[test]
    fn test_dangling_and_parallel_connections() {
        let nodes = vec![node("a", NodeCategory::Entity), node("b", NodeCategory::Entity)];
        let connections = vec![
            Connection::new("e1", "a", "b"),
            Connection::new("e2", "b", "a"),
            Connection::new("e3", "a", "ghost"),
            Connection::new("e4", "ghost", "phantom"),
            Connection::new("e5", "a", "a"),
        ];

        let index = GraphIndex::build(&nodes, &connections);

        // a: b plus itself
        assert_eq!(index.degree(&NodeId::new("a")), 2);
        assert_eq!(index.degree(&NodeId::new("b")), 1);
        assert_eq!(index.view.edge_count(), 2);
        assert_eq!(index.dangling_connections, 2);
        assert_eq!(index.degree(&NodeId::new("ghost")), 0);
        assert_eq!(index.neighbors(&NodeId::new("ghost")).count(), 0);
    }

    #[test]
    fn test_duplicate_node_ids_first_wins() {
        let nodes = vec![node("a", NodeCategory::Entity), node("a", NodeCategory::Email)];
        let index = GraphIndex::build(&nodes, &[]);

        assert_eq!(index.node_count(), 1);
        assert_eq!(index.categories[0], NodeCategory::Entity);
    }
}
