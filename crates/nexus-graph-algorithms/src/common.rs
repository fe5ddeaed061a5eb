//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of an undirected topology for algorithm execution.

use rustc_hash::FxHashSet;

/// A dense, integer-indexed view of an undirected graph.
///
/// Nodes are addressed by their dense index (0..N). Every edge is stored in
/// both directions and parallel edges collapse to a single adjacency, so
/// `neighbors(i)` is a set in insertion order. A self-loop makes a node its
/// own neighbor, counted once.
#[derive(Debug, Clone, Default)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Neighbor indices per node, in first-seen order
    pub adjacency: Vec<Vec<usize>>,
    /// Membership sets aligned with `adjacency` for O(1) edge lookups
    neighbor_sets: Vec<FxHashSet<usize>>,
}

impl GraphView {
    /// Create a view with `node_count` isolated nodes
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            adjacency: vec![Vec::new(); node_count],
            neighbor_sets: vec![FxHashSet::default(); node_count],
        }
    }

    /// Build a view from index pairs. Pairs that reference an index outside
    /// `0..node_count` are skipped.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut view = Self::with_nodes(node_count);
        for (u, v) in edges {
            view.add_edge(u, v);
        }
        view
    }

    /// Add an undirected edge. Returns false when the edge was ignored
    /// (out of range or already present).
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u >= self.node_count || v >= self.node_count {
            return false;
        }
        if !self.neighbor_sets[u].insert(v) {
            return false;
        }
        self.adjacency[u].push(v);
        if u != v {
            self.neighbor_sets[v].insert(u);
            self.adjacency[v].push(u);
        }
        true
    }

    /// Number of distinct neighbors of a node
    pub fn degree(&self, idx: usize) -> usize {
        self.adjacency[idx].len()
    }

    /// Neighbors of a node in insertion order
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    /// Check whether `u` and `v` are adjacent
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbor_sets
            .get(u)
            .map(|set| set.contains(&v))
            .unwrap_or(false)
    }

    /// Number of distinct undirected edges, self-loops included
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        (entries + self.self_loop_count()) / 2
    }

    /// Number of nodes adjacent to themselves
    pub fn self_loop_count(&self) -> usize {
        (0..self.node_count).filter(|&i| self.has_edge(i, i)).count()
    }

    /// Largest degree in the view (0 for an empty view)
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Degree of every node
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }
}
