//! Graph topology analysis algorithms
//!
//! Local clustering coefficients and triangle counting.

use super::common::GraphView;
use rayon::prelude::*;

/// Local clustering coefficient of every node.
///
/// For a node with `k >= 2` neighbors this is the number of adjacent neighbor
/// pairs divided by `k * (k - 1) / 2`; nodes with fewer than two neighbors
/// score 0.
pub fn clustering_coefficients(view: &GraphView) -> Vec<f64> {
    (0..view.node_count)
        .into_par_iter()
        .map(|idx| local_clustering(view, idx))
        .collect()
}

fn local_clustering(view: &GraphView, idx: usize) -> f64 {
    let neighbors = view.neighbors(idx);
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }

    let mut linked_pairs = 0usize;
    for (i, &a) in neighbors.iter().enumerate() {
        for &b in &neighbors[i + 1..] {
            if view.has_edge(a, b) {
                linked_pairs += 1;
            }
        }
    }

    let possible_pairs = (k * (k - 1)) as f64 / 2.0;
    linked_pairs as f64 / possible_pairs
}

/// Triangle Counting
///
/// Returns the number of triangles in the graph, each counted once.
pub fn count_triangles(view: &GraphView) -> usize {
    let mut triangle_count = 0;

    // Only consider ordered triples u < v < w to avoid overcounting
    for u in 0..view.node_count {
        for &v in view.neighbors(u) {
            if v <= u {
                continue;
            }
            for &w in view.neighbors(v) {
                if w <= v {
                    continue;
                }
                if view.has_edge(u, w) {
                    triangle_count += 1;
                }
            }
        }
    }

    triangle_count
}
