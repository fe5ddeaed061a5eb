//! Community detection algorithms
//!
//! Label propagation for community partitioning and breadth-first
//! connected components for global connectivity.

use super::common::GraphView;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Label propagation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelPropagationConfig {
    /// Upper bound on full passes over the node set
    pub max_iterations: usize,
}

impl Default for LabelPropagationConfig {
    fn default() -> Self {
        Self { max_iterations: 10 }
    }
}

/// Result of label propagation
#[derive(Debug, Clone)]
pub struct LabelPropagationResult {
    /// Community label per node index, contiguous from 0
    pub labels: Vec<usize>,
    /// Number of distinct communities
    pub community_count: usize,
    /// Passes executed before convergence or the iteration cap
    pub iterations: usize,
    /// Whether the last pass made no changes
    pub converged: bool,
}

/// Label Propagation
///
/// Every node starts in its own community (its index). Each pass visits the
/// nodes in a freshly shuffled order and moves every node to the label held by
/// most of its neighbors. Ties go to the label that was seen first while
/// scanning the neighbor list; the node's current label gets no preference.
/// Isolated nodes keep their initial label.
///
/// The result is nondeterministic unless `rng` is seeded by the caller.
pub fn label_propagation<R: Rng + ?Sized>(
    view: &GraphView,
    config: &LabelPropagationConfig,
    rng: &mut R,
) -> LabelPropagationResult {
    let n = view.node_count;
    let mut labels: Vec<usize> = (0..n).collect();
    let mut order: Vec<usize> = (0..n).collect();

    let mut iterations = 0;
    let mut converged = n == 0;

    // label -> slot in `counts`, reused across nodes
    let mut slots: FxHashMap<usize, usize> = FxHashMap::default();
    let mut counts: Vec<(usize, usize)> = Vec::new();

    while iterations < config.max_iterations && !converged {
        iterations += 1;
        let mut changed = false;

        order.shuffle(rng);

        for &node in &order {
            let neighbors = view.neighbors(node);
            if neighbors.is_empty() {
                continue;
            }

            slots.clear();
            counts.clear();
            for &neighbor in neighbors {
                let label = labels[neighbor];
                match slots.get(&label) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        slots.insert(label, counts.len());
                        counts.push((label, 1));
                    }
                }
            }

            let mut best_label = labels[node];
            let mut best_count = 0;
            for &(label, count) in &counts {
                if count > best_count {
                    best_count = count;
                    best_label = label;
                }
            }

            if best_label != labels[node] {
                labels[node] = best_label;
                changed = true;
            }
        }

        converged = !changed;
    }

    let (labels, community_count) = renumber(&labels);

    LabelPropagationResult {
        labels,
        community_count,
        iterations,
        converged,
    }
}

/// Map arbitrary labels onto 0..k in order of first appearance
fn renumber(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut mapping: FxHashMap<usize, usize> = FxHashMap::default();
    let renumbered = labels
        .iter()
        .map(|label| {
            let next = mapping.len();
            *mapping.entry(*label).or_insert(next)
        })
        .collect();
    (renumbered, mapping.len())
}

/// Result of a connected components search
#[derive(Debug, Clone)]
pub struct ComponentsResult {
    /// Component id per node index, in discovery order
    pub node_component: Vec<usize>,
    /// Size of each component, indexed by component id
    pub component_sizes: Vec<usize>,
}

impl ComponentsResult {
    /// Size of the largest component (0 for an empty graph)
    pub fn largest(&self) -> usize {
        self.component_sizes.iter().copied().max().unwrap_or(0)
    }

    /// Number of components
    pub fn count(&self) -> usize {
        self.component_sizes.len()
    }
}

/// Connected components by breadth-first traversal from every unvisited node
pub fn connected_components(view: &GraphView) -> ComponentsResult {
    let n = view.node_count;
    let mut node_component = vec![usize::MAX; n];
    let mut component_sizes = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..n {
        if node_component[start] != usize::MAX {
            continue;
        }

        let component = component_sizes.len();
        let mut size = 0;
        node_component[start] = component;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            size += 1;
            for &next in view.neighbors(current) {
                if node_component[next] == usize::MAX {
                    node_component[next] = component;
                    queue.push_back(next);
                }
            }
        }

        component_sizes.push(size);
    }

    ComponentsResult {
        node_component,
        component_sizes,
    }
}
