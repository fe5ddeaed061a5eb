//! Investigation analyzer
//!
//! Orchestrates one analysis run over a snapshot: graph index, communities,
//! centrality, attribute statistics, structural metrics, then per-node
//! completeness and the graph-wide aggregate.

use super::attributes::AttributeStatistics;
use super::completeness::{CompletenessScorer, NodeCompleteness, NodeStructure};
use super::config::AnalysisConfig;
use super::structure::StructuralMetrics;
use crate::algo::{analyze_graph, GraphAnalysis, GraphIndex};
use crate::graph::{GraphSnapshot, NodeCategory, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Node counts per overall-score band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessDistribution {
    /// Below 0.3
    pub critical: usize,
    /// 0.3 to 0.5
    pub low: usize,
    /// 0.5 to 0.7
    pub medium: usize,
    /// 0.7 and above
    pub high: usize,
}

impl CompletenessDistribution {
    pub fn record(&mut self, score: f64) {
        if score < 0.3 {
            self.critical += 1;
        } else if score < 0.5 {
            self.low += 1;
        } else if score < 0.7 {
            self.medium += 1;
        } else {
            self.high += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.low + self.medium + self.high
    }
}

/// Graph-wide health indicators, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphHealth {
    pub connectivity: f64,
    pub information_density: f64,
    pub structural_balance: f64,
}

/// Completeness aggregate over every node of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationAnalysis {
    pub total_nodes: usize,
    pub average_completeness: f64,
    pub completeness_distribution: CompletenessDistribution,
    /// One record per snapshot node, in snapshot order
    pub node_analysis: Vec<NodeCompleteness>,
    /// Nodes below the suggestion cutoff, most urgent first
    pub prioritized_suggestions: Vec<NodeCompleteness>,
    pub graph_health: GraphHealth,
}

impl InvestigationAnalysis {
    pub fn node(&self, id: &NodeId) -> Option<&NodeCompleteness> {
        self.node_analysis.iter().find(|n| &n.node_id == id)
    }
}

/// Output of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub graph: GraphAnalysis,
    pub investigation: InvestigationAnalysis,
}

/// Runs the full analysis pipeline over snapshots.
///
/// Holds only configuration; every call is independent, so one analyzer can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct InvestigationAnalyzer {
    config: AnalysisConfig,
}

impl InvestigationAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a snapshot. Label propagation uses the configured seed, or the
    /// thread RNG when none is set.
    pub fn analyze(&self, snapshot: &GraphSnapshot) -> AnalysisResult {
        match self.config.seed {
            Some(seed) => self.analyze_with_rng(snapshot, &mut StdRng::seed_from_u64(seed)),
            None => self.analyze_with_rng(snapshot, &mut rand::thread_rng()),
        }
    }

    /// Analyze a snapshot with a caller-supplied random source
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        snapshot: &GraphSnapshot,
        rng: &mut R,
    ) -> AnalysisResult {
        if snapshot.is_empty() {
            debug!("Empty snapshot, returning zeroed analysis");
            return AnalysisResult::default();
        }

        let index = GraphIndex::build(&snapshot.nodes, &snapshot.connections);
        let graph = analyze_graph(
            &index,
            &self.config.label_propagation,
            &self.config.centrality,
            &self.config.key_nodes,
            rng,
        );
        let investigation = self.investigate(snapshot, &index);

        info!(
            "Analyzed {} nodes / {} connections: {} communities, {} key nodes, average completeness {:.3}",
            snapshot.node_count(),
            snapshot.connection_count(),
            graph.community_count(),
            graph.key_nodes.len(),
            investigation.average_completeness
        );

        AnalysisResult {
            graph,
            investigation,
        }
    }

    /// Completeness analysis over an already built index
    pub fn investigate(&self, snapshot: &GraphSnapshot, index: &GraphIndex) -> InvestigationAnalysis {
        if snapshot.is_empty() {
            return InvestigationAnalysis::default();
        }

        let statistics = AttributeStatistics::learn(&snapshot.nodes);
        debug!(
            "Attribute statistics learned for {} categories",
            statistics.category_count()
        );

        let metrics = StructuralMetrics::compute(index);
        let scorer = CompletenessScorer::new(
            self.config.completeness.clone(),
            self.config.max_suggestions,
        );

        let node_analysis: Vec<NodeCompleteness> = snapshot
            .nodes
            .par_iter()
            .map(|node| {
                let neighbor_categories: HashSet<NodeCategory> =
                    index.neighbor_categories(&node.id).collect();
                let structure = index
                    .index_of(&node.id)
                    .map(|idx| NodeStructure {
                        degree: metrics.degree(idx),
                        clustering: metrics.clustering_of(idx),
                        betweenness: metrics.betweenness_of(idx),
                    })
                    .unwrap_or_default();

                scorer.score_node(
                    node,
                    &neighbor_categories,
                    &statistics,
                    structure,
                    metrics.average_degree,
                )
            })
            .collect();

        let total_nodes = node_analysis.len();
        let average_completeness =
            node_analysis.iter().map(|n| n.overall_score).sum::<f64>() / total_nodes as f64;

        let mut completeness_distribution = CompletenessDistribution::default();
        for node in &node_analysis {
            completeness_distribution.record(node.overall_score);
        }

        let mut prioritized_suggestions: Vec<NodeCompleteness> = node_analysis
            .iter()
            .filter(|n| n.overall_score < self.config.suggestion_cutoff)
            .cloned()
            .collect();
        prioritized_suggestions.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then_with(|| a.overall_score.total_cmp(&b.overall_score))
        });

        let graph_health = GraphHealth {
            connectivity: metrics.global_connectivity,
            information_density: statistics.information_density(&snapshot.nodes),
            structural_balance: metrics.structural_balance,
        };

        InvestigationAnalysis {
            total_nodes,
            average_completeness,
            completeness_distribution,
            node_analysis,
            prioritized_suggestions,
            graph_health,
        }
    }
}
