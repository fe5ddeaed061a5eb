//! Three-axis completeness scoring
//!
//! Every node is scored on relations (expected neighbor categories present),
//! attributes (information-weighted filled fields) and structure (degree,
//! clustering, isolation). The axes are combined with a weighted geometric
//! mean so a single very low axis cannot be hidden by the other two.

use super::attributes::{AttributeStatistics, MAX_FIELD_BITS};
use super::config::CompletenessWeights;
use super::relations::RelationExpectationModel;
use crate::graph::{IntelNode, NodeCategory, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Relation score of a category the expectation table does not cover
pub const UNMAPPED_RELATION_SCORE: f64 = 0.7;

/// Only expectations at or above this probability become suggestions
const MISSING_RELATION_MIN_PROBABILITY: f64 = 0.5;

/// Missing relations at or above this probability raise priority to High
const URGENT_RELATION_PROBABILITY: f64 = 0.8;

/// Only missing fields above this many bits become suggestions
const SPARSE_ATTRIBUTE_MIN_BITS: f64 = 1.0;

/// Floor applied to every axis before taking the logarithm
const GEOMETRIC_MEAN_FLOOR: f64 = 0.01;

/// How urgently a node needs more investigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl SuggestionPriority {
    /// Sort rank, most urgent first
    pub fn rank(&self) -> u8 {
        match self {
            SuggestionPriority::Critical => 0,
            SuggestionPriority::High => 1,
            SuggestionPriority::Medium => 2,
            SuggestionPriority::Low => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuggestionPriority::Critical => "Critical",
            SuggestionPriority::High => "High",
            SuggestionPriority::Medium => "Medium",
            SuggestionPriority::Low => "Low",
        }
    }
}

impl fmt::Display for SuggestionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An expected neighbor category that is absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingRelation {
    #[serde(rename = "targetType")]
    pub target_category: NodeCategory,
    pub expected_probability: f64,
    pub description: String,
}

/// An informative field the node does not fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparseAttribute {
    /// Field name, pseudo-fields without their leading underscore
    pub field: String,
    /// Importance normalized to [0, 1]
    pub importance: f64,
    pub fill_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralIssueKind {
    Isolated,
    LowConnectivity,
    BridgeDependency,
    Peripheral,
}

impl StructuralIssueKind {
    pub fn severity(&self) -> f64 {
        match self {
            StructuralIssueKind::Isolated => 1.0,
            StructuralIssueKind::BridgeDependency => 0.7,
            StructuralIssueKind::Peripheral => 0.6,
            StructuralIssueKind::LowConnectivity => 0.4,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StructuralIssueKind::Isolated => "This node is completely isolated with no connections",
            StructuralIssueKind::Peripheral => {
                "This node sits on the edge of the network with a single connection"
            }
            StructuralIssueKind::BridgeDependency => {
                "This node bridges parts of the graph but has no redundant connections"
            }
            StructuralIssueKind::LowConnectivity => {
                "This node is weakly connected; consider expanding its relations"
            }
        }
    }
}

/// A structural weakness of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralIssue {
    #[serde(rename = "type")]
    pub kind: StructuralIssueKind,
    pub severity: f64,
    pub description: String,
}

impl From<StructuralIssueKind> for StructuralIssue {
    fn from(kind: StructuralIssueKind) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            description: kind.description().to_string(),
        }
    }
}

/// Completeness breakdown of a single node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCompleteness {
    pub node_id: NodeId,
    #[serde(rename = "nodeType")]
    pub node_category: NodeCategory,
    pub node_title: String,

    pub relation_score: f64,
    pub attribute_score: f64,
    pub structure_score: f64,
    pub overall_score: f64,

    pub missing_relations: Vec<MissingRelation>,
    pub sparse_attributes: Vec<SparseAttribute>,
    pub structural_issues: Vec<StructuralIssue>,

    pub priority: SuggestionPriority,
}

impl NodeCompleteness {
    pub fn has_issue(&self, kind: StructuralIssueKind) -> bool {
        self.structural_issues.iter().any(|issue| issue.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationCompleteness {
    pub score: f64,
    pub missing: Vec<MissingRelation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeCompleteness {
    pub score: f64,
    pub sparse: Vec<SparseAttribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureCompleteness {
    pub score: f64,
    pub issues: Vec<StructuralIssue>,
}

/// Structural position of one node, as read from the structural metrics
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeStructure {
    pub degree: usize,
    pub clustering: f64,
    pub betweenness: f64,
}

/// Scores nodes on the three completeness axes
#[derive(Debug, Clone)]
pub struct CompletenessScorer {
    relations: RelationExpectationModel,
    weights: CompletenessWeights,
    max_suggestions: usize,
}

impl Default for CompletenessScorer {
    fn default() -> Self {
        Self::new(CompletenessWeights::default(), 5)
    }
}

impl CompletenessScorer {
    pub fn new(weights: CompletenessWeights, max_suggestions: usize) -> Self {
        Self {
            relations: RelationExpectationModel,
            weights,
            max_suggestions,
        }
    }

    /// Share of the expected relation mass present among the neighbors
    pub fn relation_completeness(
        &self,
        category: NodeCategory,
        neighbor_categories: &HashSet<NodeCategory>,
    ) -> RelationCompleteness {
        let expectations = match self.relations.expectations(category) {
            Some(table) if !table.is_empty() => table,
            _ => {
                return RelationCompleteness {
                    score: UNMAPPED_RELATION_SCORE,
                    missing: Vec::new(),
                }
            }
        };

        let mut total = 0.0;
        let mut satisfied = 0.0;
        let mut missing = Vec::new();

        for &(target, probability) in expectations {
            total += probability;
            if neighbor_categories.contains(&target) {
                satisfied += probability;
            } else if probability >= MISSING_RELATION_MIN_PROBABILITY {
                missing.push(MissingRelation {
                    target_category: target,
                    expected_probability: probability,
                    description: self.relations.describe_missing(category, target),
                });
            }
        }

        let score = if total > 0.0 {
            satisfied / total
        } else {
            UNMAPPED_RELATION_SCORE
        };

        missing.sort_by(|a, b| b.expected_probability.total_cmp(&a.expected_probability));
        missing.truncate(self.max_suggestions);

        RelationCompleteness { score, missing }
    }

    /// Importance-weighted share of the category's known fields the node fills
    pub fn attribute_completeness(
        &self,
        node: &IntelNode,
        statistics: &AttributeStatistics,
    ) -> AttributeCompleteness {
        let stats = match statistics.category(node.category) {
            Some(stats) => stats,
            None => {
                let filled = node.filled_attribute_count();
                let score = if filled > 0 {
                    (0.5 + 0.1 * filled as f64).min(0.8)
                } else {
                    0.3
                };
                return AttributeCompleteness {
                    score,
                    sparse: Vec::new(),
                };
            }
        };

        let total = stats.total_importance();
        let mut weighted = 0.0;
        let mut sparse = Vec::new();

        for (field, statistic) in &stats.fields {
            if node.has_filled_field(field) {
                weighted += statistic.importance;
            } else if statistic.importance > SPARSE_ATTRIBUTE_MIN_BITS {
                sparse.push(SparseAttribute {
                    field: field.strip_prefix('_').unwrap_or(field).to_string(),
                    importance: statistic.importance / MAX_FIELD_BITS,
                    fill_rate: statistic.fill_rate,
                });
            }
        }

        let score = if total > 0.0 { weighted / total } else { 0.5 };

        sparse.sort_by(|a, b| b.importance.total_cmp(&a.importance));
        sparse.truncate(self.max_suggestions);

        AttributeCompleteness { score, sparse }
    }

    /// Degree relative to the average, local clustering and a flat bonus for
    /// not being isolated
    pub fn structure_completeness(
        &self,
        node: NodeStructure,
        average_degree: f64,
    ) -> StructureCompleteness {
        let degree = node.degree as f64;

        let degree_score = if average_degree > 0.0 {
            (degree / (2.0 * average_degree)).min(1.0)
        } else if node.degree > 0 {
            0.5
        } else {
            0.0
        };

        let mut issues: Vec<StructuralIssue> = Vec::new();
        if node.degree == 0 {
            issues.push(StructuralIssueKind::Isolated.into());
        } else if node.degree == 1 {
            issues.push(StructuralIssueKind::Peripheral.into());
        }
        if node.degree > 0 && node.clustering < 0.1 && node.betweenness > 0.5 {
            issues.push(StructuralIssueKind::BridgeDependency.into());
        }
        if node.degree > 0 && degree < average_degree * 0.3 {
            issues.push(StructuralIssueKind::LowConnectivity.into());
        }

        let connected_bonus = if node.degree > 0 { 0.2 } else { 0.0 };
        let score = degree_score * 0.5 + node.clustering * 0.3 + connected_bonus;

        StructureCompleteness {
            score: score.min(1.0),
            issues,
        }
    }

    /// Weighted geometric mean of the (relation, attribute, structure) scores
    pub fn overall_score(&self, relation: f64, attribute: f64, structure: f64) -> f64 {
        geometric_weighted_mean(&[relation, attribute, structure], &self.weights.as_array())
    }

    pub fn determine_priority(
        &self,
        overall: f64,
        missing: &[MissingRelation],
        issues: &[StructuralIssue],
    ) -> SuggestionPriority {
        let isolated = issues
            .iter()
            .any(|issue| issue.kind == StructuralIssueKind::Isolated);
        let urgent_relation = missing
            .iter()
            .any(|m| m.expected_probability >= URGENT_RELATION_PROBABILITY);

        if overall < 0.3 || isolated {
            SuggestionPriority::Critical
        } else if overall < 0.5 || urgent_relation {
            SuggestionPriority::High
        } else if overall < 0.7 {
            SuggestionPriority::Medium
        } else {
            SuggestionPriority::Low
        }
    }

    /// Score one node given its neighbor categories and structural position
    pub fn score_node(
        &self,
        node: &IntelNode,
        neighbor_categories: &HashSet<NodeCategory>,
        statistics: &AttributeStatistics,
        structure: NodeStructure,
        average_degree: f64,
    ) -> NodeCompleteness {
        let relation = self.relation_completeness(node.category, neighbor_categories);
        let attribute = self.attribute_completeness(node, statistics);
        let structure = self.structure_completeness(structure, average_degree);

        let overall_score = self.overall_score(relation.score, attribute.score, structure.score);
        let priority = self.determine_priority(overall_score, &relation.missing, &structure.issues);

        NodeCompleteness {
            node_id: node.id.clone(),
            node_category: node.category,
            node_title: node.title.clone(),
            relation_score: relation.score,
            attribute_score: attribute.score,
            structure_score: structure.score,
            overall_score,
            missing_relations: relation.missing,
            sparse_attributes: attribute.sparse,
            structural_issues: structure.issues,
            priority,
        }
    }
}

/// `exp(sum(w * ln(max(v, 0.01))) / sum(w))`; 0 for empty or mismatched input
pub fn geometric_weighted_mean(values: &[f64], weights: &[f64]) -> f64 {
    if values.is_empty() || values.len() != weights.len() {
        return 0.0;
    }

    let mut log_sum = 0.0;
    let mut weight_sum = 0.0;
    for (value, weight) in values.iter().zip(weights) {
        log_sum += weight * value.max(GEOMETRIC_MEAN_FLOOR).ln();
        weight_sum += weight;
    }

    if weight_sum > 0.0 {
        (log_sum / weight_sum).exp()
    } else {
        0.0
    }
}

/// Human-readable grade of a completeness score
pub fn completeness_label(score: f64) -> &'static str {
    if score >= 0.8 {
        "Excellent"
    } else if score >= 0.6 {
        "Good"
    } else if score >= 0.4 {
        "Fair"
    } else if score >= 0.2 {
        "Poor"
    } else {
        "Severely deficient"
    }
}
