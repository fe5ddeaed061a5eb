//! Investigation completeness analysis
//!
//! Scores how thoroughly each node has been investigated and turns the gaps
//! into prioritized suggestions:
//! - Relation completeness against a table of expected neighbor categories
//! - Attribute completeness against fill rates learned from the snapshot
//! - Structural completeness from degree, clustering and isolation

pub mod attributes;
pub mod completeness;
pub mod config;
pub mod investigation;
pub mod relations;
pub mod structure;

pub use attributes::{field_importance, AttributeStatistics, CategoryStatistics, FieldStatistic};
pub use completeness::{
    completeness_label, geometric_weighted_mean, CompletenessScorer, MissingRelation,
    NodeCompleteness, NodeStructure, SparseAttribute, StructuralIssue, StructuralIssueKind,
    SuggestionPriority,
};
pub use config::{AnalysisConfig, CompletenessWeights, ConfigError, ConfigResult};
pub use investigation::{
    AnalysisResult, CompletenessDistribution, GraphHealth, InvestigationAnalysis,
    InvestigationAnalyzer,
};
pub use relations::RelationExpectationModel;
pub use structure::StructuralMetrics;
