//! Nexus Intelligence Graph Analysis
//!
//! A read-only analysis engine for OSINT investigation graphs. Given a
//! snapshot of nodes and connections it produces:
//!
//! - A community partition (label propagation)
//! - A composite centrality score per node (degree + PageRank) and key nodes
//! - A three-axis investigation completeness score per node (relations,
//!   attributes, structure) with prioritized, human-readable suggestions
//! - Graph health indicators (connectivity, information density, balance)
//!
//! # Architecture
//!
//! - `graph`: snapshot data model and JSON loading
//! - `algo`: projection onto a dense view and the graph algorithms
//!   (delegating to `nexus-graph-algorithms`)
//! - `analysis`: completeness scoring and the `InvestigationAnalyzer`
//!
//! ## Example Usage
//!
//! ```rust
//! use nexus_intel::analysis::{AnalysisConfig, InvestigationAnalyzer};
//! use nexus_intel::graph::{Connection, GraphSnapshot, IntelNode, NodeCategory};
//!
//! let snapshot = GraphSnapshot::new(
//!     vec![
//!         IntelNode::new("p1", NodeCategory::Entity).with_title("Alice"),
//!         IntelNode::new("ph1", NodeCategory::PhoneNumber).with_title("+1 555 0100"),
//!     ],
//!     vec![Connection::new("c1", "p1", "ph1")],
//! );
//!
//! let analyzer = InvestigationAnalyzer::new(AnalysisConfig::seeded(7));
//! let result = analyzer.analyze(&snapshot);
//!
//! assert_eq!(result.investigation.total_nodes, 2);
//! assert_eq!(result.graph.community_count(), 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod analysis;
pub mod error;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AttributeMap, AttributeValue, Connection, GraphSnapshot, IntelNode, NodeCategory, NodeId,
    SnapshotError,
};

pub use algo::{GraphAnalysis, GraphIndex};

pub use analysis::{
    AnalysisConfig, AnalysisResult, ConfigError, InvestigationAnalysis, InvestigationAnalyzer,
    NodeCompleteness, SuggestionPriority,
};

pub use error::{NexusError, NexusResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
