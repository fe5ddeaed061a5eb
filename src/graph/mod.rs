//! Intelligence graph data model
//!
//! This module defines the snapshot the analysis engine reads:
//! - Nodes with a closed category vocabulary and scalar attributes
//! - Connections that are drawn directed but analysed undirected
//! - A point-in-time snapshot with JSON loading

pub mod edge;
pub mod node;
pub mod property;
pub mod snapshot;
pub mod types;

// Re-export main types
pub use edge::{Connection, ConnectionClass};
pub use node::{
    AdmiraltyRating, Credibility, IntelNode, NodeMeta, Reliability, CONTENT_FIELD, TITLE_FIELD,
};
pub use property::{AttributeMap, AttributeValue};
pub use snapshot::{GraphSnapshot, SnapshotError, SnapshotResult};
pub use types::{CategoryFamily, EdgeId, NodeCategory, NodeId};
