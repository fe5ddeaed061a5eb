//! Point-in-time graph snapshot
//!
//! The analysis engine consumes an immutable snapshot of the canvas. Loading
//! a snapshot from JSON is the only fallible step; analysing it is not.

use super::edge::Connection;
use super::node::IntelNode;
use super::types::NodeId;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Nodes and connections as of one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<IntelNode>,

    #[serde(default, alias = "edges")]
    pub connections: Vec<Connection>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<IntelNode>, connections: Vec<Connection>) -> Self {
        Self { nodes, connections }
    }

    pub fn from_json_str(json: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> SnapshotResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn to_json_string(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find a node by id (first match)
    pub fn node(&self, id: &NodeId) -> Option<&IntelNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }
}
