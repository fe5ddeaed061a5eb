//! Connection model
//!
//! Connections carry a direction as drawn by the analyst, but every analysis
//! treats them as undirected. Several connections between the same pair of
//! nodes are allowed.

use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Analyst assessment of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionClass {
    Confirmed,
    Suspected,
    Contradicts,
}

/// A connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: EdgeId,

    /// Node the connection was drawn from
    pub source_id: NodeId,

    /// Node the connection was drawn to
    pub target_id: NodeId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<ConnectionClass>,
}

impl Connection {
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source_id: source.into(),
            target_id: target.into(),
            label: None,
            classification: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_classification(mut self, classification: ConnectionClass) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Whether both ends point at the same node
    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint
    pub fn other_end(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.source_id == node {
            Some(&self.target_id)
        } else if &self.target_id == node {
            Some(&self.source_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_endpoints() {
        let conn = Connection::new("e1", "a", "b").with_label("owns");
        assert_eq!(conn.other_end(&NodeId::new("a")), Some(&NodeId::new("b")));
        assert_eq!(conn.other_end(&NodeId::new("b")), Some(&NodeId::new("a")));
        assert_eq!(conn.other_end(&NodeId::new("c")), None);
        assert!(!conn.is_self_loop());
        assert!(Connection::new("e2", "a", "a").is_self_loop());
    }

    #[test]
    fn test_deserialize_editor_json() {
        let json = r#"{"id": "c1", "sourceId": "n1", "targetId": "n2", "label": "calls", "type": "SUSPECTED"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();

        assert_eq!(conn.source_id.as_str(), "n1");
        assert_eq!(conn.target_id.as_str(), "n2");
        assert_eq!(conn.label.as_deref(), Some("calls"));
        assert_eq!(conn.classification, Some(ConnectionClass::Suspected));

        let bare: Connection =
            serde_json::from_str(r#"{"id": "c2", "sourceId": "n1", "targetId": "n3"}"#).unwrap();
        assert!(bare.label.is_none());
        assert!(bare.classification.is_none());
    }
}
