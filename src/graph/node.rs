//! Intelligence node model
//!
//! A node is one entity on the investigation canvas: a person, an IP
//! address, a wallet, a report. The engine only reads nodes; ownership of
//! the snapshot stays with the caller.

use super::property::{AttributeMap, AttributeValue};
use super::types::{NodeCategory, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pseudo-field name used for the node title in attribute statistics
pub const TITLE_FIELD: &str = "_title";
/// Pseudo-field name used for the node content in attribute statistics
pub const CONTENT_FIELD: &str = "_content";

/// Source reliability grade of the Admiralty (NATO) system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Reliability {
    /// Completely reliable
    A,
    /// Usually reliable
    B,
    /// Fairly reliable
    C,
    /// Not usually reliable
    D,
    /// Unreliable
    E,
    /// Reliability cannot be judged
    F,
}

/// Information credibility grade of the Admiralty (NATO) system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Credibility {
    /// Confirmed by other sources
    #[serde(rename = "1")]
    Confirmed,
    #[serde(rename = "2")]
    ProbablyTrue,
    #[serde(rename = "3")]
    PossiblyTrue,
    #[serde(rename = "4")]
    DoubtfullyTrue,
    #[serde(rename = "5")]
    Improbable,
    /// Truth cannot be judged
    #[serde(rename = "6")]
    CannotBeJudged,
}

/// Admiralty code rating attached to a node (e.g. `B2`).
///
/// Carried through the model for reporting; no score depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdmiraltyRating {
    pub reliability: Reliability,
    pub credibility: Credibility,
}

impl AdmiraltyRating {
    pub fn new(reliability: Reliability, credibility: Credibility) -> Self {
        Self {
            reliability,
            credibility,
        }
    }

    /// Parse a two-character code such as `"A1"` or `"c3"`
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.trim().chars();
        let reliability = match chars.next()?.to_ascii_uppercase() {
            'A' => Reliability::A,
            'B' => Reliability::B,
            'C' => Reliability::C,
            'D' => Reliability::D,
            'E' => Reliability::E,
            'F' => Reliability::F,
            _ => return None,
        };
        let credibility = match chars.next()? {
            '1' => Credibility::Confirmed,
            '2' => Credibility::ProbablyTrue,
            '3' => Credibility::PossiblyTrue,
            '4' => Credibility::DoubtfullyTrue,
            '5' => Credibility::Improbable,
            '6' => Credibility::CannotBeJudged,
            _ => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(reliability, credibility))
    }
}

impl fmt::Display for AdmiraltyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade = match self.credibility {
            Credibility::Confirmed => 1,
            Credibility::ProbablyTrue => 2,
            Credibility::PossiblyTrue => 3,
            Credibility::DoubtfullyTrue => 4,
            Credibility::Improbable => 5,
            Credibility::CannotBeJudged => 6,
        };
        write!(f, "{:?}{}", self.reliability, grade)
    }
}

/// Provenance metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A node in the intelligence graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelNode {
    /// Caller-assigned unique identifier
    pub id: NodeId,

    /// Entity kind
    #[serde(rename = "type", default)]
    pub category: NodeCategory,

    #[serde(default)]
    pub title: String,

    /// Short free-text summary
    #[serde(default)]
    pub content: String,

    /// Entity properties
    #[serde(default)]
    pub data: AttributeMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<AdmiraltyRating>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<NodeMeta>,
}

impl IntelNode {
    /// Create a node with an empty title, content and attribute map
    pub fn new(id: impl Into<NodeId>, category: NodeCategory) -> Self {
        Self {
            id: id.into(),
            category,
            title: String::new(),
            content: String::new(),
            data: AttributeMap::new(),
            rating: None,
            meta: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_rating(mut self, rating: AdmiraltyRating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Get an attribute value
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.data.get(key)
    }

    /// Whether a field carries information. `_title` and `_content` refer to
    /// the node's title and content.
    pub fn has_filled_field(&self, field: &str) -> bool {
        match field {
            TITLE_FIELD => !self.title.trim().is_empty(),
            CONTENT_FIELD => !self.content.trim().is_empty(),
            key => self.data.get(key).map(AttributeValue::is_filled).unwrap_or(false),
        }
    }

    /// Names of every filled field, pseudo-fields included
    pub fn filled_fields(&self) -> impl Iterator<Item = &str> {
        let title = (!self.title.trim().is_empty()).then_some(TITLE_FIELD);
        let content = (!self.content.trim().is_empty()).then_some(CONTENT_FIELD);
        self.data
            .iter()
            .filter(|(_, value)| value.is_filled())
            .map(|(key, _)| key.as_str())
            .chain(title)
            .chain(content)
    }

    /// Number of filled entries in the attribute map (title and content excluded)
    pub fn filled_attribute_count(&self) -> usize {
        self.data.values().filter(|v| v.is_filled()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_filled_fields() {
        let node = IntelNode::new("p1", NodeCategory::Entity)
            .with_title("Alice")
            .with_attribute("age", 30i64)
            .with_attribute("nickname", "  ")
            .with_attribute("alias", AttributeValue::Null);

        assert!(node.has_filled_field(TITLE_FIELD));
        assert!(!node.has_filled_field(CONTENT_FIELD));
        assert!(node.has_filled_field("age"));
        assert!(!node.has_filled_field("nickname"));
        assert!(!node.has_filled_field("missing"));
        assert_eq!(node.filled_attribute_count(), 1);

        let fields: Vec<&str> = node.filled_fields().collect();
        assert_eq!(fields, vec!["age", TITLE_FIELD]);
    }

    #[test]
    fn test_admiralty_rating_parse() {
        let rating = AdmiraltyRating::parse("b2").unwrap();
        assert_eq!(rating.reliability, Reliability::B);
        assert_eq!(rating.credibility, Credibility::ProbablyTrue);
        assert_eq!(rating.to_string(), "B2");

        assert!(AdmiraltyRating::parse("G1").is_none());
        assert!(AdmiraltyRating::parse("A7").is_none());
        assert!(AdmiraltyRating::parse("A12").is_none());
        assert!(AdmiraltyRating::parse("").is_none());
    }

    #[test]
    fn test_deserialize_editor_json() {
        let json = r#"{
            "id": "n1",
            "type": "PHONE_NUMBER",
            "title": "+1 555 0100",
            "content": "",
            "position": {"x": 10, "y": 20},
            "data": {"carrier": "Acme", "ported": false},
            "rating": {"reliability": "C", "credibility": "3"},
            "meta": {"sourceName": "HLR lookup", "tags": ["mobile"]},
            "depth": 1
        }"#;

        let node: IntelNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id.as_str(), "n1");
        assert_eq!(node.category, NodeCategory::PhoneNumber);
        assert_eq!(node.data.len(), 2);
        assert_eq!(node.rating.unwrap().to_string(), "C3");
        assert_eq!(node.meta.unwrap().tags, vec!["mobile".to_string()]);
    }
}
