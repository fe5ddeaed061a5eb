//! Attribute value types for intelligence nodes

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar attribute value attached to a node.
///
/// Deserializes untagged from the editor's JSON (`"text"`, `1.5`, `true`,
/// `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl AttributeValue {
    /// Whether the value carries information.
    ///
    /// Text must be non-blank after trimming, numbers must not be NaN,
    /// booleans always count and null never does.
    pub fn is_filled(&self) -> bool {
        match self {
            AttributeValue::Text(s) => !s.trim().is_empty(),
            AttributeValue::Number(n) => !n.is_nan(),
            AttributeValue::Boolean(_) => true,
            AttributeValue::Null => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Text(_) => "Text",
            AttributeValue::Number(_) => "Number",
            AttributeValue::Boolean(_) => "Boolean",
            AttributeValue::Null => "Null",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "\"{}\"", s),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Number(n as f64)
    }
}

impl From<i32> for AttributeValue {
    fn from(n: i32) -> Self {
        AttributeValue::Number(n as f64)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

/// Attribute map, field name to value, in insertion order
pub type AttributeMap = IndexMap<String, AttributeValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_filled() {
        assert!(AttributeValue::from("Alice").is_filled());
        assert!(!AttributeValue::from("   ").is_filled());
        assert!(!AttributeValue::from("").is_filled());
        assert!(AttributeValue::from(0.0).is_filled());
        assert!(!AttributeValue::Number(f64::NAN).is_filled());
        assert!(AttributeValue::from(false).is_filled());
        assert!(!AttributeValue::Null.is_filled());
    }

    #[test]
    fn test_conversions() {
        let text: AttributeValue = "hello".into();
        assert_eq!(text.as_text(), Some("hello"));

        let number: AttributeValue = 42i64.into();
        assert_eq!(number.as_number(), Some(42.0));

        let flag: AttributeValue = true.into();
        assert_eq!(flag.as_boolean(), Some(true));
        assert_eq!(flag.type_name(), "Boolean");
    }

    #[test]
    fn test_untagged_deserialize() {
        let map: AttributeMap = serde_json::from_str(
            r#"{"name": "Alice", "age": 30, "verified": true, "alias": null}"#,
        )
        .unwrap();

        assert_eq!(map["name"], AttributeValue::Text("Alice".to_string()));
        assert_eq!(map["age"], AttributeValue::Number(30.0));
        assert_eq!(map["verified"], AttributeValue::Boolean(true));
        assert_eq!(map["alias"], AttributeValue::Null);

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age", "verified", "alias"]);
    }
}
