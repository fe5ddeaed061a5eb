//! Adaptive attribute statistics
//!
//! Instead of a fixed schema, the engine learns from the current snapshot
//! which fields nodes of each category usually carry. A field's importance is
//! its self-information: the rarer it is filled, the more a filled value says.
//! The statistics are rebuilt on every run so the model recalibrates as the
//! graph grows.

use crate::graph::{IntelNode, NodeCategory};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Upper bound on field importance, in bits
pub const MAX_FIELD_BITS: f64 = 6.0;

/// Lower bound applied to fill rates before taking the logarithm
const MIN_FILL_RATE: f64 = 0.01;

/// Importance of a field in bits: `min(-log2(max(fill_rate, 0.01)), 6)`
pub fn field_importance(fill_rate: f64) -> f64 {
    (-fill_rate.max(MIN_FILL_RATE).log2()).min(MAX_FIELD_BITS)
}

/// Learned statistic for one (category, field) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatistic {
    /// Share of the category's nodes with a filled value
    pub fill_rate: f64,
    /// Self-information in bits
    pub importance: f64,
}

/// Fields observed on nodes of one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatistics {
    /// Number of nodes of this category
    pub node_count: usize,
    /// Every field filled on at least one node, in first-seen order
    pub fields: IndexMap<String, FieldStatistic>,
}

impl CategoryStatistics {
    /// Sum of importances over all known fields
    pub fn total_importance(&self) -> f64 {
        self.fields.values().map(|f| f.importance).sum()
    }
}

/// Per-category field fill rates learned from a snapshot
#[derive(Debug, Clone, Default)]
pub struct AttributeStatistics {
    categories: HashMap<NodeCategory, CategoryStatistics>,
}

impl AttributeStatistics {
    /// Learn fill rates from a node list. Title and content count as the
    /// pseudo-fields `_title` and `_content`.
    pub fn learn(nodes: &[IntelNode]) -> Self {
        let mut counts: HashMap<NodeCategory, (usize, IndexMap<&str, usize>)> = HashMap::new();

        for node in nodes {
            let (node_count, occurrences) = counts.entry(node.category).or_default();
            *node_count += 1;
            for field in node.filled_fields() {
                *occurrences.entry(field).or_insert(0) += 1;
            }
        }

        let categories = counts
            .into_iter()
            .map(|(category, (node_count, occurrences))| {
                let denominator = node_count.max(1) as f64;
                let fields = occurrences
                    .into_iter()
                    .map(|(field, count)| {
                        let fill_rate = count as f64 / denominator;
                        let statistic = FieldStatistic {
                            fill_rate,
                            importance: field_importance(fill_rate),
                        };
                        (field.to_string(), statistic)
                    })
                    .collect();
                (category, CategoryStatistics { node_count, fields })
            })
            .collect();

        Self { categories }
    }

    /// Statistics for a category; `None` when no node of it has any filled field
    pub fn category(&self, category: NodeCategory) -> Option<&CategoryStatistics> {
        self.categories
            .get(&category)
            .filter(|stats| !stats.fields.is_empty())
    }

    /// Number of categories with at least one node
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Filled known fields over all known fields, summed across `nodes`.
    /// Returns 0.5 when no node has any known field.
    pub fn information_density(&self, nodes: &[IntelNode]) -> f64 {
        let mut total = 0usize;
        let mut filled = 0usize;

        for node in nodes {
            if let Some(stats) = self.category(node.category) {
                total += stats.fields.len();
                filled += stats
                    .fields
                    .keys()
                    .filter(|field| node.has_filled_field(field))
                    .count();
            }
        }

        if total == 0 {
            0.5
        } else {
            filled as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AttributeValue, CONTENT_FIELD, TITLE_FIELD};

    #[test]
    fn test_field_importance() {
        assert_eq!(field_importance(1.0), 0.0);
        assert!((field_importance(0.5) - 1.0).abs() < 1e-12);
        assert!((field_importance(0.25) - 2.0).abs() < 1e-12);
        // Floored at 1% then capped at 6 bits
        assert_eq!(field_importance(0.0), MAX_FIELD_BITS);
        assert_eq!(field_importance(0.001), MAX_FIELD_BITS);
    }

    #[test]
    fn test_learn_fill_rates() {
        let nodes = vec![
            IntelNode::new("a", NodeCategory::Entity)
                .with_title("Alice")
                .with_attribute("age", 30i64)
                .with_attribute("alias", "   "),
            IntelNode::new("b", NodeCategory::Entity).with_title("Bob"),
            IntelNode::new("c", NodeCategory::Entity)
                .with_title("Carol")
                .with_content("Analyst note")
                .with_attribute("age", AttributeValue::Number(f64::NAN)),
            IntelNode::new("d", NodeCategory::Entity).with_title(" "),
        ];

        let stats = AttributeStatistics::learn(&nodes);
        let entity = stats.category(NodeCategory::Entity).unwrap();

        assert_eq!(entity.node_count, 4);
        assert_eq!(entity.fields.len(), 3);
        assert_eq!(entity.fields[TITLE_FIELD].fill_rate, 0.75);
        assert_eq!(entity.fields["age"].fill_rate, 0.25);
        assert_eq!(entity.fields[CONTENT_FIELD].fill_rate, 0.25);
        assert!(!entity.fields.contains_key("alias"));
        assert!((entity.fields["age"].importance - 2.0).abs() < 1e-12);

        let order: Vec<&str> = entity.fields.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["age", TITLE_FIELD, CONTENT_FIELD]);
    }

    #[test]
    fn test_category_without_filled_fields() {
        let nodes = vec![IntelNode::new("x", NodeCategory::Note)];
        let stats = AttributeStatistics::learn(&nodes);

        assert_eq!(stats.category_count(), 1);
        assert!(stats.category(NodeCategory::Note).is_none());
        assert!(stats.category(NodeCategory::Entity).is_none());
        assert_eq!(stats.information_density(&nodes), 0.5);
    }

    #[test]
    fn test_information_density() {
        let nodes = vec![
            IntelNode::new("a", NodeCategory::Domain)
                .with_title("example.org")
                .with_attribute("registrar", "Acme"),
            IntelNode::new("b", NodeCategory::Domain).with_title("example.net"),
        ];
        let stats = AttributeStatistics::learn(&nodes);

        // Known fields: _title, registrar -> 4 slots, 3 filled
        assert!((stats.information_density(&nodes) - 0.75).abs() < 1e-12);
    }
}
