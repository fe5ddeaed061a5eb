//! Analysis configuration
//!
//! Defaults reproduce the engine's reference heuristics exactly. A YAML file
//! can override any subset of fields.

use crate::algo::{CentralityConfig, KeyNodeConfig, LabelPropagationConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Weights of the three completeness axes in the geometric mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletenessWeights {
    pub relation: f64,
    pub attribute: f64,
    pub structure: f64,
}

impl Default for CompletenessWeights {
    fn default() -> Self {
        Self {
            relation: 0.30,
            attribute: 0.40,
            structure: 0.30,
        }
    }
}

impl CompletenessWeights {
    pub fn as_array(&self) -> [f64; 3] {
        [self.relation, self.attribute, self.structure]
    }
}

/// Configuration for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub label_propagation: LabelPropagationConfig,
    pub centrality: CentralityConfig,
    pub key_nodes: KeyNodeConfig,
    pub completeness: CompletenessWeights,
    /// Cap on missing-relation and sparse-attribute suggestions per node
    pub max_suggestions: usize,
    /// Nodes scoring at or above this are left out of the prioritized list
    pub suggestion_cutoff: f64,
    /// Fixed seed for label propagation; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            label_propagation: LabelPropagationConfig::default(),
            centrality: CentralityConfig::default(),
            key_nodes: KeyNodeConfig::default(),
            completeness: CompletenessWeights::default(),
            max_suggestions: 5,
            suggestion_cutoff: 0.8,
            seed: None,
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with a fixed label propagation seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Check that every parameter keeps the scores inside [0, 1]
    pub fn validate(&self) -> ConfigResult<()> {
        let damping = self.centrality.page_rank.damping_factor;
        if !(0.0..1.0).contains(&damping) {
            return Err(ConfigError::Invalid(format!(
                "damping_factor must be in [0, 1), got {}",
                damping
            )));
        }

        let degree_weight = self.centrality.degree_weight;
        let page_rank_weight = self.centrality.page_rank_weight;
        if !degree_weight.is_finite()
            || !page_rank_weight.is_finite()
            || degree_weight < 0.0
            || page_rank_weight < 0.0
            || (degree_weight + page_rank_weight - 1.0).abs() > 1e-9
        {
            return Err(ConfigError::Invalid(format!(
                "centrality weights must be non-negative and sum to 1, got {} + {}",
                degree_weight, page_rank_weight
            )));
        }

        let floor = self.centrality.normalization_floor;
        if !floor.is_finite() || floor <= 0.0 {
            return Err(ConfigError::Invalid(
                "normalization_floor must be positive and finite".to_string(),
            ));
        }

        let weights = self.completeness.as_array();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0)
            || weights.iter().sum::<f64>() <= 0.0
        {
            return Err(ConfigError::Invalid(
                "completeness weights must be finite and non-negative with a positive sum".to_string(),
            ));
        }

        for (name, value) in [
            ("key_nodes.absolute_floor", self.key_nodes.absolute_floor),
            ("key_nodes.percentile", self.key_nodes.percentile),
            ("suggestion_cutoff", self.suggestion_cutoff),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
