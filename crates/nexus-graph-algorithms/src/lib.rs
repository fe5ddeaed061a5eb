pub mod common;
pub mod community;
pub mod pagerank;
pub mod topology;
pub mod distribution;

pub use common::GraphView;
pub use community::{
    connected_components, label_propagation, ComponentsResult, LabelPropagationConfig,
    LabelPropagationResult,
};
pub use pagerank::{degree_centrality, normalize_by_max, page_rank, PageRankConfig};
pub use topology::{clustering_coefficients, count_triangles};
pub use distribution::{gini_coefficient, mean};
