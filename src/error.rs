//! Crate-level error type
//!
//! The analysis itself never fails; errors only come from loading snapshots
//! and configuration files.

use crate::analysis::ConfigError;
use crate::graph::SnapshotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type NexusResult<T> = Result<T, NexusError>;
