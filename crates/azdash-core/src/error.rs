use thiserror::Error;

use crate::model::{ResourceKind, VmAction};

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("{0}")]
    SnapshotLoad(String),

    #[error("{reason}")]
    Action { action: VmAction, reason: String },

    #[error("Resource {name} not found")]
    ResourceNotFound { kind: ResourceKind, name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
