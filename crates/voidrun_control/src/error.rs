//! Ошибки control слоя

use std::path::PathBuf;

use bevy::prelude::Entity;
use thiserror::Error;

/// Нарушение precondition сцены (не recoverable в рамках frame, entity пропускается)
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    #[error("control {owner:?}: {probe} collider {collider:?} has no Collider component")]
    MissingCollider {
        owner: Entity,
        probe: &'static str,
        collider: Entity,
    },
}

/// Ошибки загрузки settings/tuning
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
