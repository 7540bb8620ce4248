//! Errores del resolver.
//!
//! `Unresolved` NO es un error: se representa con `Resolution::Unresolved`.
//! Aquí sólo viven las fallas que el caller debe tratar como defecto de
//! configuración, de datos o de la store.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ResolveError {
    #[error("desired count must be a positive integer, got {0}")]
    InvalidDesiredCount(i64),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("artifact without id in channel '{channel}' at position {position}")]
    MissingArtifactId { channel: String, position: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fallas de la metadata store (colaborador externo).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("query failed for type '{type_name}': {reason}")]
    Query { type_name: String, reason: String },
}
