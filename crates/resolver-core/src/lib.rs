//! resolver-core: modelo neutral para la resolución de inputs por canal.
//!
//! Este crate no decide qué artifacts se eligen (eso vive en
//! `resolver-strategies`); sólo define el vocabulario compartido:
//! artifacts con identificador ordenable, canales, el resultado de una
//! resolución, el contrato de la metadata store y la configuración.
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod store;

pub use config::{ResolverConfig, StrategyKind};
pub use errors::{ResolveError, StoreError};
pub use model::{Artifact, ArtifactId, ArtifactMap, Channel, Resolution, Shortfall};
pub use store::{InMemoryMetadataStore, MetadataStore};
