//! resolver-strategies – estrategias de resolución de inputs por canal.
//!
//! Provee el contrato `ResolverStrategy`, la estrategia "últimos N"
//! (`LatestArtifactStrategy`), una estrategia que acepta todos los
//! candidatos y el nodo `Resolver` que consulta la metadata store y aplica
//! la estrategia configurada.

pub mod all;
pub mod latest;
pub mod params;
pub mod resolver;
pub mod strategy;

pub use all::AllArtifactsStrategy;
pub use latest::{select_latest, LatestArtifactStrategy};
pub use params::{build_strategy, params_hash, LatestArtifactParams, StrategyConfig};
pub use resolver::{Resolver, ResolverBuilder, ResolverOutcome};
pub use strategy::ResolverStrategy;
