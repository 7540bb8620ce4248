use std::fmt::Debug;

use resolver_core::{ArtifactMap, ResolveError, Resolution};

use crate::params::StrategyConfig;

/// Contrato de estrategias de resolución intercambiables.
///
/// Implementaciones deben ser puras: mismo input -> mismo resultado, sin
/// mutar las listas recibidas ni inventar artifacts.
pub trait ResolverStrategy: Send + Sync + Debug {
    /// id estático de la estrategia.
    fn id(&self) -> &'static str;

    /// Parámetros efectivos (para auditoría vía `params_hash`).
    fn params(&self) -> StrategyConfig;

    fn resolve(&self, input: &ArtifactMap) -> Result<Resolution, ResolveError>;
}
