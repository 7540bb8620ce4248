use log::debug;
use resolver_core::{ArtifactMap, ResolveError, Resolution};

use crate::latest::keyed_by_id;
use crate::params::StrategyConfig;
use crate::strategy::ResolverStrategy;

/// Estrategia que acepta todos los candidatos de cada canal, ordenados por
/// id descendente. No impone mínimo: siempre resuelve (un canal vacío queda
/// vacío).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllArtifactsStrategy;

impl AllArtifactsStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl ResolverStrategy for AllArtifactsStrategy {
    fn id(&self) -> &'static str {
        "all_artifacts"
    }

    fn params(&self) -> StrategyConfig {
        StrategyConfig::All
    }

    fn resolve(&self, input: &ArtifactMap) -> Result<Resolution, ResolveError> {
        let mut resolved = ArtifactMap::with_capacity(input.len());
        for (channel, candidates) in input {
            let mut keyed = keyed_by_id(channel, candidates)?;
            keyed.sort_by(|a, b| b.0.cmp(&a.0));
            resolved.insert(channel.clone(), keyed.into_iter().map(|(_, a)| a.clone()).collect());
        }
        debug!("all_artifacts: resolved {} channel(s)", resolved.len());
        Ok(Resolution::Resolved(resolved))
    }
}
