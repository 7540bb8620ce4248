//! Estrategia "últimos N": por cada canal elige los `n` artifacts con id más
//! alto y sólo resuelve si TODOS los canales alcanzan `n`.

use std::num::NonZeroUsize;

use log::{debug, warn};
use resolver_core::{Artifact, ArtifactId, ArtifactMap, ResolveError, Resolution, Shortfall};

use crate::params::{LatestArtifactParams, StrategyConfig};
use crate::strategy::ResolverStrategy;

/// Selecciona, por canal, los `desired_count` artifacts más recientes.
///
/// - Orden: id descendente; ante ids repetidos se conserva el orden de
///   entrada (sort estable).
/// - Recorte: `min(len, desired_count)` por canal.
/// - Todo-o-nada: si algún canal queda con menos de `desired_count`, el
///   resultado es `Unresolved` y no se entrega ningún artifact.
///
/// Un mapping sin canales resuelve a un mapping vacío.
pub fn select_latest(input: &ArtifactMap, desired_count: usize) -> Result<Resolution, ResolveError> {
    if desired_count == 0 {
        return Err(ResolveError::InvalidDesiredCount(0));
    }

    let mut resolved = ArtifactMap::with_capacity(input.len());
    let mut shortfalls = Vec::new();
    for (channel, candidates) in input {
        let mut keyed = keyed_by_id(channel, candidates)?;
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        let latest: Vec<Artifact> = keyed.into_iter().take(desired_count).map(|(_, a)| a.clone()).collect();
        if latest.len() < desired_count {
            shortfalls.push(Shortfall { channel: channel.clone(),
                                        found: latest.len(),
                                        required: desired_count });
        }
        resolved.insert(channel.clone(), latest);
    }

    if shortfalls.is_empty() {
        debug!("latest-{desired_count}: resolved {} channel(s)", resolved.len());
        Ok(Resolution::Resolved(resolved))
    } else {
        debug!("latest-{desired_count}: unresolved, shortfalls={shortfalls:?}");
        Ok(Resolution::Unresolved { shortfalls })
    }
}

/// Empareja cada candidato con su id; un artifact sin id es error de integridad.
pub(crate) fn keyed_by_id<'a>(channel: &str, candidates: &'a [Artifact]) -> Result<Vec<(ArtifactId, &'a Artifact)>, ResolveError> {
    candidates.iter()
              .enumerate()
              .map(|(position, artifact)| match artifact.id {
                  Some(id) => Ok((id, artifact)),
                  None => {
                      warn!("artifact without id in channel '{channel}' (position {position}, uri={})", artifact.uri);
                      Err(ResolveError::MissingArtifactId { channel: channel.to_string(),
                                                            position })
                  }
              })
              .collect()
}

/// Estrategia que resuelve los últimos n (=1 por defecto) artifacts de cada canal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatestArtifactStrategy {
    desired_num_of_artifacts: NonZeroUsize,
}

impl LatestArtifactStrategy {
    /// Valida `desired_num_of_artifacts` (> 0); un valor inválido es un
    /// error de configuración.
    pub fn new(desired_num_of_artifacts: i64) -> Result<Self, ResolveError> {
        usize::try_from(desired_num_of_artifacts).ok()
                                                 .and_then(NonZeroUsize::new)
                                                 .map(|n| Self { desired_num_of_artifacts: n })
                                                 .ok_or(ResolveError::InvalidDesiredCount(desired_num_of_artifacts))
    }

    pub fn desired_num_of_artifacts(&self) -> usize {
        self.desired_num_of_artifacts.get()
    }
}

impl Default for LatestArtifactStrategy {
    fn default() -> Self {
        // n = 1
        Self { desired_num_of_artifacts: NonZeroUsize::MIN }
    }
}

impl ResolverStrategy for LatestArtifactStrategy {
    fn id(&self) -> &'static str {
        "latest_artifact"
    }

    fn params(&self) -> StrategyConfig {
        let n = i64::try_from(self.desired_num_of_artifacts()).unwrap_or(i64::MAX);
        StrategyConfig::Latest(LatestArtifactParams { desired_num_of_artifacts: n })
    }

    fn resolve(&self, input: &ArtifactMap) -> Result<Resolution, ResolveError> {
        select_latest(input, self.desired_num_of_artifacts())
    }
}
