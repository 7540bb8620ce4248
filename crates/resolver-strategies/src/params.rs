//! Parámetros serializables de estrategias.
//!
//! La forma JSON es `{"strategy": "latest", "params": {...}}`, estable para
//! persistirla junto a la definición del pipeline y para hashearla.

use resolver_core::hashing::hash_value;
use resolver_core::{ResolveError, ResolverConfig, StrategyKind};
use serde::{Deserialize, Serialize};

use crate::all::AllArtifactsStrategy;
use crate::latest::LatestArtifactStrategy;
use crate::strategy::ResolverStrategy;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "strategy", content = "params", rename_all = "snake_case")]
pub enum StrategyConfig {
    Latest(LatestArtifactParams),
    All,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatestArtifactParams {
    /// Con signo: valores <= 0 se rechazan en `build_strategy`, no al deserializar.
    #[serde(default = "default_desired")]
    pub desired_num_of_artifacts: i64,
}

fn default_desired() -> i64 {
    1
}

impl Default for LatestArtifactParams {
    fn default() -> Self {
        Self { desired_num_of_artifacts: default_desired() }
    }
}

impl From<&ResolverConfig> for StrategyConfig {
    fn from(cfg: &ResolverConfig) -> Self {
        match cfg.strategy {
            StrategyKind::Latest => {
                let n = i64::try_from(cfg.desired_count).unwrap_or(i64::MAX);
                StrategyConfig::Latest(LatestArtifactParams { desired_num_of_artifacts: n })
            }
            StrategyKind::All => StrategyConfig::All,
        }
    }
}

/// Construye la estrategia descrita por `config`, validando sus parámetros.
pub fn build_strategy(config: &StrategyConfig) -> Result<Box<dyn ResolverStrategy>, ResolveError> {
    match config {
        StrategyConfig::Latest(p) => Ok(Box::new(LatestArtifactStrategy::new(p.desired_num_of_artifacts)?)),
        StrategyConfig::All => Ok(Box::new(AllArtifactsStrategy::new())),
    }
}

/// Hash canónico de parámetros.
pub fn params_hash(config: &StrategyConfig) -> Result<String, ResolveError> {
    let v = serde_json::to_value(config).map_err(|e| ResolveError::InvalidConfig(format!("params serialize: {e}")))?;
    Ok(hash_value(&v))
}
