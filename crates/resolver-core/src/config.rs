//! Carga de configuración del resolver desde variables de entorno.
//! Usa `RESOLVER_DESIRED_COUNT` y `RESOLVER_STRATEGY`; ver `constants`.
//!
//! Un valor ausente toma el default; un valor presente pero inválido es un
//! error de configuración (nunca se reemplaza en silencio por el default).

use std::env;
use std::fmt;
use std::str::FromStr;

use dotenvy::dotenv;
use log::debug;
use once_cell::sync::Lazy;

use crate::constants::{DESIRED_COUNT_DEFAULT, ENV_DESIRED_COUNT, ENV_STRATEGY};
use crate::errors::ResolveError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Estrategias conocidas por nombre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Latest,
    All,
}

impl FromStr for StrategyKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(StrategyKind::Latest),
            "all" => Ok(StrategyKind::All),
            other => Err(ResolveError::InvalidConfig(format!("unknown strategy '{other}'"))),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Latest => f.write_str("latest"),
            StrategyKind::All => f.write_str("all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub desired_count: usize,
    pub strategy: StrategyKind,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { desired_count: DESIRED_COUNT_DEFAULT,
               strategy: StrategyKind::Latest }
    }
}

impl ResolverConfig {
    pub fn from_env() -> Result<Self, ResolveError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de una función arbitraria (tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ResolveError>
        where F: Fn(&str) -> Option<String>
    {
        let desired_count = match lookup(ENV_DESIRED_COUNT) {
            Some(raw) => parse_desired_count(&raw)?,
            None => DESIRED_COUNT_DEFAULT,
        };
        let strategy = match lookup(ENV_STRATEGY) {
            Some(raw) => raw.parse()?,
            None => StrategyKind::Latest,
        };
        debug!("resolver config: desired_count={desired_count} strategy={strategy}");
        Ok(Self { desired_count, strategy })
    }
}

/// Valida un conteo textual: debe ser entero y > 0.
pub fn parse_desired_count(raw: &str) -> Result<usize, ResolveError> {
    let n: i64 = raw.trim()
                    .parse()
                    .map_err(|e| ResolveError::InvalidConfig(format!("{ENV_DESIRED_COUNT}='{raw}': {e}")))?;
    usize::try_from(n).ok().filter(|n| *n > 0).ok_or(ResolveError::InvalidDesiredCount(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let m: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| m.get(k).cloned()
    }

    #[test]
    fn missing_values_use_defaults() {
        let cfg = ResolverConfig::from_lookup(lookup_from(&[])).expect("defaults");
        assert_eq!(cfg, ResolverConfig::default());
        assert_eq!(cfg.desired_count, 1);
    }

    #[test]
    fn explicit_values_are_parsed() {
        let cfg = ResolverConfig::from_lookup(lookup_from(&[(ENV_DESIRED_COUNT, " 3 "), (ENV_STRATEGY, "ALL")])).expect("valid");
        assert_eq!(cfg.desired_count, 3);
        assert_eq!(cfg.strategy, StrategyKind::All);
    }

    #[test]
    fn non_positive_count_is_rejected_not_coerced() {
        let zero = ResolverConfig::from_lookup(lookup_from(&[(ENV_DESIRED_COUNT, "0")]));
        assert_eq!(zero, Err(ResolveError::InvalidDesiredCount(0)));
        let neg = ResolverConfig::from_lookup(lookup_from(&[(ENV_DESIRED_COUNT, "-2")]));
        assert_eq!(neg, Err(ResolveError::InvalidDesiredCount(-2)));
        let junk = ResolverConfig::from_lookup(lookup_from(&[(ENV_DESIRED_COUNT, "many")]));
        assert!(matches!(junk, Err(ResolveError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let r = ResolverConfig::from_lookup(lookup_from(&[(ENV_STRATEGY, "latest_span")]));
        assert!(matches!(r, Err(ResolveError::InvalidConfig(msg)) if msg.contains("latest_span")));
    }
}
