//! Nodo `Resolver`: une canales declarados, una estrategia y la metadata store.
//!
//! Uso típico:
//!
//! ```ignore
//! let resolver = Resolver::builder("latest_model_resolver")
//!     .strategy(LatestArtifactStrategy::default())
//!     .channel("model", Channel::of_type("Model"))
//!     .build()?;
//! let outcome = resolver.resolve(&store)?;
//! ```
//!
//! La store se pasa en cada llamada; el resolver no guarda estado entre
//! resoluciones ni reintenta (eso es política de la orquestación).

use indexmap::IndexMap;
use log::{debug, warn};
use resolver_core::{ArtifactMap, Channel, MetadataStore, ResolveError, Resolution};
use serde::Serialize;

use crate::params::params_hash;
use crate::strategy::ResolverStrategy;

/// Resultado auditable de `Resolver::resolve`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolverOutcome {
    pub instance_name: String,
    pub policy_id: String,
    /// Hash canónico de los parámetros de la estrategia.
    pub params_hash: String,
    pub resolution: Resolution,
}

#[derive(Debug)]
pub struct Resolver {
    instance_name: String,
    strategy: Box<dyn ResolverStrategy>,
    channels: IndexMap<String, Channel>,
}

impl Resolver {
    pub fn builder(instance_name: impl Into<String>) -> ResolverBuilder {
        ResolverBuilder { instance_name: instance_name.into(),
                          strategy: None,
                          channels: Vec::new() }
    }

    pub fn strategy(&self) -> &dyn ResolverStrategy {
        self.strategy.as_ref()
    }

    pub fn channels(&self) -> &IndexMap<String, Channel> {
        &self.channels
    }

    /// Una lectura a la store por canal, en orden de declaración.
    pub fn fetch_inputs(&self, store: &dyn MetadataStore) -> Result<ArtifactMap, ResolveError> {
        let mut input = ArtifactMap::with_capacity(self.channels.len());
        for (name, channel) in &self.channels {
            let candidates = match store.get_artifacts(channel) {
                Ok(c) => c,
                Err(e) => {
                    warn!("[{}] store read failed for channel '{name}': {e}", self.instance_name);
                    return Err(e.into());
                }
            };
            debug!("[{}] channel '{name}': {} candidate(s)", self.instance_name, candidates.len());
            input.insert(name.clone(), candidates);
        }
        Ok(input)
    }

    pub fn resolve(&self, store: &dyn MetadataStore) -> Result<ResolverOutcome, ResolveError> {
        let input = self.fetch_inputs(store)?;
        let resolution = self.strategy.resolve(&input)?;
        if !resolution.is_resolved() {
            debug!("[{}] inputs not ready: {:?}", self.instance_name, resolution.shortfalls());
        }
        Ok(ResolverOutcome { instance_name: self.instance_name.clone(),
                             policy_id: self.strategy.id().to_string(),
                             params_hash: params_hash(&self.strategy.params())?,
                             resolution })
    }
}

/// Builder de `Resolver`. Valida en `build`: estrategia obligatoria y
/// nombres de canal únicos.
#[derive(Debug)]
pub struct ResolverBuilder {
    instance_name: String,
    strategy: Option<Box<dyn ResolverStrategy>>,
    channels: Vec<(String, Channel)>,
}

impl ResolverBuilder {
    pub fn strategy<S>(self, strategy: S) -> Self
        where S: ResolverStrategy + 'static
    {
        self.boxed_strategy(Box::new(strategy))
    }

    /// Variante para estrategias construidas con `build_strategy`.
    pub fn boxed_strategy(mut self, strategy: Box<dyn ResolverStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn channel(mut self, name: impl Into<String>, channel: Channel) -> Self {
        self.channels.push((name.into(), channel));
        self
    }

    pub fn build(self) -> Result<Resolver, ResolveError> {
        let strategy = self.strategy
                           .ok_or_else(|| ResolveError::InvalidConfig(format!("resolver '{}' has no strategy", self.instance_name)))?;
        let mut channels = IndexMap::with_capacity(self.channels.len());
        for (name, channel) in self.channels {
            if channels.contains_key(&name) {
                return Err(ResolveError::InvalidConfig(format!("resolver '{}' declares channel '{name}' twice", self.instance_name)));
            }
            channels.insert(name, channel);
        }
        Ok(Resolver { instance_name: self.instance_name,
                      strategy,
                      channels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latest::LatestArtifactStrategy;
    use resolver_core::{Artifact, InMemoryMetadataStore, StoreError};

    #[derive(Debug)]
    struct DownStore;
    impl MetadataStore for DownStore {
        fn get_artifacts(&self, _channel: &Channel) -> Result<Vec<Artifact>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    #[test]
    fn build_requires_strategy_and_unique_channels() {
        let no_strategy = Resolver::builder("r").channel("model", Channel::of_type("Model")).build();
        assert!(matches!(no_strategy, Err(ResolveError::InvalidConfig(_))));

        let dup = Resolver::builder("r").strategy(LatestArtifactStrategy::default())
                                        .channel("model", Channel::of_type("Model"))
                                        .channel("model", Channel::of_type("Model"))
                                        .build();
        assert!(matches!(dup, Err(ResolveError::InvalidConfig(msg)) if msg.contains("twice")));
    }

    #[test]
    fn store_failure_propagates() {
        let resolver = Resolver::builder("r").strategy(LatestArtifactStrategy::default())
                                             .channel("model", Channel::of_type("Model"))
                                             .build()
                                             .expect("build");
        let err = resolver.resolve(&DownStore).expect_err("store is down");
        assert_eq!(err, ResolveError::Store(StoreError::Unavailable("connection refused".into())));
    }

    #[test]
    fn resolves_latest_model_from_store() {
        let mut store = InMemoryMetadataStore::default();
        store.register(Artifact::new("Model", "/m/1"));
        let newest = store.register(Artifact::new("Model", "/m/2"));
        store.register(Artifact::new("Examples", "/ex/1"));

        let resolver = Resolver::builder("latest_model_resolver").strategy(LatestArtifactStrategy::default())
                                                                 .channel("model", Channel::of_type("Model"))
                                                                 .build()
                                                                 .expect("build");
        let outcome = resolver.resolve(&store).expect("resolve");
        assert_eq!(outcome.instance_name, "latest_model_resolver");
        assert_eq!(outcome.policy_id, "latest_artifact");
        assert_eq!(outcome.resolution.artifacts().expect("resolved")["model"], vec![newest]);
    }
}
