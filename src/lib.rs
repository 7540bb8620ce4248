//! artifact-resolver
//!
//! Fachada de los crates del workspace:
//! - `resolver_core`: modelo (artifacts, canales, resolución), errores, store y config.
//! - `resolver_strategies`: estrategias de resolución y el nodo `Resolver`.
//!
//! Puede usarse desde `main.rs` o por la orquestación que decida cuándo
//! reintentar una resolución `Unresolved`.

pub use resolver_core;
pub use resolver_strategies;

pub use resolver_core::{Artifact, ArtifactId, ArtifactMap, Channel, InMemoryMetadataStore, MetadataStore, ResolveError, Resolution, ResolverConfig};
pub use resolver_strategies::{build_strategy, select_latest, LatestArtifactStrategy, Resolver, ResolverOutcome, ResolverStrategy, StrategyConfig};

/// Construye un `Resolver` con la estrategia que indica `config` y los
/// canales dados (en ese orden).
pub fn resolver_from_config<I, S>(instance_name: &str, config: &ResolverConfig, channels: I) -> Result<Resolver, ResolveError>
    where I: IntoIterator<Item = (S, Channel)>,
          S: Into<String>
{
    let strategy = build_strategy(&StrategyConfig::from(config))?;
    channels.into_iter()
            .fold(Resolver::builder(instance_name).boxed_strategy(strategy), |b, (name, ch)| b.channel(name, ch))
            .build()
}
