//! Flujo completo: config -> estrategia -> resolver -> store en memoria.

use resolver_core::{Artifact, Channel, InMemoryMetadataStore, ResolveError, ResolverConfig, StrategyKind};
use resolver_strategies::{build_strategy, params_hash, AllArtifactsStrategy, LatestArtifactStrategy, Resolver, StrategyConfig};

fn seeded_store() -> InMemoryMetadataStore {
    let mut store = InMemoryMetadataStore::default();
    for i in 0..3 {
        store.register(Artifact::new("Model", format!("/trainer/model/{i}")).with_producer("trainer", "model"));
    }
    store.register(Artifact::new("Examples", "/gen/examples/0").with_producer("example_gen", "examples"));
    store
}

#[test]
fn resolver_from_config_picks_latest_two_models() {
    let cfg = ResolverConfig { desired_count: 2, strategy: StrategyKind::Latest };
    let sc = StrategyConfig::from(&cfg);
    let resolver = Resolver::builder("latest_model_resolver").boxed_strategy(build_strategy(&sc).expect("valid config"))
                                                             .channel("model", Channel::of_type("Model").produced_by("trainer", "model"))
                                                             .build()
                                                             .expect("build");
    let outcome = resolver.resolve(&seeded_store()).expect("resolve");
    let uris: Vec<&str> = outcome.resolution.artifacts().expect("resolved")["model"].iter().map(|a| a.uri.as_str()).collect();
    assert_eq!(uris, vec!["/trainer/model/2", "/trainer/model/1"]);
    assert_eq!(outcome.params_hash, params_hash(&sc).expect("hash"));
}

#[test]
fn one_missing_channel_blocks_every_channel() {
    let resolver = Resolver::builder("r").strategy(LatestArtifactStrategy::new(1).expect("valid"))
                                         .channel("model", Channel::of_type("Model"))
                                         .channel("schema", Channel::of_type("Schema"))
                                         .build()
                                         .expect("build");
    let outcome = resolver.resolve(&seeded_store()).expect("resolve");
    assert!(outcome.resolution.artifacts().is_none());
    assert_eq!(outcome.resolution.shortfalls().len(), 1);
    assert_eq!(outcome.resolution.shortfalls()[0].channel, "schema");
}

#[test]
fn unregistered_artifact_in_store_is_integrity_error() {
    let mut store = seeded_store();
    store.insert_raw(Artifact::new("Model", "/trainer/model/pending"));
    let resolver = Resolver::builder("r").strategy(LatestArtifactStrategy::default())
                                         .channel("model", Channel::of_type("Model"))
                                         .build()
                                         .expect("build");
    let err = resolver.resolve(&store).expect_err("integrity error");
    assert_eq!(err, ResolveError::MissingArtifactId { channel: "model".into(), position: 3 });
}

#[test]
fn same_store_state_gives_same_fingerprint() {
    let store = seeded_store();
    let resolver = Resolver::builder("r").strategy(AllArtifactsStrategy::new())
                                         .channel("model", Channel::of_type("Model"))
                                         .channel("examples", Channel::of_type("Examples"))
                                         .build()
                                         .expect("build");
    let a = resolver.resolve(&store).expect("resolve");
    let b = resolver.resolve(&store).expect("resolve");
    assert!(a.resolution.fingerprint().is_some());
    assert_eq!(a.resolution.fingerprint(), b.resolution.fingerprint());
    assert_eq!(a.resolution.artifacts().expect("resolved")["model"].len(), 3);
}
