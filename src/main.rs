//! Demo: resuelve el último modelo y los últimos ejemplos contra una store
//! en memoria, con la configuración tomada de `RESOLVER_DESIRED_COUNT` /
//! `RESOLVER_STRATEGY` (o `.env`).
use artifact_resolver::{resolver_from_config, Artifact, Channel, InMemoryMetadataStore, Resolution, ResolverConfig};

fn seed_store() -> InMemoryMetadataStore {
    let mut store = InMemoryMetadataStore::default();
    for run in 0..3 {
        store.register(Artifact::new("Examples", format!("/pipeline/example_gen/{run}/examples")).with_producer("example_gen", "examples"));
        store.register(Artifact::new("Model", format!("/pipeline/trainer/{run}/model")).with_producer("trainer", "model"));
    }
    store
}

fn main() {
    let config = match ResolverConfig::from_env() {
        Ok(c) => c,
        Err(e) => { eprintln!("[resolve-demo] configuración inválida: {e}"); std::process::exit(2); }
    };
    let channels = [("examples", Channel::of_type("Examples").produced_by("example_gen", "examples")),
                    ("model", Channel::of_type("Model").produced_by("trainer", "model"))];
    let resolver = match resolver_from_config("latest_inputs_resolver", &config, channels) {
        Ok(r) => r,
        Err(e) => { eprintln!("[resolve-demo] resolver inválido: {e}"); std::process::exit(2); }
    };

    let store = seed_store();
    match resolver.resolve(&store) {
        Ok(outcome) => {
            match &outcome.resolution {
                Resolution::Resolved(map) => {
                    for (channel, artifacts) in map {
                        let uris: Vec<&str> = artifacts.iter().map(|a| a.uri.as_str()).collect();
                        println!("{channel}: {uris:?}");
                    }
                    println!("fingerprint={}", outcome.resolution.fingerprint().unwrap_or_default());
                }
                Resolution::Unresolved { shortfalls } => {
                    for s in shortfalls {
                        println!("sin resolver: canal={} encontrados={} requeridos={}", s.channel, s.found, s.required);
                    }
                }
            }
            println!("policy={} params_hash={}", outcome.policy_id, outcome.params_hash);
        }
        Err(e) => { eprintln!("[resolve-demo] error: {e}"); std::process::exit(5); }
    }
}
