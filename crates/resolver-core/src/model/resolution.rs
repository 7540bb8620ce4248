//! Resultado de una resolución.
//!
//! Contrato todo-o-nada: o bien TODOS los canales quedan resueltos y se
//! entrega el mapping completo, o bien se entrega `Unresolved` sin ningún
//! artifact. Los `Shortfall` sólo describen qué canal no alcanzó el mínimo
//! (conteos), nunca exponen resultados parciales.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Artifact;
use crate::hashing::hash_value;

/// Canal -> artifacts. Conserva el orden de inserción de los canales.
pub type ArtifactMap = IndexMap<String, Vec<Artifact>>;

/// Canal que no alcanzó la cantidad requerida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub channel: String,
    pub found: usize,
    pub required: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Resolved(ArtifactMap),
    Unresolved { shortfalls: Vec<Shortfall> },
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn artifacts(&self) -> Option<&ArtifactMap> {
        match self {
            Resolution::Resolved(map) => Some(map),
            Resolution::Unresolved { .. } => None,
        }
    }

    pub fn shortfalls(&self) -> &[Shortfall] {
        match self {
            Resolution::Resolved(_) => &[],
            Resolution::Unresolved { shortfalls } => shortfalls,
        }
    }

    /// Hash estable de los ids resueltos por canal (`{canal: [ids...]}` en
    /// JSON canónico). Dos resoluciones con los mismos ids en el mismo orden
    /// producen el mismo fingerprint. `None` si no hay resolución.
    pub fn fingerprint(&self) -> Option<String> {
        let map = self.artifacts()?;
        let mut obj = Map::new();
        for (channel, artifacts) in map {
            let ids: Vec<Value> = artifacts.iter()
                                           .map(|a| a.id.map_or(Value::Null, |id| Value::from(id.get())))
                                           .collect();
            obj.insert(channel.clone(), Value::Array(ids));
        }
        Some(hash_value(&Value::Object(obj)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(ids: &[i64]) -> ArtifactMap {
        let mut m = ArtifactMap::new();
        m.insert("model".into(), ids.iter().map(|i| Artifact::new("Model", format!("/m/{i}")).with_id(*i)).collect());
        m
    }

    #[test]
    fn fingerprint_tracks_selected_ids_not_uris() {
        let a = Resolution::Resolved(map_of(&[7, 3]));
        let mut b_map = map_of(&[7, 3]);
        b_map["model"][0].uri = "/elsewhere".into();
        let b = Resolution::Resolved(b_map);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), Resolution::Resolved(map_of(&[7])).fingerprint());
    }

    #[test]
    fn unresolved_has_no_artifacts_nor_fingerprint() {
        let r = Resolution::Unresolved { shortfalls: vec![Shortfall { channel: "model".into(), found: 0, required: 1 }] };
        assert!(!r.is_resolved());
        assert!(r.artifacts().is_none());
        assert!(r.fingerprint().is_none());
        assert_eq!(r.shortfalls().len(), 1);
    }
}
