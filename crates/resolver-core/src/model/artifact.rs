//! Artifact tal como lo entrega la metadata store.
//!
//! El resolver nunca crea ni muta artifacts: sólo reordena y recorta copias
//! de las listas recibidas. La única propiedad que interpreta es `id`:
//! - ids mayores corresponden a artifacts producidos más recientemente.
//! - `id == None` indica un artifact que nunca fue registrado en la store; no
//!   es ordenable y una estrategia lo rechaza como error de integridad.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identificador asignado por la metadata store (monótono creciente).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(i64);

impl ArtifactId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: Option<ArtifactId>,
    pub type_name: String,
    pub uri: String,
    pub producer: Option<String>,   // step que lo produjo
    pub output_key: Option<String>, // nombre del output en ese step
    pub properties: Option<Value>,  // propiedades custom, opacas para el resolver
    pub created_at: Option<DateTime<Utc>>,
}

impl Artifact {
    /// Artifact aún no registrado (sin id).
    pub fn new(type_name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self { id: None,
               type_name: type_name.into(),
               uri: uri.into(),
               producer: None,
               output_key: None,
               properties: None,
               created_at: None }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(ArtifactId::new(id));
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>, output_key: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self.output_key = Some(output_key.into());
        self
    }

    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = Some(properties);
        self
    }
}
