use serde::{Deserialize, Serialize};

use super::Artifact;

/// Filtro con el que se consultan candidatos a la metadata store.
///
/// La definición y validación de canales pertenecen a la orquestación; aquí
/// sólo se describe qué artifacts fluyen por el slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub type_name: String,
    pub producer: Option<String>,
    pub output_key: Option<String>,
}

impl Channel {
    pub fn of_type(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(),
               producer: None,
               output_key: None }
    }

    /// Restringe el canal a un output concreto de un step.
    pub fn produced_by(mut self, producer: impl Into<String>, output_key: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self.output_key = Some(output_key.into());
        self
    }

    pub fn matches(&self, artifact: &Artifact) -> bool {
        artifact.type_name == self.type_name
            && self.producer.as_ref().map_or(true, |p| artifact.producer.as_ref() == Some(p))
            && self.output_key.as_ref().map_or(true, |k| artifact.output_key.as_ref() == Some(k))
    }
}
