//! Contrato de la metadata store consumida por el resolver.
//!
//! La store es un colaborador externo: se inyecta explícitamente en cada
//! llamada (`&dyn MetadataStore`), nunca como estado global.
use chrono::Utc;

use crate::errors::StoreError;
use crate::model::{Artifact, ArtifactId, Channel};

/// Fuente de candidatos por canal.
pub trait MetadataStore {
    /// Devuelve los artifacts actuales que satisfacen el filtro del canal.
    /// El orden devuelto no está garantizado.
    fn get_artifacts(&self, channel: &Channel) -> Result<Vec<Artifact>, StoreError>;
}

/// Store en memoria para tests y demos. Asigna ids crecientes al registrar,
/// igual que una store real al publicar un artifact.
#[derive(Debug, Default)]
pub struct InMemoryMetadataStore {
    inner: Vec<Artifact>,
    last_id: i64,
}

impl InMemoryMetadataStore {
    /// Registra el artifact asignándole el siguiente id; devuelve la copia registrada.
    pub fn register(&mut self, artifact: Artifact) -> Artifact {
        self.last_id += 1;
        let mut registered = artifact;
        registered.id = Some(ArtifactId::new(self.last_id));
        registered.created_at.get_or_insert_with(Utc::now);
        self.inner.push(registered.clone());
        registered
    }

    /// Inserta el artifact tal cual (con o sin id). Útil para simular datos
    /// ya existentes o corruptos.
    pub fn insert_raw(&mut self, artifact: Artifact) {
        if let Some(id) = artifact.id {
            self.last_id = self.last_id.max(id.get());
        }
        self.inner.push(artifact);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn get_artifacts(&self, channel: &Channel) -> Result<Vec<Artifact>, StoreError> {
        Ok(self.inner.iter().filter(|a| channel.matches(a)).cloned().collect())
    }
}
