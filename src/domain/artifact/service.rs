use super::error::ArtifactServiceError;
use super::model::{ArtifactId, ArtifactKind, StoredArtifact};
use crate::infrastructure::repositories::ArtifactRepository;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ArtifactDownload {
    pub artifact: StoredArtifact,
    pub data: Vec<u8>,
}

pub struct ArtifactService {
    artifact_repo: Arc<ArtifactRepository>,
}

impl ArtifactService {
    pub fn new(artifact_repo: Arc<ArtifactRepository>) -> Self {
        Self { artifact_repo }
    }
}

#[async_trait]
pub trait ArtifactServiceApi: Send + Sync {
    /// Find the downloadable artifact for a path-supplied timestamp.
    ///
    /// The placeholder video wins over the voice-over audio. Ids that are
    /// not well formed resolve to `None` without touching the filesystem.
    async fn locate(&self, raw_id: &str) -> Result<Option<StoredArtifact>, ArtifactServiceError>;

    /// Locate and read an artifact
    async fn fetch(&self, raw_id: &str) -> Result<ArtifactDownload, ArtifactServiceError>;
}

#[async_trait]
impl ArtifactServiceApi for ArtifactService {
    async fn locate(&self, raw_id: &str) -> Result<Option<StoredArtifact>, ArtifactServiceError> {
        let Some(id) = ArtifactId::parse(raw_id) else {
            tracing::warn!(artifact_id = raw_id, "Rejected malformed artifact id");
            return Ok(None);
        };

        for kind in ArtifactKind::DOWNLOADABLE {
            if let Some(artifact) = self.artifact_repo.find(kind, &id).await? {
                return Ok(Some(artifact));
            }
        }

        Ok(None)
    }

    async fn fetch(&self, raw_id: &str) -> Result<ArtifactDownload, ArtifactServiceError> {
        let artifact = self
            .locate(raw_id)
            .await?
            .ok_or(ArtifactServiceError::NotFound)?;

        let data = self.artifact_repo.read(&artifact).await?;

        tracing::info!(
            artifact_id = %artifact.id,
            kind = ?artifact.kind,
            size_bytes = data.len(),
            "Serving artifact"
        );

        Ok(ArtifactDownload { artifact, data })
    }
}
