use crate::domain::artifact::{ArtifactId, ArtifactKind, StoredArtifact};
use std::io;
use std::path::{Path, PathBuf};

/// Flat-directory store for generated audio and placeholder files
pub struct ArtifactRepository {
    audio_dir: PathBuf,
    output_dir: PathBuf,
}

impl ArtifactRepository {
    pub fn new(audio_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            audio_dir: audio_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create both directories if they are missing
    pub async fn ensure_directories(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.audio_dir).await?;
        tokio::fs::create_dir_all(&self.output_dir).await?;
        Ok(())
    }

    /// Whether both directories exist
    pub async fn is_available(&self) -> bool {
        is_dir(&self.audio_dir).await && is_dir(&self.output_dir).await
    }

    pub fn path_for(&self, kind: ArtifactKind, id: &ArtifactId) -> PathBuf {
        let dir = match kind {
            ArtifactKind::Preview | ArtifactKind::Voiceover => &self.audio_dir,
            ArtifactKind::Placeholder => &self.output_dir,
        };
        dir.join(kind.file_name(id))
    }

    /// Write an artifact, replacing any file with the same id
    pub async fn save(
        &self,
        kind: ArtifactKind,
        id: &ArtifactId,
        contents: &[u8],
    ) -> io::Result<StoredArtifact> {
        let path = self.path_for(kind, id);
        tokio::fs::write(&path, contents).await?;

        tracing::debug!(
            artifact_id = %id,
            kind = ?kind,
            path = %path.display(),
            size_bytes = contents.len(),
            "Artifact saved"
        );

        Ok(StoredArtifact {
            id: id.clone(),
            kind,
            path,
        })
    }

    pub async fn find(&self, kind: ArtifactKind, id: &ArtifactId) -> io::Result<Option<StoredArtifact>> {
        let path = self.path_for(kind, id);

        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(Some(StoredArtifact {
                id: id.clone(),
                kind,
                path,
            })),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn read(&self, artifact: &StoredArtifact) -> io::Result<Vec<u8>> {
        tokio::fs::read(&artifact.path).await
    }
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
