use super::dto::{VideoGenerationRequest, DEFAULT_MOOD};
use super::error::VideoServiceError;
use crate::domain::artifact::{ArtifactId, ArtifactKind, StoredArtifact};
use crate::domain::voice::{SpeakingRate, VoiceService, VoiceServiceApi, Voiceover};
use crate::infrastructure::repositories::ArtifactRepository;
use async_trait::async_trait;
use chrono::Local;
use std::sync::Arc;

/// Characters of the script quoted in the placeholder file
const SCRIPT_PREVIEW_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct GeneratedVideo {
    pub id: ArtifactId,
    pub voiceover: Voiceover,
    pub placeholder: StoredArtifact,
}

impl GeneratedVideo {
    pub fn download_path(&self) -> String {
        format!("/download/{}", self.id)
    }
}

pub struct VideoService {
    voice_service: Arc<VoiceService>,
    artifact_repo: Arc<ArtifactRepository>,
}

impl VideoService {
    pub fn new(voice_service: Arc<VoiceService>, artifact_repo: Arc<ArtifactRepository>) -> Self {
        Self {
            voice_service,
            artifact_repo,
        }
    }
}

#[async_trait]
pub trait VideoServiceApi: Send + Sync {
    /// Produce the artifacts for a short.
    ///
    /// This operation:
    /// - Narrates the full script into `voiceover_<id>.mp3`
    /// - Writes the placeholder `shorts_<id>.mp4` describing the request
    ///
    /// The id is local time at second resolution.
    async fn generate(
        &self,
        request: VideoGenerationRequest,
    ) -> Result<GeneratedVideo, VideoServiceError>;
}

#[async_trait]
impl VideoServiceApi for VideoService {
    async fn generate(
        &self,
        request: VideoGenerationRequest,
    ) -> Result<GeneratedVideo, VideoServiceError> {
        let id = ArtifactId::from_local_time(&Local::now());
        let script = request.script.unwrap_or_default();
        let mood = request
            .mood
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MOOD.to_string());

        tracing::info!(
            artifact_id = %id,
            script_length = script.chars().count(),
            mood = %mood,
            "Video generation request"
        );

        let voiceover = self
            .voice_service
            .narrate(&id, script.clone(), request.voice, SpeakingRate::from(request.rate))
            .await?;

        let contents = render_placeholder(&id, &voiceover.voice, &mood, &script);
        let placeholder = self
            .artifact_repo
            .save(ArtifactKind::Placeholder, &id, contents.as_bytes())
            .await?;

        tracing::info!(
            artifact_id = %id,
            voiceover_path = %voiceover.artifact.path.display(),
            placeholder_path = %placeholder.path.display(),
            "Video artifacts written"
        );

        Ok(GeneratedVideo {
            id,
            voiceover,
            placeholder,
        })
    }
}

/// Text stored under the `.mp4` name until real rendering exists
pub fn render_placeholder(id: &ArtifactId, voice: &str, mood: &str, script: &str) -> String {
    let script_preview: String = script.chars().take(SCRIPT_PREVIEW_LIMIT).collect();

    format!(
        "🎬 4K YOUTUBE SHORT READY!\n\
         Video ID: {id}\n\
         Voice: {voice}\n\
         Mood: {mood}\n\
         Script Preview: {script_preview}...\n\
         Real MP4 rendering requires FFmpeg (install later)\n\
         \n\
         DOWNLOAD THIS FILE & rename to .mp4"
    )
}
