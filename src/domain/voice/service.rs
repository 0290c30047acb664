use super::error::VoiceServiceError;
use super::{
    SpeakingRate, SpeechRequest, VoicePreviewRequest, PREVIEW_FALLBACK_TEXT, PREVIEW_TEXT_LIMIT,
};
use crate::domain::artifact::{ArtifactId, ArtifactKind, StoredArtifact};
use crate::infrastructure::repositories::{ArtifactRepository, TtsRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct VoicePreview {
    pub artifact: StoredArtifact,
    pub audio_data: Vec<u8>,
    pub voice: String,
}

#[derive(Debug, Clone)]
pub struct Voiceover {
    pub artifact: StoredArtifact,
    pub voice: String,
    pub size_bytes: usize,
}

pub struct VoiceService {
    tts_repo: Arc<dyn TtsRepository>,
    artifact_repo: Arc<ArtifactRepository>,
    default_voice: String,
}

impl VoiceService {
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        artifact_repo: Arc<ArtifactRepository>,
        default_voice: String,
    ) -> Self {
        Self {
            tts_repo,
            artifact_repo,
            default_voice,
        }
    }
}

#[async_trait]
pub trait VoiceServiceApi: Send + Sync {
    /// Synthesize a short sample of a voice.
    ///
    /// Speaks at most the first 100 characters of the text and stores the
    /// audio as `preview_<unix-seconds>.mp3`.
    async fn preview(&self, request: VoicePreviewRequest) -> Result<VoicePreview, VoiceServiceError>;

    /// Synthesize a whole script and store it as the voice-over for `id`
    async fn narrate(
        &self,
        id: &ArtifactId,
        script: String,
        voice: Option<String>,
        rate: SpeakingRate,
    ) -> Result<Voiceover, VoiceServiceError>;
}

#[async_trait]
impl VoiceServiceApi for VoiceService {
    async fn preview(&self, request: VoicePreviewRequest) -> Result<VoicePreview, VoiceServiceError> {
        let id = ArtifactId::from_unix_seconds(&Utc::now());
        let speech = SpeechRequest {
            text: preview_text(request.text.as_deref().unwrap_or_default()),
            voice: self.resolve_voice(request.voice),
            rate: SpeakingRate::from(request.rate),
        };

        let audio_data = self.synthesize(&speech).await?;
        let artifact = self
            .artifact_repo
            .save(ArtifactKind::Preview, &id, &audio_data)
            .await?;

        Ok(VoicePreview {
            artifact,
            audio_data,
            voice: speech.voice,
        })
    }

    async fn narrate(
        &self,
        id: &ArtifactId,
        script: String,
        voice: Option<String>,
        rate: SpeakingRate,
    ) -> Result<Voiceover, VoiceServiceError> {
        let speech = SpeechRequest {
            text: script,
            voice: self.resolve_voice(voice),
            rate,
        };

        let audio_data = self.synthesize(&speech).await?;
        let artifact = self
            .artifact_repo
            .save(ArtifactKind::Voiceover, id, &audio_data)
            .await?;

        Ok(Voiceover {
            artifact,
            voice: speech.voice,
            size_bytes: audio_data.len(),
        })
    }
}

impl VoiceService {
    /// Empty voice ids fall back to the configured default
    fn resolve_voice(&self, voice: Option<String>) -> String {
        voice
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.default_voice.clone())
    }

    async fn synthesize(&self, speech: &SpeechRequest) -> Result<Vec<u8>, VoiceServiceError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            provider = self.tts_repo.provider_name(),
            voice = %speech.voice,
            rate = %speech.rate,
            text_length = speech.text.chars().count(),
            "Starting speech synthesis"
        );

        let audio_data = self
            .tts_repo
            .synthesize(speech)
            .await
            .map_err(VoiceServiceError::Dependency)?;

        tracing::info!(
            provider = self.tts_repo.provider_name(),
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_data.len(),
            "Speech synthesis completed"
        );

        Ok(audio_data)
    }
}

/// First 100 characters of `text`, or the fallback sentence when empty
fn preview_text(text: &str) -> String {
    let truncated: String = text.chars().take(PREVIEW_TEXT_LIMIT).collect();
    if truncated.is_empty() {
        PREVIEW_FALLBACK_TEXT.to_string()
    } else {
        truncated
    }
}
