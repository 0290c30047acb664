use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::sync::Arc;

use crate::{
    domain::voice::{VoicePreviewRequest, VoiceService, VoiceServiceApi},
    error::AppResult,
    infrastructure::http::LenientJson,
};

pub struct VoiceController {
    voice_service: Arc<VoiceService>,
}

impl VoiceController {
    pub fn new(voice_service: Arc<VoiceService>) -> Self {
        Self { voice_service }
    }

    /// POST /api/preview-voice - Synthesize a short voice sample
    pub async fn preview_voice(
        State(controller): State<Arc<VoiceController>>,
        LenientJson(request): LenientJson<VoicePreviewRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let preview = controller.voice_service.preview(request).await?;
        let artifact = &preview.artifact;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(artifact.content_type()),
        );
        if let Ok(disposition) =
            HeaderValue::from_str(&format!("inline; filename=\"{}\"", artifact.download_name()))
        {
            headers.insert(header::CONTENT_DISPOSITION, disposition);
        }
        if let Ok(id) = HeaderValue::from_str(artifact.id.as_str()) {
            headers.insert("x-artifact-id", id);
        }
        if let Ok(voice) = HeaderValue::from_str(&preview.voice) {
            headers.insert("x-voice-used", voice);
        }

        Ok((StatusCode::OK, headers, Body::from(preview.audio_data)))
    }
}
