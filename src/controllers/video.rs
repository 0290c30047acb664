use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::video::{
        VideoGenerationRequest, VideoGenerationResponse, VideoService, VideoServiceApi,
    },
    error::AppResult,
    infrastructure::http::LenientJson,
};

pub struct VideoController {
    video_service: Arc<VideoService>,
}

impl VideoController {
    pub fn new(video_service: Arc<VideoService>) -> Self {
        Self { video_service }
    }

    /// POST /api/generate-video - Narrate a script and write the placeholder video
    pub async fn generate_video(
        State(controller): State<Arc<VideoController>>,
        LenientJson(request): LenientJson<VideoGenerationRequest>,
    ) -> AppResult<Json<VideoGenerationResponse>> {
        let video = controller.video_service.generate(request).await?;

        Ok(Json(VideoGenerationResponse {
            video_path: video.download_path(),
            status: "ready".to_string(),
            message: "✅ Video generated!".to_string(),
        }))
    }
}
