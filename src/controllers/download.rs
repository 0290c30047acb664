use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::sync::Arc;

use crate::{
    domain::artifact::{ArtifactService, ArtifactServiceApi, ArtifactServiceError},
    error::AppResult,
};

pub struct DownloadController {
    artifact_service: Arc<ArtifactService>,
}

impl DownloadController {
    pub fn new(artifact_service: Arc<ArtifactService>) -> Self {
        Self { artifact_service }
    }

    /// GET /download/{timestamp} - Serve the placeholder video, else the voice-over
    pub async fn download(
        State(controller): State<Arc<DownloadController>>,
        timestamp: Result<Path<String>, PathRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Undecodable ids cannot name an artifact
        let Path(timestamp) = timestamp.map_err(|e| {
            tracing::debug!(error = %e, "Download id is not valid UTF-8");
            ArtifactServiceError::NotFound
        })?;

        let download = controller.artifact_service.fetch(&timestamp).await?;
        let artifact = &download.artifact;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(artifact.content_type()),
        );
        if let Ok(disposition) = HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            artifact.download_name()
        )) {
            headers.insert(header::CONTENT_DISPOSITION, disposition);
        }

        Ok((StatusCode::OK, headers, Body::from(download.data)))
    }
}
