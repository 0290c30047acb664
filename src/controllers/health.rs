use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::ArtifactRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State((artifact_repo, provider)): State<(Arc<ArtifactRepository>, &'static str)>,
) -> impl IntoResponse {
    if artifact_repo.is_available().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "storage": "available",
                "tts": provider
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "storage": "unavailable",
                "tts": provider
            })),
        )
    }
}
