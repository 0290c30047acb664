use crate::domain::shared::lenient;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MOOD: &str = "none";

/// Request for POST /api/generate-video
#[derive(Debug, Default, Deserialize)]
pub struct VideoGenerationRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub script: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub voice: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mood: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rate: Option<f64>,
}

/// Response for POST /api/generate-video
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationResponse {
    pub video_path: String,
    pub status: String,
    pub message: String,
}
