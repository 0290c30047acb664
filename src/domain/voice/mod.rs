pub mod error;
pub mod rate;
pub mod service;

pub use error::VoiceServiceError;
pub use rate::SpeakingRate;
pub use service::{VoicePreview, VoiceService, VoiceServiceApi, Voiceover};

use crate::domain::shared::lenient;
use serde::Deserialize;

/// Characters of text spoken by a preview
pub const PREVIEW_TEXT_LIMIT: usize = 100;

/// Spoken when a preview request carries no text
pub const PREVIEW_FALLBACK_TEXT: &str = "Preview of your voice";

/// Request for POST /api/preview-voice
#[derive(Debug, Default, Deserialize)]
pub struct VoicePreviewRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub voice: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rate: Option<f64>,
}

/// Input handed to a speech provider
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: String,
    pub rate: SpeakingRate,
}
