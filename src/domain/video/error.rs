use crate::domain::voice::VoiceServiceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VideoServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<VoiceServiceError> for VideoServiceError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::Dependency(msg) => VideoServiceError::Dependency(msg),
            VoiceServiceError::Storage(msg) => VideoServiceError::Storage(msg),
        }
    }
}

impl From<std::io::Error> for VideoServiceError {
    fn from(err: std::io::Error) -> Self {
        VideoServiceError::Storage(err.to_string())
    }
}

impl From<VideoServiceError> for AppError {
    fn from(err: VideoServiceError) -> Self {
        match err {
            VideoServiceError::Dependency(msg) => AppError::ExternalService(msg),
            VideoServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
