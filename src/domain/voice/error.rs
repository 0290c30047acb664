use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for VoiceServiceError {
    fn from(err: std::io::Error) -> Self {
        VoiceServiceError::Storage(err.to_string())
    }
}

impl From<VoiceServiceError> for AppError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::Dependency(msg) => AppError::ExternalService(msg),
            VoiceServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
