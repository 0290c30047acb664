use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactServiceError {
    #[error("artifact not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for ArtifactServiceError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ArtifactServiceError::NotFound,
            _ => ArtifactServiceError::Storage(err.to_string()),
        }
    }
}

impl From<ArtifactServiceError> for AppError {
    fn from(err: ArtifactServiceError) -> Self {
        match err {
            ArtifactServiceError::NotFound => AppError::NotFound("File not ready yet".to_string()),
            ArtifactServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
