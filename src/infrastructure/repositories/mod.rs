pub mod artifact_repository;
pub mod azure_tts_repository;
pub mod openai_tts_repository;
pub mod tts_repository;

pub use artifact_repository::ArtifactRepository;
pub use azure_tts_repository::AzureTtsRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use tts_repository::TtsRepository;
