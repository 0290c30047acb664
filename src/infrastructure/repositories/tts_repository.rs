use crate::domain::voice::SpeechRequest;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech provider (Azure neural voices, OpenAI)
///
/// Implementations are responsible for:
/// - Translating the voice id and speaking rate into provider terms
/// - Handling provider-specific text length limitations
/// - Returning a single MP3 stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `request.text` with the requested voice and rate
    ///
    /// # Errors
    /// Returns the provider's failure message if synthesis fails or the
    /// provider is unreachable
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String>;

    /// Short provider name used in logs and health output
    fn provider_name(&self) -> &'static str;
}
