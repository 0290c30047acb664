use super::tts_repository::TtsRepository;
use crate::domain::voice::{SpeakingRate, SpeechRequest};
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, SpeechResponseFormat, Voice},
    Client,
};
use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_BATCH_CHARS: usize = 4096;

/// OpenAI TTS implementation of TTS repository
pub struct OpenAiTtsRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    fallback_voice: String,
    sentence_pattern: Regex,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, fallback_voice: String) -> Self {
        Self {
            client,
            model,
            fallback_voice,
            sentence_pattern: Regex::new(r"[.!?]+\s+").expect("sentence pattern is valid"),
        }
    }

    /// Map a requested voice id onto an OpenAI voice.
    ///
    /// Catalog ids such as `en-US-AvaNeural` have no OpenAI counterpart and
    /// use the configured fallback voice.
    fn resolve_voice(&self, requested: &str) -> Voice {
        parse_voice(requested)
            .or_else(|| parse_voice(&self.fallback_voice))
            .unwrap_or(Voice::Alloy)
    }

    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    async fn call_openai(&self, text: &str, voice: Voice, speed: f32) -> Result<Vec<u8>, String> {
        tracing::debug!(
            model = %self.model,
            voice = ?voice,
            speed = speed,
            text_length = text.chars().count(),
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: self.speech_model(),
            input: text.to_string(),
            voice,
            response_format: Some(SpeechResponseFormat::Mp3),
            speed: Some(speed),
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            format!("OpenAI TTS error: {}", e)
        })?;

        Ok(response.bytes.to_vec())
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String> {
        let voice = self.resolve_voice(&request.voice);
        let speed = speed_for(request.rate);
        let batches = split_into_batches(&self.sentence_pattern, &request.text, MAX_BATCH_CHARS);

        tracing::info!(
            requested_voice = %request.voice,
            voice = ?voice,
            speed = speed,
            batch_count = batches.len(),
            "Starting OpenAI TTS synthesis"
        );

        // MP3 frames concatenate into a playable stream
        let mut merged_audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let audio = self.call_openai(batch, voice.clone(), speed).await?;
            merged_audio.extend(audio);

            tracing::debug!(
                batch_index = index,
                total_audio_size = merged_audio.len(),
                "Batch synthesized and merged"
            );
        }

        Ok(merged_audio)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

fn parse_voice(name: &str) -> Option<Voice> {
    match name.to_lowercase().as_str() {
        "alloy" => Some(Voice::Alloy),
        "echo" => Some(Voice::Echo),
        "fable" => Some(Voice::Fable),
        "onyx" => Some(Voice::Onyx),
        "nova" => Some(Voice::Nova),
        "shimmer" => Some(Voice::Shimmer),
        _ => None,
    }
}

/// OpenAI accepts speeds between 0.25 and 4.0
fn speed_for(rate: SpeakingRate) -> f32 {
    (rate.multiplier() as f32).clamp(0.25, 4.0)
}

/// Split text into batches of at most `max_chars` characters, preferring
/// sentence boundaries and falling back to hard character splits.
fn split_into_batches(sentence_pattern: &Regex, text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut pieces: Vec<&str> = Vec::new();
    let mut last_end = 0;
    for mat in sentence_pattern.find_iter(text) {
        pieces.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        pieces.push(&text[last_end..]);
    }

    let mut batches = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for piece in pieces {
        let piece_chars = piece.chars().count();

        if current_chars + piece_chars > max_chars && !current.is_empty() {
            batches.push(current.trim().to_string());
            current.clear();
            current_chars = 0;
        }

        if piece_chars > max_chars {
            let chars: Vec<char> = piece.chars().collect();
            for chunk in chars.chunks(max_chars) {
                batches.push(chunk.iter().collect());
            }
            continue;
        }

        current.push_str(piece);
        current_chars += piece_chars;
    }

    if !current.trim().is_empty() {
        batches.push(current.trim().to_string());
    }

    batches
}
