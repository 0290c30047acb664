use super::tts_repository::TtsRepository;
use crate::domain::voice::SpeechRequest;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";
const FALLBACK_LOCALE: &str = "en-US";

/// Azure neural speech implementation of TTS repository.
///
/// Owns the voice catalog the frontend offers (`en-US-AvaNeural` and
/// friends); the speaking rate travels as an SSML prosody offset.
pub struct AzureTtsRepository {
    client: reqwest::Client,
    endpoint: String,
    subscription_key: String,
}

impl AzureTtsRepository {
    pub fn new(client: reqwest::Client, endpoint: String, subscription_key: String) -> Self {
        Self {
            client,
            endpoint,
            subscription_key,
        }
    }

    fn build_ssml(request: &SpeechRequest) -> String {
        format!(
            "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"{locale}\">\
             <voice name=\"{voice}\">\
             <prosody rate=\"{rate}\">{text}</prosody>\
             </voice>\
             </speak>",
            locale = locale_of(&request.voice),
            voice = escape_xml(&request.voice),
            rate = request.rate.as_offset_string(),
            text = escape_xml(&request.text),
        )
    }
}

#[async_trait]
impl TtsRepository for AzureTtsRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String> {
        let ssml = Self::build_ssml(request);

        tracing::debug!(
            endpoint = %self.endpoint,
            voice = %request.voice,
            rate = %request.rate,
            ssml_length = ssml.len(),
            "Calling Azure speech API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header(CONTENT_TYPE, "application/ssml+xml")
            .header(USER_AGENT, concat!("shorts-backend/", env!("CARGO_PKG_VERSION")))
            .body(ssml)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice = %request.voice, "Azure speech request failed");
                format!("Azure speech error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                voice = %request.voice,
                "Azure speech API returned an error"
            );
            return Err(format!(
                "Azure speech error: {} {}",
                status.as_u16(),
                body.trim()
            ));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| format!("Azure speech error: {}", e))?;

        if audio.is_empty() {
            return Err("Azure speech error: empty audio response".to_string());
        }

        Ok(audio.to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "azure"
    }
}

/// Locale prefix of a voice id, `en-US-AvaNeural` -> `en-US`
fn locale_of(voice: &str) -> String {
    let mut parts = voice.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(lang), Some(region), Some(_))
            if (2..=3).contains(&lang.len())
                && lang.chars().all(|c| c.is_ascii_alphabetic())
                && !region.is_empty()
                && region.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            format!("{}-{}", lang, region)
        }
        _ => FALLBACK_LOCALE.to_string(),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
