use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_VOICE: &str = "en-US-AvaNeural";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Artifact storage
    pub audio_dir: PathBuf,
    pub output_dir: PathBuf,
    pub index_page: PathBuf,
    // Speech synthesis
    pub default_voice: String,
    pub tts_provider: TtsProvider,
    pub tts_timeout_secs: u64,
    pub azure_speech_key: Option<String>,
    pub azure_speech_region: String,
    pub azure_speech_endpoint: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_tts_model: String,
    pub openai_tts_voice: String,
    // Report /api failures as 200 with an error body
    pub legacy_error_status: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Azure,
    OpenAi,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let tts_provider = match env::var("TTS_PROVIDER")
            .unwrap_or_else(|_| "azure".to_string())
            .to_lowercase()
            .as_str()
        {
            "azure" => TtsProvider::Azure,
            "openai" => TtsProvider::OpenAi,
            other => return Err(format!("Unknown TTS_PROVIDER: {}", other).into()),
        };

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            audio_dir: env::var("AUDIO_DIR")
                .unwrap_or_else(|_| "temp_audio".to_string())
                .into(),
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "output".to_string())
                .into(),
            index_page: env::var("INDEX_PAGE")
                .unwrap_or_else(|_| "webpage.html".to_string())
                .into(),
            default_voice: env::var("DEFAULT_VOICE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            tts_provider,
            tts_timeout_secs: env::var("TTS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()?,
            azure_speech_key: env::var("AZURE_SPEECH_KEY").ok(),
            azure_speech_region: env::var("AZURE_SPEECH_REGION")
                .unwrap_or_else(|_| "eastus".to_string()),
            azure_speech_endpoint: env::var("AZURE_SPEECH_ENDPOINT").ok(),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_tts_model: env::var("OPENAI_TTS_MODEL")
                .unwrap_or_else(|_| "tts-1".to_string()),
            openai_tts_voice: env::var("OPENAI_TTS_VOICE")
                .unwrap_or_else(|_| "alloy".to_string()),
            legacy_error_status: env::var("LEGACY_ERROR_STATUS")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Synthesis endpoint for the Azure provider
    pub fn azure_endpoint(&self) -> String {
        self.azure_speech_endpoint.clone().unwrap_or_else(|| {
            format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                self.azure_speech_region
            )
        })
    }
}
