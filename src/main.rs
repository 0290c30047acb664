use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use shorts_backend::infrastructure::config::{Config, LogFormat, TtsProvider};
use shorts_backend::infrastructure::http::{build_app, start_http_server};
use shorts_backend::infrastructure::repositories::{
    ArtifactRepository, AzureTtsRepository, OpenAiTtsRepository, TtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Shorts Backend on {}:{}",
        config.host,
        config.port
    );

    // Create artifact directories
    let artifact_repo = ArtifactRepository::new(config.audio_dir.clone(), config.output_dir.clone());
    artifact_repo.ensure_directories().await?;
    tracing::info!(
        audio_dir = %artifact_repo.audio_dir().display(),
        output_dir = %artifact_repo.output_dir().display(),
        "Artifact directories ready"
    );

    // Create speech provider
    let tts_repo = create_tts_repository(&config)?;
    tracing::info!(provider = tts_repo.provider_name(), "Speech provider initialized");

    let config = Arc::new(config);
    let app = build_app(config.clone(), tts_repo);

    start_http_server(config, app).await?;

    Ok(())
}

fn create_tts_repository(
    config: &Config,
) -> Result<Arc<dyn TtsRepository>, Box<dyn std::error::Error>> {
    match config.tts_provider {
        TtsProvider::Azure => {
            let timeout = Duration::from_secs(config.tts_timeout_secs);
            let key = config
                .azure_speech_key
                .clone()
                .ok_or("AZURE_SPEECH_KEY is required when TTS_PROVIDER=azure")?;
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            let endpoint = config.azure_endpoint();

            tracing::info!(endpoint = %endpoint, "Using Azure speech");
            Ok(Arc::new(AzureTtsRepository::new(client, endpoint, key)))
        }
        TtsProvider::OpenAi => {
            let key = config
                .openai_api_key
                .clone()
                .ok_or("OPENAI_API_KEY is required when TTS_PROVIDER=openai")?;
            let client = async_openai::Client::with_config(
                async_openai::config::OpenAIConfig::new().with_api_key(key),
            );

            tracing::info!(model = %config.openai_tts_model, "Using OpenAI speech");
            Ok(Arc::new(OpenAiTtsRepository::new(
                Arc::new(client),
                config.openai_tts_model.clone(),
                config.openai_tts_voice.clone(),
            )))
        }
    }
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config.is_development() {
            "shorts_backend=debug,tower_http=debug".into()
        } else {
            "shorts_backend=info,tower_http=info".into()
        }
    });

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
