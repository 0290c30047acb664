pub mod legacy_status;
pub mod lenient;
pub mod request_id;

pub use legacy_status::legacy_error_status_middleware;
pub use lenient::LenientJson;
pub use request_id::{request_id_middleware, RequestId};

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{
    download::DownloadController, health, page::PageController, script::ScriptController,
    video::VideoController, voice::VoiceController,
};
use crate::domain::{
    artifact::ArtifactService, script::ScriptService, video::VideoService, voice::VoiceService,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::{ArtifactRepository, TtsRepository};

/// Wire services and controllers around a speech provider and build the
/// application router
pub fn build_app(config: Arc<Config>, tts_repo: Arc<dyn TtsRepository>) -> Router {
    let provider = tts_repo.provider_name();

    // 1. Repositories
    let artifact_repo = Arc::new(ArtifactRepository::new(
        config.audio_dir.clone(),
        config.output_dir.clone(),
    ));

    // 2. Services
    let script_service = Arc::new(ScriptService::new());
    let voice_service = Arc::new(VoiceService::new(
        tts_repo,
        artifact_repo.clone(),
        config.default_voice.clone(),
    ));
    let video_service = Arc::new(VideoService::new(voice_service.clone(), artifact_repo.clone()));
    let artifact_service = Arc::new(ArtifactService::new(artifact_repo.clone()));

    // 3. Controllers
    let script_controller = Arc::new(ScriptController::new(script_service));
    let voice_controller = Arc::new(VoiceController::new(voice_service));
    let video_controller = Arc::new(VideoController::new(video_service));
    let download_controller = Arc::new(DownloadController::new(artifact_service));
    let page_controller = Arc::new(PageController::new(config.index_page.clone()));

    create_router(
        &config,
        artifact_repo,
        provider,
        script_controller,
        voice_controller,
        video_controller,
        download_controller,
        page_controller,
    )
}

/// Assemble all routes and middleware
#[allow(clippy::too_many_arguments)]
pub fn create_router(
    config: &Config,
    artifact_repo: Arc<ArtifactRepository>,
    provider: &'static str,
    script_controller: Arc<ScriptController>,
    voice_controller: Arc<VoiceController>,
    video_controller: Arc<VideoController>,
    download_controller: Arc<DownloadController>,
    page_controller: Arc<PageController>,
) -> Router {
    let script_routes = Router::new()
        .route("/api/generate-script", post(ScriptController::generate_script))
        .with_state(script_controller);

    let voice_routes = Router::new()
        .route("/api/preview-voice", post(VoiceController::preview_voice))
        .with_state(voice_controller);

    let video_routes = Router::new()
        .route("/api/generate-video", post(VideoController::generate_video))
        .with_state(video_controller);

    // Scripts of any length are accepted
    let mut api_routes = Router::new()
        .merge(script_routes)
        .merge(voice_routes)
        .merge(video_routes)
        .layer(DefaultBodyLimit::disable());

    if config.legacy_error_status {
        tracing::info!("Legacy error status enabled: /api failures are reported as 200");
        api_routes = api_routes.layer(middleware::from_fn(legacy_error_status_middleware));
    }

    // Download route (404 stays a real 404 in every mode)
    let download_routes = Router::new()
        .route("/download/:timestamp", get(DownloadController::download))
        .with_state(download_controller);

    let page_routes = Router::new()
        .route("/", get(PageController::index))
        .with_state(page_controller);

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state((artifact_repo, provider));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .merge(api_routes)
        .merge(download_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
