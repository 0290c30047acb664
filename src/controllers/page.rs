use axum::{extract::State, response::Html};
use std::path::PathBuf;
use std::sync::Arc;

const FALLBACK_PAGE: &str = r#"<h1>🎬 YouTube Shorts Generator</h1>
<p>✅ Backend working! Open the frontend <code>.html</code> file in your browser.</p>
<p>API endpoints are ready under <code>/api</code>.</p>
"#;

pub struct PageController {
    index_page: PathBuf,
}

impl PageController {
    pub fn new(index_page: PathBuf) -> Self {
        Self { index_page }
    }

    /// GET / - Serve the frontend page, or a built-in notice when it is missing
    pub async fn index(State(controller): State<Arc<PageController>>) -> Html<String> {
        match tokio::fs::read_to_string(&controller.index_page).await {
            Ok(page) => Html(page),
            Err(e) => {
                tracing::debug!(
                    path = %controller.index_page.display(),
                    error = %e,
                    "Index page unavailable, serving fallback"
                );
                Html(FALLBACK_PAGE.to_string())
            }
        }
    }
}
