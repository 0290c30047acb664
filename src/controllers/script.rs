use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::script::{ScriptRequest, ScriptResponse, ScriptService},
    infrastructure::http::LenientJson,
};

pub struct ScriptController {
    script_service: Arc<ScriptService>,
}

impl ScriptController {
    pub fn new(script_service: Arc<ScriptService>) -> Self {
        Self { script_service }
    }

    /// POST /api/generate-script - Fill the shorts template with a prompt
    pub async fn generate_script(
        State(controller): State<Arc<ScriptController>>,
        LenientJson(request): LenientJson<ScriptRequest>,
    ) -> Json<ScriptResponse> {
        let prompt = request.prompt.unwrap_or_default();
        let script = controller.script_service.generate(&prompt);

        Json(ScriptResponse { script })
    }
}
