pub mod service;

pub use service::ScriptService;

use crate::domain::shared::lenient;
use serde::{Deserialize, Serialize};

/// Request for POST /api/generate-script
#[derive(Debug, Default, Deserialize)]
pub struct ScriptRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    pub prompt: Option<String>,
}

/// Response for POST /api/generate-script
#[derive(Debug, Serialize, Deserialize)]
pub struct ScriptResponse {
    pub script: String,
}
