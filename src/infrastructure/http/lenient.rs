//! Request decoding that never rejects a body.
//!
//! Clients send loosely typed JSON; every field falls back to its default
//! instead of failing the request.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON extractor that decodes anything that is not a JSON object as
/// `T::default()`. Content type is not checked.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(LenientJson(decode(&bytes)))
    }
}

/// Decode a request body, falling back to `T::default()`
pub fn decode<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Request body did not decode, using defaults");
            T::default()
        }),
        Ok(_) => {
            tracing::debug!("Request body is not a JSON object, using defaults");
            T::default()
        }
        Err(e) => {
            if !bytes.is_empty() {
                tracing::debug!(error = %e, "Request body is not JSON, using defaults");
            }
            T::default()
        }
    }
}
