use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};

/// Report server-side failures as `200 OK`, keeping the `{error}` body.
///
/// Older frontends only inspect the body for an `error` field, so `/api`
/// routes can opt into this behaviour with `LEGACY_ERROR_STATUS=true`.
pub async fn legacy_error_status_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    if response.status().is_server_error() {
        tracing::debug!(
            original_status = response.status().as_u16(),
            "Rewriting failure status to 200 for legacy clients"
        );
        *response.status_mut() = StatusCode::OK;
    }

    response
}
