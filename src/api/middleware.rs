//! API middleware layers.
//!
//! Stamps every `/api/v1` response with the estimation model version.

use axum::extract::State;
use axum::http::header::HeaderName;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::AppState;

pub const MODEL_VERSION_HEADER: &str = "x-model-version";

/// Axum middleware that adds `x-model-version` from the service config.
///
/// A version string that is not a valid header value is skipped.
pub async fn add_model_version_header(
    State(state): State<AppState>,
    request: axum::extract::Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&state.config.service.model_version) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(MODEL_VERSION_HEADER), value);
    }

    response
}
