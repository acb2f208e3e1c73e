//! REST API module using Axum
//!
//! Provides HTTP endpoints for the TBM advance rate calculator:
//! - `/api/v1` JSON API (calculation, reference data, probes)
//! - Calculator page served via `rust-embed` (compiled into the binary)

pub mod envelope;
pub mod handlers;
pub mod middleware;
mod routes;

pub use handlers::AppState;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use rust_embed::Embed;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;

/// Static calculator page from `static/`.
#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

/// Serve a static asset or fall back to `index.html`.
async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = StaticAssets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    if let Some(index) = StaticAssets::get("index.html") {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            index.data.into_owned(),
        )
            .into_response();
    }

    (StatusCode::OK, "TBM Advance Rate Calculator is running. See /api/v1/calculation-info.").into_response()
}

/// Build the CORS layer from `[cors] allowed_origins`.
///
/// `"*"` allows any origin; otherwise only the listed origins that parse
/// as header values are allowed.
fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if cors.allows_any() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|o| match o.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "CORS: ignoring unparsable origin");
                None
            }
        })
        .collect();
    tracing::info!(origins = ?cors.allowed_origins, "CORS: allowing configured origins");
    layer.allow_origin(allowed)
}

/// Create the complete application router with API and static serving.
pub fn create_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors);
    let body_limit = state.config.server.request_body_limit_bytes;

    Router::new()
        .nest("/api/v1", routes::api_routes(state))
        // Any other path serves the calculator page
        .fallback(serve_asset)
        // Enforced by the extractors, so oversized bodies reach the JSON envelope
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
