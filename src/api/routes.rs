//! API route definitions
//!
//! - POST /api/v1/calculate - Advance rate estimate
//! - GET  /api/v1/examples - Pre-configured scenarios
//! - GET  /api/v1/soil-types, /api/v1/tbm-types - Accepted categorical values
//! - GET  /api/v1/calculation-info - Methods, parameter groups, output units
//! - GET  /api/v1/health, /ready, /live - Probes

use axum::middleware as axum_mw;
use axum::{routing::{get, post}, Router};

use super::handlers::{self, AppState};
use super::middleware::add_model_version_header;

/// Create all `/api/v1` routes
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(handlers::calculate))
        .route("/examples", get(handlers::get_examples))
        .route("/soil-types", get(handlers::get_soil_types))
        .route("/tbm-types", get(handlers::get_tbm_types))
        .route("/calculation-info", get(handlers::get_calculation_info))
        .route("/health", get(handlers::get_health))
        .route("/ready", get(handlers::get_ready))
        .route("/live", get(handlers::get_live))
        .fallback(handlers::api_not_found)
        .layer(axum_mw::from_fn_with_state(state.clone(), add_model_version_header))
        .with_state(state)
}
