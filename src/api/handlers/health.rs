//! Health, readiness and liveness probes

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::estimation::metrics::round_to;

use super::AppState;

// ============================================================================
// Health Endpoint
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339
    pub timestamp: String,
    pub version: String,
    /// Seconds since startup, two decimals
    pub uptime: f64,
}

/// GET /api/v1/health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        version: state.config.service.version.clone(),
        uptime: round_to(state.uptime_secs(), 2),
    })
}

// ============================================================================
// Readiness / Liveness
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub checks: BTreeMap<&'static str, &'static str>,
}

/// GET /api/v1/ready
///
/// The engine has no external dependencies, so once the router is serving
/// every check reports available.
pub async fn get_ready() -> Json<ReadyResponse> {
    let checks = BTreeMap::from([
        ("calculator_service", "available"),
        ("api_endpoints", "available"),
    ]);
    Json(ReadyResponse {
        status: "ready",
        timestamp: Utc::now().to_rfc3339(),
        checks,
    })
}

#[derive(Debug, Serialize)]
pub struct LiveResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// GET /api/v1/live
pub async fn get_live() -> Json<LiveResponse> {
    Json(LiveResponse {
        status: "alive",
        timestamp: Utc::now().to_rfc3339(),
    })
}
