//! API route handlers
//!
//! - Advance rate calculation
//! - Reference data (examples, soil and TBM types, method info)
//! - Health, readiness and liveness probes

mod calculator;
mod health;
mod reference;

pub use calculator::*;
pub use health::*;
pub use reference::*;

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServiceConfig;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
///
/// The calculator is stateless; only configuration and the start instant
/// (for uptime) are shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
