//! TBM Advance: advance rate estimation for tunnel boring machines
//!
//! Hybrid estimator blending empirical, theoretical and regression methods,
//! served over HTTP.
//!
//! ## Architecture
//!
//! - **Types**: input parameters, categorical ground/machine types, results
//! - **Estimation**: the deterministic engine (rates, weights, metrics,
//!   confidence, risk)
//! - **Catalog**: example scenarios and reference data
//! - **Config**: service configuration from TOML
//! - **API**: axum router, handlers and embedded calculator page

pub mod api;
pub mod catalog;
pub mod config;
pub mod estimation;
pub mod types;

// Re-export service configuration
pub use config::ServiceConfig;

// Re-export the engine entry points
pub use estimation::{estimate, estimate_breakdown, EstimateBreakdown, EstimationError};

// Re-export commonly used types
pub use types::{
    AdvanceRateResult, FieldViolation, RiskFactors, RiskLevel, SoilType, TbmParameters, TbmType,
    ValidationError,
};
