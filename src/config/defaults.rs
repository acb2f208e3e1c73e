//! Service-wide default constants.
//!
//! Grouped by concern so the config structs and the CLI share one source.

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable holding an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "TBM_CONFIG";

/// Config file looked up in the working directory when the env var is unset.
pub const LOCAL_CONFIG_FILE: &str = "tbm_config.toml";

/// Environment variable overriding `[server] addr`.
pub const SERVER_ADDR_ENV: &str = "TBM_SERVER_ADDR";

// ============================================================================
// Service Identity
// ============================================================================

pub const SERVICE_NAME: &str = "TBM Advance Rate Calculator";

/// Version of the estimation model exposed in the `x-model-version` header.
pub const MODEL_VERSION: &str = "1.0";

// ============================================================================
// Server
// ============================================================================

pub const SERVER_ADDR: &str = "0.0.0.0:8000";

/// Maximum accepted request body (bytes).
///
/// A full parameter object is well under 1 KiB.
pub const REQUEST_BODY_LIMIT_BYTES: usize = 64 * 1024;

// ============================================================================
// Logging
// ============================================================================

pub const LOG_LEVEL: &str = "info";
