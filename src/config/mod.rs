//! Service Configuration Module
//!
//! Listener, CORS, logging and identity settings loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `TBM_CONFIG` environment variable (path to TOML file)
//! 2. `tbm_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! `TBM_SERVER_ADDR` and the `--addr` flag override `[server] addr`
//! afterwards. The loaded config is handed to the API state at startup;
//! the estimation engine itself takes no configuration.

pub mod defaults;
mod service_config;
pub mod validation;

pub use service_config::*;
