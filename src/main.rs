//! TBM Advance - tunnel boring machine advance rate calculator
//!
//! # Usage
//!
//! ```bash
//! # Serve the HTTP API and calculator page
//! ./tbm-advance --addr 127.0.0.1:8000
//!
//! # Evaluate one parameter file and print the result
//! ./tbm-advance calculate --input metro.json
//!
//! # Print the effective configuration
//! ./tbm-advance print-config
//! ```
//!
//! # Environment Variables
//!
//! - `TBM_CONFIG`: Path to the TOML config (default: ./tbm_config.toml)
//! - `TBM_SERVER_ADDR`: Bind address override (the `--addr` flag wins)
//! - `RUST_LOG`: Logging filter (default: `[logging] level`)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tbm_advance::api::{create_app, AppState};
use tbm_advance::config::{self, LogFormat, ServiceConfig};
use tbm_advance::{estimation, TbmParameters};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "tbm-advance")]
#[command(about = "TBM advance rate calculator")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8000")
    #[arg(short, long, value_name = "HOST:PORT")]
    addr: Option<String>,

    /// Path to the TOML config file (skips the search order; must load)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Validate and evaluate one JSON parameter file, printing the result
    Calculate {
        /// JSON file holding one parameter object
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Print the effective configuration as TOML
    PrintConfig,
}

// ============================================================================
// Setup
// ============================================================================

fn load_config(args: &CliArgs) -> Result<ServiceConfig> {
    let mut service_config = match &args.config {
        Some(path) => ServiceConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServiceConfig::load(),
    };
    service_config.apply_addr_overrides(
        std::env::var(config::defaults::SERVER_ADDR_ENV).ok(),
        args.addr.clone(),
    );
    service_config.validate().context("Invalid service configuration")?;
    Ok(service_config)
}

fn init_tracing(service_config: &ServiceConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&service_config.logging.level));

    match service_config.logging.log_format() {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
    }
}

// ============================================================================
// Subcommands
// ============================================================================

fn run_calculate(input: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let params: TbmParameters = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid parameter JSON in {}", input.display()))?;

    if let Err(e) = params.validate() {
        for v in &e.violations {
            eprintln!("  - {}: {}", v.field, v.message);
        }
        return Err(e).context("Parameters rejected");
    }

    let result = estimation::estimate(&params).context("Calculation error")?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn run_server(service_config: ServiceConfig) -> Result<()> {
    let addr = service_config.socket_addr()?;

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    info!(
        service = %service_config.service.name,
        version = %service_config.service.version,
        model_version = %service_config.service.model_version,
        "Starting"
    );

    let app = create_app(AppState::new(service_config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("[HttpServer] Listening on http://{}", addr);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            info!("[HttpServer] Received shutdown signal");
        })
        .await;

    match result {
        Ok(()) => {
            info!("[HttpServer] Graceful shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!("[HttpServer] Server error: {}", e);
            Err(anyhow::anyhow!("HTTP server error: {}", e))
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Config first so logging can honour [logging]; load-time warnings go
    // through a scoped default subscriber
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();
    let service_config = tracing::subscriber::with_default(bootstrap, || load_config(&args))?;
    init_tracing(&service_config);

    match &args.command {
        Some(SubCommand::Calculate { input }) => run_calculate(input),
        Some(SubCommand::PrintConfig) => {
            print!("{}", service_config.to_toml()?);
            Ok(())
        }
        None => run_server(service_config).await,
    }
}
