//! Media Catalog Server
//!
//! Serves a media library as JSON listings with natural ordering,
//! prev/next navigation and on-the-fly SRT to WebVTT conversion.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use media_catalog::config::{LogFormat, ServerConfig};
use media_catalog::config_file::ConfigFile;
use media_catalog::http::create_router;
use media_catalog::state::AppState;
use media_catalog::{CatalogError, Result};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "media-catalog";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let loaded = if std::path::Path::new(&config_path).exists() {
        Some(ConfigFile::from_file(&config_path).and_then(ConfigFile::into_server_config))
    } else {
        None
    };
    let config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => ServerConfig::default(),
    };

    // Initialize logging
    init_logging(&config);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    match loaded {
        Some(Err(e)) => tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path,
            e
        ),
        None => tracing::info!("No config file at {}, using defaults", config_path),
        Some(Ok(_)) => {}
    }
    tracing::info!("Configuration loaded: {:?}", config);

    if !config.media.source.is_dir() {
        tracing::warn!(
            "Media source {:?} is not a readable directory",
            config.media.source
        );
    }

    // Create application state
    let state = Arc::new(AppState::new(config.clone()));

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| CatalogError::Config(format!("invalid listen address: {}", e)))?;
    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize logging with tracing
fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("media_catalog={},tower_http=debug", config.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
