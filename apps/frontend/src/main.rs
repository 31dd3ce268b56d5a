mod config;
mod errors;
mod i18n;
mod locale;
mod pages;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::i18n::{BundleLoader, FsBundleLoader, StaticBundleLoader};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting frontend v{}", env!("CARGO_PKG_VERSION"));

    // Locale configuration is fixed for the life of the process
    let locales = config.locale_config()?;
    info!(
        "Locales: {:?} (default: {})",
        locales.supported().iter().map(|l| l.to_string()).collect::<Vec<_>>(),
        locales.default_locale()
    );

    // Message bundles: a directory of JSON files, or the built-in set
    let bundles: Arc<dyn BundleLoader> = match &config.messages_dir {
        Some(dir) => {
            info!("Loading messages from {}", dir.display());
            Arc::new(FsBundleLoader::new(dir))
        }
        None => {
            let loader = StaticBundleLoader::builtin()?;
            info!(
                "Using built-in messages for {:?}",
                loader.locales().collect::<Vec<_>>()
            );
            Arc::new(loader)
        }
    };

    let state = AppState { locales, bundles };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
