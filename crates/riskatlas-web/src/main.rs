//! Riskatlas Web Server
//!
//! Run with: cargo run -p riskatlas-web

use riskatlas_annotations::{reshape, AnnotationLoader};
use riskatlas_common::AppConfig;
use riskatlas_screening::remote::RemoteClassifier;
use riskatlas_screening::ScreeningOptions;
use riskatlas_web::state::{AppEvent, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path =
        std::env::var("RISKATLAS_CONFIG").unwrap_or_else(|_| "riskatlas.toml".to_string());
    let config = AppConfig::load(&config_path)?;

    // Load once at startup. A failed load leaves the table, chart, and
    // cross-reference empty; the service still comes up.
    let loader = AnnotationLoader::new();
    let (papers, rows) = match loader.load(&config.annotations).await {
        Ok(set) => {
            let rows = reshape(&set);
            (set.len(), rows)
        }
        Err(err) => {
            error!(%err, "failed to load annotation source");
            (0, Vec::new())
        }
    };
    info!(papers, rows = rows.len(), "annotation rows ready");

    let remote = match &config.remote_classifier {
        Some(remote_cfg) => Some(RemoteClassifier::new(remote_cfg)?),
        None => None,
    };

    let options = ScreeningOptions::from(&config.screening);
    let state = AppState::new(rows.clone(), options, remote);
    state.emit(AppEvent::AnnotationsLoaded {
        papers,
        rows: rows.len(),
    });

    let app = riskatlas_web::router::build_router(state);

    let addr = config.bind_addr();
    info!(%addr, "riskatlas web server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
