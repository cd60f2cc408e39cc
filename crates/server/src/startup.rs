use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::runtime;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Prepare directories, load all collections and build the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let upload_dir = cfg.uploads.upload_dir();
    runtime::ensure_env(
        &cfg.uploads.public_dir,
        &upload_dir.to_string_lossy(),
        &cfg.storage.data_dir,
    )
    .await?;

    let state = AppState::build(cfg).await?;
    Ok(routes::build_router(state, &cfg.uploads.public_dir, build_cors()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "marketplace listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
