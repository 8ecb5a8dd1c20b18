use academia::router::init_router;
use academia::state::init_app_state;
use academia_observability::{LoggingConfig, describe_metrics, init_tracing};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guards = init_tracing(&LoggingConfig::from_env()).context("failed to set up logging")?;
    describe_metrics();

    let state = init_app_state().await?;
    info!(store = state.store.backend_name(), "Application state ready");
    let app = init_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
