use std::sync::Arc;

use anyhow::Context;

use invcalc_api::{app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    invcalc_observability::init();

    let config = AppConfig::from_env()?;
    tracing::info!(data_dir = %config.data_dir.display(), "using data directory");

    let services = Arc::new(app::services::AppServices::from_data_dir(&config.data_dir));
    services
        .warm_up()
        .context("failed to initialize data files")?;

    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
