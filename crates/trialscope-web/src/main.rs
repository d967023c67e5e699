//! TrialScope Web Server
//!
//! Run with: cargo run -p trialscope-web

use tracing::info;
use tracing_subscriber::EnvFilter;
use trialscope_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    info!(
        api = %config.registry.base_url,
        max_results = config.registry.max_results,
        page_size = config.registry.page_size,
        "Starting TrialScope web server..."
    );

    let state = trialscope_web::state::AppState::new(&config)?;
    let app = trialscope_web::router::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
