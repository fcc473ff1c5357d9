use portfolio_profile::{build_router, AppConfig, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_profile=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.live_token().is_none() {
        warn!("LinkedIn access token not provided, serving mock profile data");
    }

    let addr = config.bind_addr;
    let app = build_router(AppState::new(config)?);

    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
