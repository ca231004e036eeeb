use gwyf_server::config::ProxyConfig;
use gwyf_server::ratp::{RatpClient, ScheduleParser};
use gwyf_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env().expect("Invalid configuration");

    // Template and pattern are built once here and shared read-only
    let ratp = RatpClient::new(&config.upstream_base_url).expect("Failed to create RATP client");
    let parser = ScheduleParser::new().expect("Failed to compile schedule pattern");

    let state = AppState::new(ratp, parser);
    let app = create_router(state);

    info!(
        addr = %config.listen_addr,
        upstream = %config.upstream_base_url,
        "RER schedule proxy listening"
    );
    info!("  GET /?line=&direction=&station=[&pretty]  - Next trains");
    info!("  GET /health                               - Health check");

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
