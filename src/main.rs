//! Portfolio status service.
//!
//! Four GET endpoints: `/` (banner + request counter), `/health` (liveness),
//! `/ready` (readiness), `/metrics` (Prometheus text format).

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio_api::{app_state, config, router};

const CONFIG_PATH: &str = "portfolio.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen_addr()
        .expect("server.listen must be a valid socket address");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state).expect("router build failed");

    tracing::info!(%listen, "portfolio-api starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
