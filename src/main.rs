//! Binary entrypoint for the flame aggregation server

use std::net::SocketAddr;
use std::sync::Arc;

use log::info;

use flame_scope::aggregator::FlameAggregator;
use flame_scope::api::http::create_router;
use flame_scope::api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "9102".into())
        .parse()?;

    // One store per process, shared by the read endpoint and any flame
    // sink the probing subsystem constructs over this library.
    let store = Arc::new(FlameAggregator::new());
    let state = Arc::new(AppState::new(store));

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("flame-server {} listening on http://{}", flame_scope::VERSION, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
