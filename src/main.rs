use std::sync::Arc;

use address_book::{
    build_app, config::Config, contact_store::InMemoryContactStore, logging, AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;

    let store = Arc::new(InMemoryContactStore::new());
    let bind_socket = config.bind_socket()?;
    let state = AppState::new(store, config.base_url.clone());
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        base_url = config.base_url.as_deref().unwrap_or("<request host>"),
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
