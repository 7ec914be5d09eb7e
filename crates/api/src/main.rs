use std::sync::Arc;

use shopcart_api::config::ApiConfig;
use shopcart_items::InMemoryItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopcart_observability::init();

    let config = ApiConfig::from_env()?;
    let app = shopcart_api::app::build_app(Arc::new(InMemoryItemStore::new()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
