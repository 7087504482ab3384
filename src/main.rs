use std::sync::Arc;

use anyhow::Context;
use movieworld::{AppState, config::Config, db, seed, store::SqlMovieStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movieworld=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await.context("database")?;
    let store = Arc::new(SqlMovieStore::new(db));

    seed::seed_if_empty(store.as_ref()).await.context("seeding")?;

    let state = Arc::new(AppState { store });
    let app = movieworld::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
