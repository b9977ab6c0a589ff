use anyhow::Context;

mod app;
mod config;
mod error;
mod extractors;
mod media;
mod middleware;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::load().context("failed to load configuration")?;
    middleware::logging::init_logging(&config.logging);

    let pool = persistence::db::create_pool(&config.database)
        .await
        .context("failed to open database pool")?;

    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .context("failed to apply database migrations")?;
    tracing::info!("Database migrations applied");

    let addr = config.socket_addr();
    let router = app::create_app(config, pool);

    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "Masjid site API listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, router).await?;

    Ok(())
}
