use anyhow::Context;
use snippet_vault::{app_state::AppState, config::Config, routes};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("snippet_vault=info,api=info,tower_http=info")
        }))
        .with(fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let pool: Pool<Postgres> = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .connect(config.database_url())
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let app = routes::router(AppState::new(pool.clone(), &config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(
        addr = %config.bind_addr(),
        storage_mode = ?config.storage_mode(),
        summarizer_configured = config.claude_api_key().is_some(),
        "api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("api stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut signal) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            signal.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
