//! 用户服务入口

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use user_service::{
    app::{self, AppState},
    config::AppConfig,
    infrastructure::{database::DatabaseManager, logger::Logger, queries::PgQueries},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    Logger::init(&config.logging);
    info!("Starting user service...");

    let db = DatabaseManager::new(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.create_schema {
        db.create_schema()
            .await
            .context("Failed to create database schema")?;
    }

    let state = AppState::new(Arc::new(PgQueries::new(db.pool().clone())));
    let app = app::router(state);

    let listener = TcpListener::bind(config.http.socket_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.http.socket_addr()))?;
    let addr = listener.local_addr()?;

    info!("🚀 Server started on http://{}", addr);
    info!("   POST   /users      - Create user");
    info!("   GET    /users      - List users");
    info!("   GET    /users/:id  - Get user by ID");
    info!("   PUT    /users/:id  - Update user");
    info!("   DELETE /users/:id  - Delete user");
    info!("   GET    /health     - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
