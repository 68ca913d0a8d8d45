use std::{net::SocketAddr, sync::Arc};

mod app;
mod auth;
mod config;
mod error;
mod extractors;
mod payments;
mod state;
mod store;

use crate::{auth::jwt::JwtKeys, config::AppConfig, state::AppState, store::PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "payvault=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;

    let store = match PgStore::connect(&config).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "database connection failed");
            return Err(e);
        }
    };
    tracing::info!("database connected");

    if let Err(e) = store.migrate().await {
        tracing::warn!(error = %format!("{e:#}"), "migration failed; continuing");
    }

    let state = AppState::from_parts(store.clone(), store, JwtKeys::from_config(&config.jwt));
    let app = app::build_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
