//! GoNews Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - routes: HTTP handlers

mod settings;
mod domain;
mod repository;
mod routes;

use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use settings::ServerConfig;
pub use domain::DomainError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("database")]
    Database(#[from] DomainError),
    #[error("bind")]
    Bind(#[source] std::io::Error),
    #[error("serve")]
    Serve(#[source] std::io::Error),
}

/// Build the full application: API routes, static frontend and request tracing
fn app(state: routes::AppState, config: &ServerConfig) -> axum::Router {
    routes::router(state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let conn = repository::init_db(&config.database_path)?;
    let router = app(routes::AppState::new(conn), &config);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(ServerError::Bind)?;
    tracing::info!(addr = %config.listen_addr, "GoNews server listening");

    axum::serve(listener, router)
        .await
        .map_err(ServerError::Serve)
}
