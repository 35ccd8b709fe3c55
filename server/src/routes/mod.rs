//! HTTP Routes
//!
//! Exposes posts and authors over JSON.

mod post_routes;
mod author_routes;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use thiserror::Error;

use crate::domain::{Author, DomainError, Post};
use crate::repository::{AuthorRepository, PostRepository, Repository, SharedConnection};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn Repository<Post>>,
    pub authors: Arc<dyn Repository<Author>>,
}

impl AppState {
    pub fn new(conn: SharedConnection) -> Self {
        Self {
            posts: Arc::new(PostRepository::new(conn.clone())),
            authors: Arc::new(AuthorRepository::new(conn)),
        }
    }
}

/// Handler error, rendered as a plain-text body with a matching status
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) | ApiError::Domain(DomainError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

/// Parse a path id segment, rejecting anything that is not an integer
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid id: {}", raw)))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(post_routes::router())
        .merge(author_routes::router())
        .with_state(state)
}
