//! Author Routes

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::{ApiError, AppState};
use crate::domain::{Author, NewAuthor};

async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>, ApiError> {
    Ok(Json(state.authors.list().await?))
}

async fn create_author(
    State(state): State<AppState>,
    Json(body): Json<NewAuthor>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let author = state.authors.create(&body.into_author()?).await?;
    tracing::info!(author_id = author.id, "author created");
    Ok((StatusCode::CREATED, Json(author)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/authors", get(list_authors).post(create_author))
}
