//! Post Routes
//!
//! - `GET /posts/all`
//! - `POST /posts`
//! - `PUT /posts/{id}`
//! - `DELETE /posts/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use super::{parse_id, ApiError, AppState};
use crate::domain::{DomainError, NewPost, Post, PostUpdate};

async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(state.posts.list().await?))
}

async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<NewPost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.posts.create(&body.into_post()?).await?;
    tracing::info!(post_id = post.id, author_id = post.author_id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PostUpdate>,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&id)?;
    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("post {}", id)))?;
    body.apply(&mut post);
    Ok(Json(state.posts.update(&post).await?))
}

async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    match state.posts.delete(id).await {
        Ok(()) => tracing::info!(post_id = id, "post deleted"),
        // Already gone: a retried DELETE whose first response was lost
        Err(DomainError::NotFound(_)) => tracing::debug!(post_id = id, "post already deleted"),
        Err(e) => return Err(e.into()),
    }
    Ok(StatusCode::OK)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts/all", get(list_posts))
        .route("/posts", post(create_post))
        .route("/posts/{id}", put(update_post).delete(delete_post))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use axum::Router;
    use serde_json::json;

    use crate::domain::{Author, Post};
    use crate::routes::tests::{body_json, body_string, send_request, test_router};

    async fn seed(app: &Router) -> anyhow::Result<Post> {
        let response = send_request(app, Method::POST, "/authors", Some(json!({ "name": "Ivan" }))).await?;
        let author: Author = body_json(response).await?;
        let response = send_request(
            app,
            Method::POST,
            "/posts",
            Some(json!({ "title": "Hello", "content": "World", "author_id": author.id })),
        )
        .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_list_posts() -> anyhow::Result<()> {
        let app = test_router();
        let created = seed(&app).await?;

        let response = send_request(&app, Method::GET, "/posts/all", None).await?;

        assert_eq!(response.status(), StatusCode::OK);
        let posts: Vec<Post> = body_json(response).await?;
        assert_eq!(posts, vec![created]);
        assert_eq!(posts[0].author_name, "Ivan");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_post_without_author() -> anyhow::Result<()> {
        let app = test_router();

        let response = send_request(
            &app,
            Method::POST,
            "/posts",
            Some(json!({ "title": "t", "content": "c" })),
        )
        .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_post() -> anyhow::Result<()> {
        let app = test_router();
        let created = seed(&app).await?;

        let response = send_request(
            &app,
            Method::PUT,
            &format!("/posts/{}", created.id),
            Some(json!({ "title": "Edited" })),
        )
        .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let updated: Post = body_json(response).await?;
        assert_eq!(updated.title, "Edited");
        assert_eq!(updated.content, "World");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_post() -> anyhow::Result<()> {
        let app = test_router();

        let response =
            send_request(&app, Method::PUT, "/posts/5", Some(json!({ "title": "x" }))).await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_post() -> anyhow::Result<()> {
        let app = test_router();
        let created = seed(&app).await?;

        let response =
            send_request(&app, Method::DELETE, &format!("/posts/{}", created.id), None).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await?, "");

        let response = send_request(&app, Method::GET, "/posts/all", None).await?;
        let posts: Vec<Post> = body_json(response).await?;
        assert!(posts.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_delete_succeeds() -> anyhow::Result<()> {
        let app = test_router();
        let created = seed(&app).await?;
        let uri = format!("/posts/{}", created.id);

        let first = send_request(&app, Method::DELETE, &uri, None).await?;
        assert_eq!(first.status(), StatusCode::OK);
        let retry = send_request(&app, Method::DELETE, &uri, None).await?;

        assert_eq!(retry.status(), StatusCode::OK);
        let response = send_request(&app, Method::GET, "/posts/all", None).await?;
        let posts: Vec<Post> = body_json(response).await?;
        assert!(posts.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_invalid_id() -> anyhow::Result<()> {
        let app = test_router();

        let response = send_request(&app, Method::DELETE, "/posts/abc", None).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await?, "invalid id: abc");
        Ok(())
    }
}
