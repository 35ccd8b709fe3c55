//! Post Endpoints
//!
//! Frontend bindings for post-related backend routes.

use async_trait::async_trait;

use super::{api_base, read_json, send, ApiError};
use crate::delete_interaction::{DeleteError, PostsApi};
use crate::models::{Post, PostId};

pub fn post_url(base: &str, id: PostId) -> String {
    format!("{}/posts/{}", base.trim_end_matches('/'), id)
}

pub async fn list_posts() -> Result<Vec<Post>, ApiError> {
    let url = format!("{}/posts/all", api_base().trim_end_matches('/'));
    let response = send("GET", &url).await?;
    read_json(response).await
}

pub async fn delete_post(base: &str, id: PostId) -> Result<(), ApiError> {
    send("DELETE", &post_url(base, id)).await?;
    Ok(())
}

impl From<ApiError> for DeleteError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) => DeleteError::RequestRejected { status },
            ApiError::Network(msg) | ApiError::Decode(msg) => DeleteError::TransportFailure(msg),
        }
    }
}

/// `PostsApi` backed by `fetch`
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    base: String,
}

impl HttpPostsApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for HttpPostsApi {
    fn default() -> Self {
        Self::new(api_base())
    }
}

#[async_trait(?Send)]
impl PostsApi for HttpPostsApi {
    async fn delete_post(&self, id: PostId) -> Result<(), DeleteError> {
        delete_post(&self.base, id).await.map_err(DeleteError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("", 7), "/posts/7");
        assert_eq!(post_url("http://localhost:8080/", 7), "http://localhost:8080/posts/7");
    }

    #[test]
    fn test_status_maps_to_rejected() {
        assert_eq!(
            DeleteError::from(ApiError::Status(500)),
            DeleteError::RequestRejected { status: 500 }
        );
    }

    #[test]
    fn test_network_maps_to_transport_failure() {
        assert_eq!(
            DeleteError::from(ApiError::Network("offline".to_string())),
            DeleteError::TransportFailure("offline".to_string())
        );
    }
}
