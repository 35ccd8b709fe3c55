//! Post Entity
//!
//! A news post written by an author.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// A published post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    /// Resolved from the authors table on reads
    #[serde(default)]
    pub author_name: String,
    /// Unix seconds
    pub created_at: i64,
}

impl Post {
    pub fn new(id: i64, title: String, content: String, author_id: i64) -> Self {
        Self {
            id,
            title,
            content,
            author_id,
            author_name: String::new(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl Entity for Post {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Request body for creating a post
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: Option<i64>,
}

impl NewPost {
    /// Build the entity to persist; an author is mandatory
    pub fn into_post(self) -> DomainResult<Post> {
        let author_id = self
            .author_id
            .ok_or_else(|| DomainError::InvalidInput("author is required".to_string()))?;
        Ok(Post::new(0, self.title, self.content, author_id))
    }
}

/// Request body for updating a post; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_creation() {
        let post = Post::new(1, "Hello".to_string(), "World".to_string(), 7);
        assert_eq!(post.id(), 1);
        assert_eq!(post.author_id, 7);
        assert!(post.created_at > 0);
    }

    #[test]
    fn test_new_post_requires_author() {
        let new_post = NewPost {
            title: "t".to_string(),
            content: "c".to_string(),
            author_id: None,
        };
        assert!(matches!(new_post.into_post(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_update_keeps_missing_fields() {
        let mut post = Post::new(1, "Old".to_string(), "Body".to_string(), 1);
        PostUpdate {
            title: Some("New".to_string()),
            content: None,
        }
        .apply(&mut post);
        assert_eq!(post.title, "New");
        assert_eq!(post.content, "Body");
    }
}
