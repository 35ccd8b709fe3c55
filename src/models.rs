//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Post identifier (matches backend rowid)
pub type PostId = i64;

/// Post data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub author_name: String,
    /// Unix seconds
    pub created_at: i64,
}

impl Post {
    /// DOM id of the element rendering this post
    pub fn element_id(&self) -> String {
        post_element_id(self.id)
    }

    /// Creation time as `YYYY-MM-DD HH:MM` (UTC)
    pub fn formatted_date(&self) -> String {
        DateTime::from_timestamp(self.created_at, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}

pub fn post_element_id(id: PostId) -> String {
    format!("post-{}", id)
}
