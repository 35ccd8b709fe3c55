//! Post Repository
//!
//! SQLite-backed implementation for Post CRUD operations.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use crate::domain::{DomainError, DomainResult, Post};
use super::db::SharedConnection;
use super::traits::Repository;

const SELECT_POSTS: &str = "SELECT p.id, p.title, p.content, p.author_id, COALESCE(a.name, ''), p.created_at
     FROM posts p LEFT JOIN authors a ON a.id = p.author_id";

/// SQLite implementation of Post repository
pub struct PostRepository {
    conn: SharedConnection,
}

impl PostRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Post> for PostRepository {
    async fn create(&self, entity: &Post) -> DomainResult<Post> {
        let conn = self.conn.lock().await;

        let author_name: Option<String> = conn
            .query_row(
                "SELECT name FROM authors WHERE id = ?",
                params![entity.author_id],
                |row| row.get(0),
            )
            .optional()?;
        let author_name = author_name.ok_or_else(|| {
            DomainError::InvalidInput(format!("unknown author {}", entity.author_id))
        })?;

        conn.execute(
            "INSERT INTO posts (title, content, author_id, created_at) VALUES (?, ?, ?, ?)",
            params![entity.title, entity.content, entity.author_id, entity.created_at],
        )?;

        let mut post = entity.clone();
        post.id = conn.last_insert_rowid();
        post.author_name = author_name;
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Post>> {
        let conn = self.conn.lock().await;
        let post = conn
            .query_row(&format!("{} WHERE p.id = ?", SELECT_POSTS), params![id], row_to_post)
            .optional()?;
        Ok(post)
    }

    async fn list(&self) -> DomainResult<Vec<Post>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY p.created_at DESC, p.id DESC",
            SELECT_POSTS
        ))?;
        let posts = stmt
            .query_map([], row_to_post)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    async fn update(&self, entity: &Post) -> DomainResult<Post> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE posts SET title = ?, content = ? WHERE id = ?",
            params![entity.title, entity.content, entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("post {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM posts WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("post {}", id)));
        }
        Ok(())
    }
}

/// Convert a database row to Post
fn row_to_post(row: &rusqlite::Row) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author_id: row.get(3)?,
        author_name: row.get(4)?,
        created_at: row.get(5)?,
    })
}
