//! Author Repository
//!
//! SQLite-backed implementation for Author CRUD operations.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension};

use crate::domain::{Author, DomainError, DomainResult};
use super::db::SharedConnection;
use super::traits::Repository;

/// SQLite implementation of Author repository
pub struct AuthorRepository {
    conn: SharedConnection,
}

impl AuthorRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Author> for AuthorRepository {
    async fn create(&self, entity: &Author) -> DomainResult<Author> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO authors (name, avatar_url) VALUES (?, ?)",
            params![entity.name, entity.avatar_url],
        )?;

        let mut author = entity.clone();
        author.id = conn.last_insert_rowid();
        Ok(author)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Author>> {
        let conn = self.conn.lock().await;
        let author = conn
            .query_row(
                "SELECT id, name, avatar_url FROM authors WHERE id = ?",
                params![id],
                row_to_author,
            )
            .optional()?;
        Ok(author)
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id, name, avatar_url FROM authors ORDER BY name")?;
        let authors = stmt
            .query_map([], row_to_author)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(authors)
    }

    async fn update(&self, entity: &Author) -> DomainResult<Author> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE authors SET name = ?, avatar_url = ? WHERE id = ?",
            params![entity.name, entity.avatar_url, entity.id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("author {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM authors WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("author {}", id)));
        }
        Ok(())
    }
}

fn row_to_author(row: &rusqlite::Row) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get(0)?,
        name: row.get(1)?,
        avatar_url: row.get(2)?,
    })
}
