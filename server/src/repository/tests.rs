//! Repository Integration Tests
//!
//! Tests for the SQLite repositories with an in-memory database.

use crate::domain::{Author, DomainError, Post};
use crate::repository::{init_db, AuthorRepository, PostRepository, Repository};
use std::path::Path;

fn setup_test_db() -> (PostRepository, AuthorRepository) {
    let conn = init_db(Path::new(":memory:")).expect("Failed to init test DB");
    (PostRepository::new(conn.clone()), AuthorRepository::new(conn))
}

async fn create_author(repo: &AuthorRepository, name: &str) -> Author {
    let author = Author {
        id: 0,
        name: name.to_string(),
        avatar_url: None,
    };
    repo.create(&author).await.expect("Failed to create author")
}

#[tokio::test]
async fn test_create_post() {
    let (posts, authors) = setup_test_db();
    let author = create_author(&authors, "Ivan").await;

    let post = Post::new(0, "Title".to_string(), "Body".to_string(), author.id);
    let created = posts.create(&post).await.expect("Failed to create");

    assert!(created.id > 0);
    assert_eq!(created.title, "Title");
    assert_eq!(created.author_name, "Ivan");
}

#[tokio::test]
async fn test_create_post_unknown_author() {
    let (posts, _authors) = setup_test_db();

    let post = Post::new(0, "Orphan".to_string(), "Body".to_string(), 99);
    let result = posts.create(&post).await;

    assert!(matches!(result, Err(DomainError::InvalidInput(_))));
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let (posts, authors) = setup_test_db();
    let author = create_author(&authors, "Anna").await;

    let mut older = Post::new(0, "Older".to_string(), "a".to_string(), author.id);
    older.created_at = 100;
    let mut newer = Post::new(0, "Newer".to_string(), "b".to_string(), author.id);
    newer.created_at = 200;
    posts.create(&older).await.unwrap();
    posts.create(&newer).await.unwrap();

    let listed = posts.list().await.expect("List failed");
    let titles: Vec<_> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
    assert!(listed.iter().all(|p| p.author_name == "Anna"));
}

#[tokio::test]
async fn test_update_post() {
    let (posts, authors) = setup_test_db();
    let author = create_author(&authors, "Ivan").await;
    let mut created = posts
        .create(&Post::new(0, "Original".to_string(), "Body".to_string(), author.id))
        .await
        .unwrap();

    created.title = "Updated".to_string();
    posts.update(&created).await.expect("Update failed");

    let found = posts.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Updated");
}

#[tokio::test]
async fn test_update_missing_post() {
    let (posts, _authors) = setup_test_db();

    let ghost = Post::new(42, "Ghost".to_string(), "Body".to_string(), 1);
    let result = posts.update(&ghost).await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_post() {
    let (posts, authors) = setup_test_db();
    let author = create_author(&authors, "Ivan").await;
    let created = posts
        .create(&Post::new(0, "To delete".to_string(), "Body".to_string(), author.id))
        .await
        .unwrap();

    posts.delete(created.id).await.expect("Delete failed");

    let found = posts.find_by_id(created.id).await.expect("Find failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_delete_missing_post() {
    let (posts, _authors) = setup_test_db();

    let result = posts.delete(7).await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_author_cascades_to_posts() {
    let (posts, authors) = setup_test_db();
    let author = create_author(&authors, "Gone").await;
    posts
        .create(&Post::new(0, "Mine".to_string(), "Body".to_string(), author.id))
        .await
        .unwrap();

    authors.delete(author.id).await.unwrap();

    assert!(posts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_author_avatar_persistence() {
    let (_posts, authors) = setup_test_db();
    let author = Author {
        id: 0,
        name: "Olga".to_string(),
        avatar_url: Some("/static/avatars/av_Olga.png".to_string()),
    };

    let created = authors.create(&author).await.unwrap();
    let found = authors.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found.avatar_url.as_deref(), Some("/static/avatars/av_Olga.png"));
}
