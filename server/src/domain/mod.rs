//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/thiserror).

mod entity;
mod post;
mod author;

pub use entity::{Entity, DomainError, DomainResult};
pub use post::{Post, NewPost, PostUpdate};
pub use author::{Author, NewAuthor};
