//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod post_repo;
mod author_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, SharedConnection};
pub use post_repo::PostRepository;
pub use author_repo::AuthorRepository;
