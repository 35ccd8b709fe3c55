//! Author Entity

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// A post author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    /// Path or URL of the avatar image
    pub avatar_url: Option<String>,
}

impl Entity for Author {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Request body for creating an author
#[derive(Debug, Clone, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl NewAuthor {
    pub fn into_author(self) -> DomainResult<Author> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("name must not be empty".to_string()));
        }
        Ok(Author {
            id: 0,
            name: name.to_string(),
            avatar_url: self.avatar_url,
        })
    }
}
