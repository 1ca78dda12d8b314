use async_trait::async_trait;

use crate::domain::entities::{CharacterDraft, SavedCharacter};
use crate::domain::value_objects::CharacterId;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Storage for finished characters
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// Persist a submitted character under a fresh id
    async fn save_character(&self, character: &CharacterDraft)
        -> Result<SavedCharacter, RepositoryError>;

    async fn get_character(&self, id: CharacterId)
        -> Result<Option<SavedCharacter>, RepositoryError>;

    /// Newest first
    async fn list_characters(&self) -> Result<Vec<SavedCharacter>, RepositoryError>;
}
