use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::outbound::{CharacterRepositoryPort, RepositoryError};
use crate::domain::entities::{CharacterDraft, SavedCharacter};
use crate::domain::value_objects::CharacterId;

/// Finished characters stored as JSON snapshots, with a few columns pulled
/// out for listing
pub struct SqliteCharacterRepository {
    pool: SqlitePool,
}

impl SqliteCharacterRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                race TEXT,
                class TEXT,
                snapshot TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    fn row_to_saved(
        (id, snapshot, created_at): (String, String, DateTime<Utc>),
    ) -> Result<SavedCharacter, RepositoryError> {
        let uuid = Uuid::parse_str(&id).map_err(|e| {
            RepositoryError::Serialization(format!("Invalid character id {}: {}", id, e))
        })?;
        let character: CharacterDraft = serde_json::from_str(&snapshot)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        Ok(SavedCharacter {
            id: CharacterId::from_uuid(uuid),
            character,
            created_at,
        })
    }
}

#[async_trait]
impl CharacterRepositoryPort for SqliteCharacterRepository {
    async fn save_character(
        &self,
        character: &CharacterDraft,
    ) -> Result<SavedCharacter, RepositoryError> {
        let saved = SavedCharacter {
            id: CharacterId::new(),
            character: character.clone(),
            created_at: Utc::now(),
        };
        let snapshot = serde_json::to_string(&saved.character)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO characters (id, name, race, class, snapshot, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(saved.id.to_string())
        .bind(character.name())
        .bind(character.race().map(|r| r.name()))
        .bind(character.class().map(|c| c.name()))
        .bind(snapshot)
        .bind(saved.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(saved)
    }

    async fn get_character(
        &self,
        id: CharacterId,
    ) -> Result<Option<SavedCharacter>, RepositoryError> {
        let row: Option<(String, String, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, snapshot, created_at FROM characters WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(Self::row_to_saved).transpose()
    }

    async fn list_characters(&self) -> Result<Vec<SavedCharacter>, RepositoryError> {
        let rows: Vec<(String, String, DateTime<Utc>)> = sqlx::query_as(
            "SELECT id, snapshot, created_at FROM characters ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        rows.into_iter().map(Self::row_to_saved).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use crate::domain::services::rule_engine::apply_intent;
    use crate::domain::value_objects::{Attribute, CharacterClass, CharacterIntent, Race};

    async fn repository() -> SqliteCharacterRepository {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteCharacterRepository::new(pool).await.unwrap()
    }

    fn dwarf_cleric() -> CharacterDraft {
        let draft = CharacterDraft::new();
        let draft = apply_intent(
            &draft,
            CharacterIntent::SetBasicInfo {
                name: Some("Brom".to_string()),
                race: Some(Race::Dwarf),
                class: Some(CharacterClass::Cleric),
            },
        )
        .unwrap()
        .character;
        apply_intent(
            &draft,
            CharacterIntent::SetAttribute {
                attribute: Attribute::Wisdom,
                value: 15,
            },
        )
        .unwrap()
        .character
    }

    #[tokio::test]
    async fn test_save_and_get_round_trip() {
        let repository = repository().await;
        let character = dwarf_cleric();

        let saved = repository.save_character(&character).await.unwrap();
        let loaded = repository.get_character(saved.id).await.unwrap().unwrap();

        assert_eq!(loaded.id, saved.id);
        assert_eq!(loaded.character, character);
        assert_eq!(loaded.character.final_score(Attribute::Wisdom), 16);
        assert_eq!(loaded.character.attribute_points(), 18);
    }

    #[tokio::test]
    async fn test_get_missing_character() {
        let repository = repository().await;
        assert!(repository
            .get_character(CharacterId::new())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_characters() {
        let repository = repository().await;
        repository.save_character(&dwarf_cleric()).await.unwrap();
        repository.save_character(&CharacterDraft::new()).await.unwrap();

        let characters = repository.list_characters().await.unwrap();
        assert_eq!(characters.len(), 2);
    }
}
