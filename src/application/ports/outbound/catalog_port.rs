use async_trait::async_trait;

use crate::domain::entities::EquipmentItem;
use crate::domain::value_objects::CharacterClass;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Equipment catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of equipment a character can choose from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentCatalogPort: Send + Sync {
    /// Every item in the catalog
    async fn all_items(&self) -> Result<Vec<EquipmentItem>, CatalogError>;

    /// Items usable by the given class, including unrestricted ones
    async fn items_for_class(
        &self,
        class: CharacterClass,
    ) -> Result<Vec<EquipmentItem>, CatalogError>;

    /// Case-insensitive lookup by display name
    async fn find_by_name(&self, name: &str) -> Result<Option<EquipmentItem>, CatalogError>;
}
