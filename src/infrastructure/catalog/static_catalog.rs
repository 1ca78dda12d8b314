//! In-process equipment catalog
//!
//! Serves a fixed item list with an optional artificial delay so hosts can
//! exercise loading states the way a remote catalog would.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::outbound::{CatalogError, EquipmentCatalogPort};
use crate::domain::entities::{EquipmentItem, EquipmentRarity, EquipmentType};
use crate::domain::value_objects::CharacterClass;

pub struct StaticEquipmentCatalog {
    items: Vec<EquipmentItem>,
    latency: Duration,
}

impl StaticEquipmentCatalog {
    pub fn new(latency: Duration) -> Self {
        Self::with_items(default_items(), latency)
    }

    pub fn with_items(items: Vec<EquipmentItem>, latency: Duration) -> Self {
        Self { items, latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn default_items() -> Vec<EquipmentItem> {
    vec![
        EquipmentItem::new("1", "Sword", EquipmentType::Weapon, EquipmentRarity::Common)
            .with_description("A sharp blade for melee combat")
            .with_weight(3.0)
            .with_value(15)
            .usable_by_classes([CharacterClass::Fighter]),
        EquipmentItem::new("2", "Staff", EquipmentType::Weapon, EquipmentRarity::Common)
            .with_description("A magical focus for spellcasting")
            .with_weight(2.0)
            .with_value(10)
            .usable_by_classes([CharacterClass::Wizard]),
        EquipmentItem::new("3", "Bow", EquipmentType::Weapon, EquipmentRarity::Common)
            .with_description("A ranged weapon for precise attacks")
            .with_weight(2.0)
            .with_value(25)
            .usable_by_classes([CharacterClass::Rogue]),
        EquipmentItem::new("4", "Shield", EquipmentType::Armor, EquipmentRarity::Common)
            .with_description("Protective gear to block attacks")
            .with_weight(6.0)
            .with_value(10)
            .usable_by_classes([CharacterClass::Fighter, CharacterClass::Cleric]),
        EquipmentItem::new("5", "Healing Potion", EquipmentType::Potion, EquipmentRarity::Common)
            .with_description("Restores health when consumed")
            .with_weight(0.5)
            .with_value(50),
    ]
}

#[async_trait]
impl EquipmentCatalogPort for StaticEquipmentCatalog {
    async fn all_items(&self) -> Result<Vec<EquipmentItem>, CatalogError> {
        self.simulate_latency().await;
        Ok(self.items.clone())
    }

    async fn items_for_class(
        &self,
        class: CharacterClass,
    ) -> Result<Vec<EquipmentItem>, CatalogError> {
        self.simulate_latency().await;
        let items: Vec<EquipmentItem> = self
            .items
            .iter()
            .filter(|item| item.usable_by(class))
            .cloned()
            .collect();
        debug!(class = %class, count = items.len(), "Fetched equipment for class");
        Ok(items)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<EquipmentItem>, CatalogError> {
        Ok(self
            .items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticEquipmentCatalog {
        StaticEquipmentCatalog::new(Duration::ZERO)
    }

    fn names(items: &[EquipmentItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_items_for_class_include_unrestricted_once() {
        let catalog = catalog();

        let fighter = catalog.items_for_class(CharacterClass::Fighter).await.unwrap();
        assert_eq!(names(&fighter), vec!["Sword", "Shield", "Healing Potion"]);

        let wizard = catalog.items_for_class(CharacterClass::Wizard).await.unwrap();
        assert_eq!(names(&wizard), vec!["Staff", "Healing Potion"]);

        let cleric = catalog.items_for_class(CharacterClass::Cleric).await.unwrap();
        assert_eq!(names(&cleric), vec!["Shield", "Healing Potion"]);
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let catalog = catalog();
        let bow = catalog.find_by_name("bow").await.unwrap().unwrap();
        assert_eq!(bow.value, 25);
        assert!(catalog.find_by_name("Trident").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_all_items() {
        let items = catalog().all_items().await.unwrap();
        assert_eq!(items.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let catalog = StaticEquipmentCatalog::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        catalog.all_items().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
