//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;

use crate::application::ports::outbound::EquipmentCatalogPort;
use crate::application::services::{CharacterCreationService, CharacterCreationServiceImpl};
use crate::infrastructure::catalog::StaticEquipmentCatalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::SqliteCharacterRepository;

/// Shared application state
pub struct AppState {
    pub equipment_catalog: Arc<dyn EquipmentCatalogPort>,
    pub creation_service: Arc<dyn CharacterCreationService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Initialize SQLite for finished characters
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to connect to {}", config.database_url))?;
        let repository = SqliteCharacterRepository::new(pool)
            .await
            .context("Failed to initialize the characters table")?;

        // Initialize equipment catalog
        let catalog: Arc<dyn EquipmentCatalogPort> = Arc::new(StaticEquipmentCatalog::new(
            Duration::from_millis(config.catalog_latency_ms),
        ));

        let creation_service =
            CharacterCreationServiceImpl::new(catalog.clone(), Arc::new(repository));

        Ok(Self::with_services(catalog, Arc::new(creation_service)))
    }

    pub fn with_services(
        equipment_catalog: Arc<dyn EquipmentCatalogPort>,
        creation_service: Arc<dyn CharacterCreationService>,
    ) -> Self {
        Self {
            equipment_catalog,
            creation_service,
        }
    }
}
