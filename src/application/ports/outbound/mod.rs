//! Outbound ports - Interfaces that the application requires from external systems

mod catalog_port;
mod repository_port;

pub use catalog_port::{CatalogError, EquipmentCatalogPort};
pub use repository_port::{CharacterRepositoryPort, RepositoryError};

#[cfg(test)]
pub use catalog_port::MockEquipmentCatalogPort;
#[cfg(test)]
pub use repository_port::MockCharacterRepositoryPort;
