//! Application services - Use case implementations
//!
//! Services accept their outbound ports as trait objects and return DTOs, so
//! the HTTP layer never touches the domain aggregates directly.

pub mod character_creation_service;

pub use character_creation_service::{
    CharacterCreationService, CharacterCreationServiceImpl, CreationError,
};
