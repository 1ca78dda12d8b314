//! SQLite persistence adapters

mod character_repository;

pub use character_repository::SqliteCharacterRepository;
