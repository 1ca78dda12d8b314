//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Catalog: in-process equipment catalog
//! - Persistence: SQLite adapter for finished characters
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod catalog;
pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
