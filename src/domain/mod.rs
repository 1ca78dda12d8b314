//! Domain layer - Character creation rules with no I/O
//!
//! This layer contains:
//! - Value Objects: attributes, races, classes, skills, wizard steps, intents
//! - Entities: the character draft, background, equipment items
//! - Services: point-buy, race and class derivation, step validation, the intent pipeline
//! - Aggregates: the creation wizard (draft plus navigation state)
//! - Events: effects produced by applying an intent

pub mod aggregates;
pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;
