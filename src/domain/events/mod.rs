//! Domain events - Effects produced by applying an intent to a draft

pub mod creation_effects;

pub use creation_effects::CreationEffect;
