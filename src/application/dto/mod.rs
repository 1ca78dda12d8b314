//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can serialize
//! views of sessions and reference data without exposing the draft's internals.

pub mod creation;
pub mod reference;

pub use creation::*;
pub use reference::*;
