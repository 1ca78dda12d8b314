//! Charforge - character creation rules engine
//!
//! A tabletop character is built over five wizard steps. Every change is an
//! intent that the rule engine applies to a draft, running the derived race and
//! class rules and re-validating the current step. The HTTP host in `main.rs`
//! keeps one draft per creation session and stores submitted characters in
//! SQLite.

pub mod application;
pub mod domain;
pub mod infrastructure;
