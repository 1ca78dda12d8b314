//! Domain services - pure character creation rules
//!
//! Nothing in here performs I/O. The rule engine composes the other modules
//! into the intent pipeline.

pub mod class_rules;
pub mod point_buy;
pub mod race_rules;
pub mod rule_engine;
pub mod step_validator;

pub use class_rules::{apply_class, class_skills};
pub use point_buy::{allocate, point_cost, spent_points, Allocation, AllocationError, POINT_BUDGET};
pub use race_rules::{apply_race, racial_bonus};
pub use rule_engine::{apply_intent, RejectedMutation, Transition};
pub use step_validator::{
    first_incomplete_step, is_step_complete, step_errors, submission_errors, MAX_NAME_LENGTH,
    MIN_SKILLS,
};
