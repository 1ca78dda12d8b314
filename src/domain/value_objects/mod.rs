//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod background_preset;
mod character_class;
mod ids;
mod intent;
mod race;
mod skill;
mod wizard_step;

pub use attributes::{
    ability_modifier, Attribute, AttributeBonus, Attributes, FINAL_SCORE_MAX, FINAL_SCORE_MIN,
    POINT_BUY_MAX, POINT_BUY_MIN,
};
pub use background_preset::{background_presets, describe_background, BackgroundPreset};
pub use character_class::CharacterClass;
pub use ids::*;
pub use intent::CharacterIntent;
pub use race::Race;
pub use skill::{default_skills, find_skill, SkillDefinition};
pub use wizard_step::WizardStep;
