//! Creation effects - what happened when an intent was applied
//!
//! The rule engine never performs I/O. It returns these alongside the new
//! draft and the host decides how to act on them (logging, notifying the UI,
//! persisting).

use serde::Serialize;

use crate::domain::value_objects::{Attribute, AttributeBonus, CharacterClass, Race};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CreationEffect {
    /// Name, race or class was set
    BasicInfoUpdated {
        name: Option<String>,
        race: Option<Race>,
        class: Option<CharacterClass>,
    },

    /// A purchased score changed through the allocator
    AttributeChanged {
        attribute: Attribute,
        from: i32,
        to: i32,
        remaining_points: i32,
    },

    /// A race's bonuses were added to the final scores
    RacialModifiersApplied { race: Race, bonus: AttributeBonus },

    /// A previously selected race's bonuses were removed
    RacialModifiersReverted { race: Race },

    /// Class skills that were not already known were added
    ClassSkillsGranted {
        class: CharacterClass,
        skills: Vec<String>,
    },

    SkillAdded { skill: String },

    SkillRemoved { skill: String },

    BackgroundUpdated { field: String },

    EquipmentUpdated { item_count: usize },

    LeveledUp { level: u32 },

    ExperienceGained { amount: u32, total: u32 },
}

impl CreationEffect {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BasicInfoUpdated { .. } => "basic_info_updated",
            Self::AttributeChanged { .. } => "attribute_changed",
            Self::RacialModifiersApplied { .. } => "racial_modifiers_applied",
            Self::RacialModifiersReverted { .. } => "racial_modifiers_reverted",
            Self::ClassSkillsGranted { .. } => "class_skills_granted",
            Self::SkillAdded { .. } => "skill_added",
            Self::SkillRemoved { .. } => "skill_removed",
            Self::BackgroundUpdated { .. } => "background_updated",
            Self::EquipmentUpdated { .. } => "equipment_updated",
            Self::LeveledUp { .. } => "leveled_up",
            Self::ExperienceGained { .. } => "experience_gained",
        }
    }
}
