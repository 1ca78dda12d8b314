//! Character intents - the closed set of changes a wizard UI may request
//!
//! Every change to a character draft is expressed as one of these variants and
//! applied by the rule engine. There is no generic "merge these fields" intent.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BackgroundUpdate, EquipmentItem};
use crate::domain::value_objects::{Attribute, CharacterClass, EquipmentId, Race};

/// A single requested change to a character draft
///
/// # Examples
///
/// ```
/// use charforge::domain::value_objects::{Attribute, CharacterIntent, Race};
///
/// let pick_race = CharacterIntent::SetBasicInfo {
///     name: Some("Aria".to_string()),
///     race: Some(Race::Elf),
///     class: None,
/// };
/// let raise_dex = CharacterIntent::AdjustAttribute {
///     attribute: Attribute::Dexterity,
///     delta: 1,
/// };
/// assert_eq!(pick_race.name(), "set_basic_info");
/// assert_eq!(raise_dex.name(), "adjust_attribute");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CharacterIntent {
    /// Set any of name, race, class; absent fields are left unchanged
    SetBasicInfo {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        race: Option<Race>,
        #[serde(default)]
        class: Option<CharacterClass>,
    },

    /// Raise or lower a purchased score by `delta`
    AdjustAttribute { attribute: Attribute, delta: i32 },

    /// Set a purchased score to an exact value
    SetAttribute { attribute: Attribute, value: i32 },

    /// Add the skill if absent, remove it if present
    ToggleSkill { name: String },

    SetBackgroundField { update: BackgroundUpdate },

    /// Replace the whole equipment selection
    SetEquipment { items: Vec<EquipmentItem> },

    AddEquipment { item: EquipmentItem },

    RemoveEquipment { item_id: EquipmentId },

    LevelUp,

    GainXp { amount: u32 },
}

impl CharacterIntent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetBasicInfo { .. } => "set_basic_info",
            Self::AdjustAttribute { .. } => "adjust_attribute",
            Self::SetAttribute { .. } => "set_attribute",
            Self::ToggleSkill { .. } => "toggle_skill",
            Self::SetBackgroundField { .. } => "set_background_field",
            Self::SetEquipment { .. } => "set_equipment",
            Self::AddEquipment { .. } => "add_equipment",
            Self::RemoveEquipment { .. } => "remove_equipment",
            Self::LevelUp => "level_up",
            Self::GainXp { .. } => "gain_xp",
        }
    }
}
