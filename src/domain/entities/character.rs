//! Character draft - the aggregate a creation session builds up
//!
//! Fields are only writable inside the crate so that every change goes through
//! the rule engine (`domain::services::rule_engine`). Hosts read the draft via
//! the accessors and change it by submitting intents.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Background, EquipmentItem};
use crate::domain::services::point_buy::POINT_BUDGET;
use crate::domain::value_objects::{
    ability_modifier, Attribute, AttributeBonus, Attributes, CharacterClass, CharacterId, Race,
};

/// Racial bonus currently applied, remembered so reselection is idempotent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRacialBonus {
    pub race: Race,
    pub bonus: AttributeBonus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDraft {
    pub(crate) name: String,
    pub(crate) race: Option<Race>,
    pub(crate) class: Option<CharacterClass>,
    /// Purchased scores; only the point-buy allocator writes these
    pub(crate) attributes: Attributes,
    pub(crate) racial_bonus: Option<AppliedRacialBonus>,
    /// Unspent point-buy budget
    pub(crate) attribute_points: i32,
    pub(crate) skills: BTreeSet<String>,
    pub(crate) background: Background,
    pub(crate) equipment: Vec<EquipmentItem>,

    // Progression
    pub(crate) level: u32,
    pub(crate) health: i32,
    pub(crate) mana: i32,
    pub(crate) xp: u32,
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            race: None,
            class: None,
            attributes: Attributes::default(),
            racial_bonus: None,
            attribute_points: POINT_BUDGET,
            skills: BTreeSet::new(),
            background: Background::default(),
            equipment: Vec::new(),
            level: 1,
            health: 0,
            mana: 0,
            xp: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Option<Race> {
        self.race
    }

    pub fn class(&self) -> Option<CharacterClass> {
        self.class
    }

    /// Purchased scores, before racial bonuses
    pub fn base_attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn racial_bonus(&self) -> Option<&AppliedRacialBonus> {
        self.racial_bonus.as_ref()
    }

    /// Scores after racial bonuses
    pub fn final_attributes(&self) -> Attributes {
        match &self.racial_bonus {
            Some(applied) => self.attributes.with_bonus(&applied.bonus),
            None => self.attributes,
        }
    }

    pub fn final_score(&self, attribute: Attribute) -> i32 {
        self.final_attributes().get(attribute)
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        ability_modifier(self.final_score(attribute))
    }

    pub fn attribute_points(&self) -> i32 {
        self.attribute_points
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn equipment(&self) -> &[EquipmentItem] {
        &self.equipment
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn mana(&self) -> i32 {
        self.mana
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// "Aria the Elf Wizard", with blanks for unchosen parts
    pub fn summary(&self) -> String {
        let name = if self.name.is_empty() {
            "Unnamed"
        } else {
            self.name.as_str()
        };
        let mut line = name.to_string();
        let descriptors: Vec<&str> = [
            self.race.map(|r| r.name()),
            self.class.map(|c| c.name()),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !descriptors.is_empty() {
            line.push_str(" the ");
            line.push_str(&descriptors.join(" "));
        }
        line
    }
}

/// A finished character as stored by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCharacter {
    pub id: CharacterId,
    pub character: CharacterDraft,
    pub created_at: DateTime<Utc>,
}
