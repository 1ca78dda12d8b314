use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::CreationWizard;
use crate::domain::entities::{
    total_value, total_weight, Background, CharacterDraft, EquipmentItem, SavedCharacter,
};
use crate::domain::events::CreationEffect;
use crate::domain::services::step_validator::is_step_complete;
use crate::domain::value_objects::{
    describe_background, Attribute, Attributes, CharacterClass, CharacterId, Race, SessionId,
    WizardStep,
};

/// Read-only view of a character draft
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterView {
    pub name: String,
    pub race: Option<Race>,
    pub class: Option<CharacterClass>,
    pub summary: String,
    pub base_attributes: Attributes,
    pub final_attributes: Attributes,
    pub modifiers: BTreeMap<Attribute, i32>,
    pub attribute_points: i32,
    pub skills: Vec<String>,
    pub background: Background,
    /// Preset description, or a generic line for custom backgrounds
    pub background_description: String,
    pub equipment: Vec<EquipmentItem>,
    /// One human-readable line per item
    pub equipment_lines: Vec<String>,
    pub total_weight: f64,
    pub total_value: u64,
    pub level: u32,
    pub health: i32,
    pub mana: i32,
    pub xp: u32,
}

impl From<&CharacterDraft> for CharacterView {
    fn from(character: &CharacterDraft) -> Self {
        Self {
            name: character.name().to_string(),
            race: character.race(),
            class: character.class(),
            summary: character.summary(),
            base_attributes: *character.base_attributes(),
            final_attributes: character.final_attributes(),
            modifiers: Attribute::ALL
                .into_iter()
                .map(|a| (a, character.modifier(a)))
                .collect(),
            attribute_points: character.attribute_points(),
            skills: character.skills().iter().cloned().collect(),
            background: character.background().clone(),
            background_description: describe_background(&character.background().name)
                .to_string(),
            equipment: character.equipment().to_vec(),
            equipment_lines: character.equipment().iter().map(|i| i.describe()).collect(),
            total_weight: total_weight(character.equipment()),
            total_value: total_value(character.equipment()),
            level: character.level(),
            health: character.health(),
            mana: character.mana(),
            xp: character.xp(),
        }
    }
}

/// A wizard session as the UI sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub current_step: WizardStep,
    pub step_number: u8,
    pub step_title: String,
    /// Errors blocking the current step
    pub step_errors: Vec<String>,
    pub completed_steps: Vec<WizardStep>,
    pub character: CharacterView,
    pub started_at: DateTime<Utc>,
}

impl From<&CreationWizard> for SessionView {
    fn from(wizard: &CreationWizard) -> Self {
        let step = wizard.current_step();
        Self {
            session_id: wizard.session_id(),
            current_step: step,
            step_number: step.ordinal(),
            step_title: step.title().to_string(),
            step_errors: wizard.current_errors(),
            completed_steps: WizardStep::ALL
                .into_iter()
                .filter(|s| is_step_complete(*s, wizard.character()))
                .collect(),
            character: CharacterView::from(wizard.character()),
            started_at: wizard.started_at(),
        }
    }
}

/// Result of applying one intent to a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentOutcome {
    pub accepted: bool,
    /// Reason the intent was refused; the draft is unchanged when set
    pub rejection: Option<String>,
    pub effects: Vec<CreationEffect>,
    /// Errors blocking the current step after the intent
    pub errors: Vec<String>,
    pub session: SessionView,
}

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationOutcome {
    pub moved: bool,
    /// Step that blocked the move, if any
    pub blocked_by: Option<WizardStep>,
    pub errors: Vec<String>,
    pub session: SessionView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Character stored; the session is closed
    Saved { character_id: CharacterId },
    /// Character not ready; the session is kept
    Incomplete { errors: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GoToStepRequest {
    pub step: WizardStep,
}

/// A stored character with its summary line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedCharacterDto {
    pub id: CharacterId,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    pub character: CharacterView,
}

impl From<&SavedCharacter> for SavedCharacterDto {
    fn from(saved: &SavedCharacter) -> Self {
        Self {
            id: saved.id,
            summary: saved.character.summary(),
            created_at: saved.created_at,
            character: CharacterView::from(&saved.character),
        }
    }
}
