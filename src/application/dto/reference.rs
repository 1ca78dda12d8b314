//! Reference data the wizard shows alongside each step

use serde::Serialize;

use crate::domain::services::class_rules::class_skills;
use crate::domain::services::race_rules::racial_bonus;
use crate::domain::value_objects::{AttributeBonus, CharacterClass, Race, WizardStep};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceDto {
    pub race: Race,
    pub name: &'static str,
    pub description: &'static str,
    pub bonus: AttributeBonus,
}

impl From<Race> for RaceDto {
    fn from(race: Race) -> Self {
        Self {
            race,
            name: race.name(),
            description: race.description(),
            bonus: racial_bonus(race),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDto {
    pub class: CharacterClass,
    pub name: &'static str,
    pub description: &'static str,
    pub granted_skills: &'static [&'static str],
}

impl From<CharacterClass> for ClassDto {
    fn from(class: CharacterClass) -> Self {
        Self {
            class,
            name: class.name(),
            description: class.description(),
            granted_skills: class_skills(class),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDto {
    pub step: WizardStep,
    pub number: u8,
    pub title: &'static str,
}

impl From<WizardStep> for StepDto {
    fn from(step: WizardStep) -> Self {
        Self {
            step,
            number: step.ordinal(),
            title: step.title(),
        }
    }
}
