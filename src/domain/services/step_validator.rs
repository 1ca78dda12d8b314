//! Step validator - completion predicates for each wizard step
//!
//! Errors are user-facing strings in a stable order. An empty list means the
//! step is complete. Submission requires every step to pass, plus the final
//! (post-racial) scores to be within the 3-18 range.

use crate::domain::entities::CharacterDraft;
use crate::domain::value_objects::{
    WizardStep, FINAL_SCORE_MAX, FINAL_SCORE_MIN, POINT_BUY_MAX, POINT_BUY_MIN,
};

/// Longest accepted character name
pub const MAX_NAME_LENGTH: usize = 255;
/// Fewest skills a finished character may have
pub const MIN_SKILLS: usize = 2;

/// Errors blocking one step
pub fn step_errors(step: WizardStep, character: &CharacterDraft) -> Vec<String> {
    let mut errors = Vec::new();

    match step {
        WizardStep::BasicInfo => {
            let name = character.name().trim();
            if name.is_empty() {
                errors.push("Name is required".to_string());
            } else if name.chars().count() > MAX_NAME_LENGTH {
                errors.push(format!(
                    "Name cannot exceed {} characters",
                    MAX_NAME_LENGTH
                ));
            }
            if character.race().is_none() {
                errors.push("Race is required".to_string());
            }
            if character.class().is_none() {
                errors.push("Class is required".to_string());
            }
        }
        WizardStep::Attributes => {
            if character.attribute_points() != 0 {
                errors.push(format!(
                    "You must use all attribute points ({} remaining)",
                    character.attribute_points()
                ));
            }
            for (attribute, value) in character.base_attributes().iter() {
                if !(POINT_BUY_MIN..=POINT_BUY_MAX).contains(&value) {
                    errors.push(format!(
                        "{} must be between {} and {}",
                        attribute, POINT_BUY_MIN, POINT_BUY_MAX
                    ));
                }
            }
        }
        WizardStep::Skills => {
            if character.skills().len() < MIN_SKILLS {
                errors.push(format!("You must select at least {} skills", MIN_SKILLS));
            }
        }
        WizardStep::Background => {
            let background = character.background();
            if background.name.trim().is_empty() {
                errors.push("Background name is required".to_string());
            }
            if background.personality_traits.is_empty() {
                errors.push("At least one personality trait is required".to_string());
            }
            if background.ideals.is_empty() {
                errors.push("At least one ideal is required".to_string());
            }
            if background.bonds.is_empty() {
                errors.push("At least one bond is required".to_string());
            }
            if background.flaws.is_empty() {
                errors.push("At least one flaw is required".to_string());
            }
        }
        WizardStep::Equipment => {
            if character.equipment().is_empty() {
                errors.push("You must select at least one piece of equipment".to_string());
            }
            if let Some(class) = character.class() {
                for item in character.equipment() {
                    if !item.usable_by(class) {
                        errors.push(format!("{} cannot be used by a {}", item.name, class));
                    }
                }
            }
        }
    }

    errors
}

pub fn is_step_complete(step: WizardStep, character: &CharacterDraft) -> bool {
    step_errors(step, character).is_empty()
}

/// First step, in wizard order, that still has errors
pub fn first_incomplete_step(character: &CharacterDraft) -> Option<WizardStep> {
    WizardStep::ALL
        .into_iter()
        .find(|step| !is_step_complete(*step, character))
}

/// Errors blocking final submission: every step plus final score bounds
pub fn submission_errors(character: &CharacterDraft) -> Vec<String> {
    let mut errors: Vec<String> = WizardStep::ALL
        .into_iter()
        .flat_map(|step| step_errors(step, character))
        .collect();

    for (attribute, value) in character.final_attributes().iter() {
        if !(FINAL_SCORE_MIN..=FINAL_SCORE_MAX).contains(&value) {
            errors.push(format!(
                "Final {} must be between {} and {}",
                attribute, FINAL_SCORE_MIN, FINAL_SCORE_MAX
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Background, EquipmentItem, EquipmentRarity, EquipmentType,
    };
    use crate::domain::value_objects::{Attribute, Attributes, CharacterClass, Race};

    fn staff() -> EquipmentItem {
        EquipmentItem::new("2", "Staff", EquipmentType::Weapon, EquipmentRarity::Common)
            .usable_by_classes([CharacterClass::Wizard])
    }

    fn complete_draft() -> CharacterDraft {
        let mut draft = CharacterDraft::new();
        draft.name = "Aria".to_string();
        draft.race = Some(Race::Elf);
        draft.class = Some(CharacterClass::Wizard);
        // 9 + 7 + 5 + 4 + 2 + 0 = 27
        draft.attributes = Attributes {
            strength: 8,
            dexterity: 14,
            constitution: 13,
            intelligence: 15,
            wisdom: 12,
            charisma: 10,
        };
        draft.attribute_points = 0;
        draft.skills = ["Arcana", "History"].iter().map(|s| s.to_string()).collect();
        draft.background = Background::new("Sage")
            .with_personality_trait("Curious")
            .with_ideal("Knowledge")
            .with_bond("My library")
            .with_flaw("Arrogant");
        draft.equipment = vec![staff()];
        draft
    }

    #[test]
    fn test_complete_draft_has_no_errors() {
        let draft = complete_draft();
        for step in WizardStep::ALL {
            assert!(step_errors(step, &draft).is_empty(), "{} failed", step);
        }
        assert!(submission_errors(&draft).is_empty());
        assert_eq!(first_incomplete_step(&draft), None);
    }

    #[test]
    fn test_basic_info_requires_name_race_class() {
        let draft = CharacterDraft::new();
        assert_eq!(
            step_errors(WizardStep::BasicInfo, &draft),
            vec!["Name is required", "Race is required", "Class is required"]
        );

        let mut draft = complete_draft();
        draft.name = "   ".to_string();
        assert_eq!(
            step_errors(WizardStep::BasicInfo, &draft),
            vec!["Name is required"]
        );

        draft.name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(step_errors(WizardStep::BasicInfo, &draft).len(), 1);
    }

    #[test]
    fn test_attributes_step_requires_exactly_zero_points() {
        let mut draft = complete_draft();
        draft.attribute_points = 1;
        assert!(!is_step_complete(WizardStep::Attributes, &draft));

        draft.attribute_points = 0;
        assert!(is_step_complete(WizardStep::Attributes, &draft));
    }

    #[test]
    fn test_attributes_step_checks_base_band() {
        let mut draft = complete_draft();
        draft.attributes.set(Attribute::Strength, 16);
        assert_eq!(
            step_errors(WizardStep::Attributes, &draft),
            vec!["strength must be between 8 and 15"]
        );
    }

    #[test]
    fn test_skills_step_minimum() {
        let mut draft = complete_draft();
        draft.skills.remove("History");
        assert_eq!(
            step_errors(WizardStep::Skills, &draft),
            vec!["You must select at least 2 skills"]
        );
    }

    #[test]
    fn test_background_step_requires_all_lists() {
        let mut draft = complete_draft();
        draft.background.bonds.clear();
        draft.background.flaws.clear();
        assert_eq!(
            step_errors(WizardStep::Background, &draft),
            vec!["At least one bond is required", "At least one flaw is required"]
        );
    }

    #[test]
    fn test_submission_fails_without_equipment() {
        let mut draft = complete_draft();
        draft.equipment.clear();

        assert_eq!(
            submission_errors(&draft),
            vec!["You must select at least one piece of equipment"]
        );
        assert_eq!(first_incomplete_step(&draft), Some(WizardStep::Equipment));
    }

    #[test]
    fn test_equipment_must_suit_class() {
        let mut draft = complete_draft();
        draft.class = Some(CharacterClass::Fighter);
        assert_eq!(
            step_errors(WizardStep::Equipment, &draft),
            vec!["Staff cannot be used by a Fighter"]
        );
    }

    #[test]
    fn test_submission_collects_errors_across_steps() {
        let mut draft = complete_draft();
        draft.name.clear();
        draft.skills.clear();

        let errors = submission_errors(&draft);
        assert_eq!(
            errors,
            vec!["Name is required", "You must select at least 2 skills"]
        );
    }
}
