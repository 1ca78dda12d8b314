//! Class skill rule - skills granted by a class
//!
//! Granting is a set union, so it is idempotent. Skills granted by a
//! previously selected class stay on the draft.

use crate::domain::entities::CharacterDraft;
use crate::domain::events::CreationEffect;
use crate::domain::value_objects::CharacterClass;

/// Bonus skills granted by a class
pub fn class_skills(class: CharacterClass) -> &'static [&'static str] {
    match class {
        CharacterClass::Fighter => &["Athletics", "Intimidation", "Survival"],
        CharacterClass::Wizard => &["Arcana", "History", "Investigation"],
        CharacterClass::Rogue => &["Acrobatics", "Deception", "Stealth"],
        CharacterClass::Cleric => &["Medicine", "Insight", "Religion"],
    }
}

/// Add the class's skills that the working draft doesn't already have
pub fn apply_class(character: &mut CharacterDraft, class: CharacterClass) -> Vec<CreationEffect> {
    let granted: Vec<String> = class_skills(class)
        .iter()
        .filter(|skill| character.skills.insert(skill.to_string()))
        .map(|skill| skill.to_string())
        .collect();

    if granted.is_empty() {
        return Vec::new();
    }
    vec![CreationEffect::ClassSkillsGranted {
        class,
        skills: granted,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::find_skill;

    #[test]
    fn test_class_skills_exist_in_catalog() {
        for class in CharacterClass::ALL {
            for skill in class_skills(class) {
                assert!(find_skill(skill).is_some(), "{} is not a known skill", skill);
            }
        }
    }

    #[test]
    fn test_grant_is_union() {
        let mut draft = CharacterDraft::new();
        draft.skills.insert("Arcana".to_string());
        draft.skills.insert("Stealth".to_string());

        let effects = apply_class(&mut draft, CharacterClass::Wizard);

        assert_eq!(
            effects,
            vec![CreationEffect::ClassSkillsGranted {
                class: CharacterClass::Wizard,
                skills: vec!["History".to_string(), "Investigation".to_string()],
            }]
        );
        assert_eq!(draft.skills().len(), 4);
    }

    #[test]
    fn test_reselection_is_idempotent() {
        let mut draft = CharacterDraft::new();
        apply_class(&mut draft, CharacterClass::Cleric);
        let before = draft.skills().clone();

        for _ in 0..3 {
            assert!(apply_class(&mut draft, CharacterClass::Cleric).is_empty());
        }
        assert_eq!(draft.skills(), &before);
        assert!(class_skills(CharacterClass::Cleric)
            .iter()
            .all(|s| draft.has_skill(s)));
    }
}
