//! Rule engine - the ordered intent pipeline
//!
//! Applying an intent runs three phases against a working copy of the draft:
//! 1. the primary change (field assignment, allocator call, skill toggle, ...)
//! 2. derived rules (race bonuses, then class skills)
//! 3. the caller re-validates the result
//!
//! The input draft is never touched. Either a complete `Transition` comes back
//! or a `RejectedMutation` does, so a rejected intent cannot leave a partial
//! change behind.

use crate::domain::entities::{CharacterDraft, EquipmentItem};
use crate::domain::events::CreationEffect;
use crate::domain::services::class_rules::apply_class;
use crate::domain::services::point_buy::{allocate, AllocationError};
use crate::domain::services::race_rules::apply_race;
use crate::domain::value_objects::{
    find_skill, Attribute, CharacterClass, CharacterIntent, EquipmentId,
};

/// The draft after an accepted intent, plus what happened
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub character: CharacterDraft,
    pub effects: Vec<CreationEffect>,
}

/// Why an intent was refused; the draft is unchanged
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RejectedMutation {
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("{item} cannot be used by {usable_by}")]
    EquipmentNotUsable { item: String, usable_by: String },

    #[error("Equipment {0} is already selected")]
    DuplicateEquipment(EquipmentId),

    #[error("Equipment {0} is not in the catalog")]
    UnknownEquipment(EquipmentId),
}

/// Apply one intent to a draft, returning the new draft and its effects
pub fn apply_intent(
    character: &CharacterDraft,
    intent: CharacterIntent,
) -> Result<Transition, RejectedMutation> {
    let mut draft = character.clone();
    let mut effects = Vec::new();

    match intent {
        CharacterIntent::SetBasicInfo { name, race, class } => {
            if let Some(name) = &name {
                draft.name = name.trim().to_string();
            }
            if let Some(race) = race {
                draft.race = Some(race);
            }
            if let Some(class) = class {
                draft.class = Some(class);
            }
            effects.push(CreationEffect::BasicInfoUpdated {
                name: name.map(|_| draft.name.clone()),
                race,
                class,
            });

            // Derived rules run after every primary field is assigned
            if let Some(race) = race {
                effects.extend(apply_race(&mut draft, race));
            }
            if let Some(class) = class {
                effects.extend(apply_class(&mut draft, class));
            }
        }

        CharacterIntent::AdjustAttribute { attribute, delta } => {
            let target = draft.attributes.get(attribute).saturating_add(delta);
            effects.push(set_attribute(&mut draft, attribute, target)?);
        }

        CharacterIntent::SetAttribute { attribute, value } => {
            effects.push(set_attribute(&mut draft, attribute, value)?);
        }

        CharacterIntent::ToggleSkill { name } => {
            let skill = find_skill(name.trim())
                .ok_or_else(|| RejectedMutation::UnknownSkill(name.clone()))?;
            if draft.skills.remove(skill.name) {
                effects.push(CreationEffect::SkillRemoved {
                    skill: skill.name.to_string(),
                });
            } else {
                draft.skills.insert(skill.name.to_string());
                effects.push(CreationEffect::SkillAdded {
                    skill: skill.name.to_string(),
                });
            }
        }

        CharacterIntent::SetBackgroundField { update } => {
            let field = update.field_name().to_string();
            draft.background.apply(update);
            effects.push(CreationEffect::BackgroundUpdated { field });
        }

        CharacterIntent::SetEquipment { items } => {
            for (index, item) in items.iter().enumerate() {
                check_usable(item, draft.class)?;
                if items[..index].iter().any(|other| other.id == item.id) {
                    return Err(RejectedMutation::DuplicateEquipment(item.id.clone()));
                }
            }
            draft.equipment = items;
            effects.push(CreationEffect::EquipmentUpdated {
                item_count: draft.equipment.len(),
            });
        }

        CharacterIntent::AddEquipment { item } => {
            check_usable(&item, draft.class)?;
            if draft.equipment.iter().any(|other| other.id == item.id) {
                return Err(RejectedMutation::DuplicateEquipment(item.id));
            }
            draft.equipment.push(item);
            effects.push(CreationEffect::EquipmentUpdated {
                item_count: draft.equipment.len(),
            });
        }

        CharacterIntent::RemoveEquipment { item_id } => {
            let before = draft.equipment.len();
            draft.equipment.retain(|item| item.id != item_id);
            if draft.equipment.len() != before {
                effects.push(CreationEffect::EquipmentUpdated {
                    item_count: draft.equipment.len(),
                });
            }
        }

        CharacterIntent::LevelUp => {
            draft.level += 1;
            effects.push(CreationEffect::LeveledUp { level: draft.level });
        }

        CharacterIntent::GainXp { amount } => {
            draft.xp = draft.xp.saturating_add(amount);
            effects.push(CreationEffect::ExperienceGained {
                amount,
                total: draft.xp,
            });
        }
    }

    Ok(Transition {
        character: draft,
        effects,
    })
}

fn set_attribute(
    draft: &mut CharacterDraft,
    attribute: Attribute,
    value: i32,
) -> Result<CreationEffect, RejectedMutation> {
    let from = draft.attributes.get(attribute);
    let allocation = allocate(&draft.attributes, draft.attribute_points, attribute, value)?;
    draft.attributes = allocation.attributes;
    draft.attribute_points = allocation.remaining_points;

    Ok(CreationEffect::AttributeChanged {
        attribute,
        from,
        to: value,
        remaining_points: allocation.remaining_points,
    })
}

/// Without a class only unrestricted items are allowed
fn check_usable(
    item: &EquipmentItem,
    class: Option<CharacterClass>,
) -> Result<(), RejectedMutation> {
    let usable = match class {
        Some(class) => item.usable_by(class),
        None => item.classes.is_unrestricted(),
    };
    if usable {
        Ok(())
    } else {
        Err(RejectedMutation::EquipmentNotUsable {
            item: item.name.clone(),
            usable_by: match class {
                Some(class) => format!("a {}", class),
                None => "a character without a class".to_string(),
            },
        })
    }
}
