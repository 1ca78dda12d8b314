//! Race modifier rule - racial attribute bonuses
//!
//! Racial bonuses are granted, not purchased: they never touch the point-buy
//! budget. The draft remembers which race's bonus is applied, so selecting the
//! same race again changes nothing and switching races swaps the bonus.

use crate::domain::entities::{AppliedRacialBonus, CharacterDraft};
use crate::domain::events::CreationEffect;
use crate::domain::value_objects::{Attribute, AttributeBonus, Race};

/// Attribute deltas granted by a race
pub fn racial_bonus(race: Race) -> AttributeBonus {
    match race {
        Race::Human => Attribute::ALL.into_iter().map(|a| (a, 1)).collect(),
        Race::Elf => AttributeBonus::new()
            .with(Attribute::Dexterity, 2)
            .with(Attribute::Intelligence, 1),
        Race::Dwarf => AttributeBonus::new()
            .with(Attribute::Constitution, 2)
            .with(Attribute::Wisdom, 1),
        Race::Halfling => AttributeBonus::new()
            .with(Attribute::Dexterity, 2)
            .with(Attribute::Charisma, 1),
    }
}

/// Apply the bonus for a newly selected race to a working draft
pub fn apply_race(character: &mut CharacterDraft, race: Race) -> Vec<CreationEffect> {
    let mut effects = Vec::new();

    if let Some(applied) = &character.racial_bonus {
        if applied.race == race {
            return effects;
        }
        effects.push(CreationEffect::RacialModifiersReverted { race: applied.race });
    }

    let bonus = racial_bonus(race);
    character.racial_bonus = Some(AppliedRacialBonus {
        race,
        bonus: bonus.clone(),
    });
    effects.push(CreationEffect::RacialModifiersApplied { race, bonus });
    effects
}
