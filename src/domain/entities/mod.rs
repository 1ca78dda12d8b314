//! Domain entities - The character draft and the things it is built from

mod background;
mod character;
mod equipment;

pub use background::{Background, BackgroundUpdate};
pub use character::{AppliedRacialBonus, CharacterDraft, SavedCharacter};
pub use equipment::{
    total_value, total_weight, ClassRestriction, EquipmentItem, EquipmentRarity, EquipmentType,
    DEFAULT_DURABILITY,
};
