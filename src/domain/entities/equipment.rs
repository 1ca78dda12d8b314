//! Equipment items - immutable catalog reference data

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CharacterClass, EquipmentId};

/// Durability assigned to items that don't specify one
pub const DEFAULT_DURABILITY: u32 = 100;

/// An item from the equipment catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: EquipmentId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: EquipmentType,
    pub rarity: EquipmentRarity,
    /// Weight in pounds
    pub weight: f64,
    /// Value in gold pieces
    pub value: u32,
    pub classes: ClassRestriction,
    #[serde(default)]
    pub magical_properties: Vec<String>,
    #[serde(default = "default_durability")]
    pub durability: u32,
}

fn default_durability() -> u32 {
    DEFAULT_DURABILITY
}

impl EquipmentItem {
    pub fn new(
        id: impl Into<EquipmentId>,
        name: impl Into<String>,
        item_type: EquipmentType,
        rarity: EquipmentRarity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            item_type,
            rarity,
            weight: 0.0,
            value: 0,
            classes: ClassRestriction::All,
            magical_properties: Vec::new(),
            durability: DEFAULT_DURABILITY,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    pub fn usable_by_classes(mut self, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        self.classes = ClassRestriction::Classes(classes.into_iter().collect());
        self
    }

    pub fn with_magical_property(mut self, property: impl Into<String>) -> Self {
        self.magical_properties.push(property.into());
        self
    }

    /// Whether a character of the given class may equip this item
    pub fn usable_by(&self, class: CharacterClass) -> bool {
        self.classes.allows(class)
    }

    /// One-line human readable description
    pub fn describe(&self) -> String {
        let mut line = format!(
            "{} ({}, {}): {}. Value: {} gold, Weight: {} lbs. ",
            self.name, self.item_type, self.rarity, self.description, self.value, self.weight
        );
        if !self.magical_properties.is_empty() {
            line.push_str(&format!(
                "Magical Properties: {}. ",
                self.magical_properties.join(", ")
            ));
        }
        line.push_str(&format!("Durability: {}. ", self.durability));
        line.push_str(&format!("Usable by: {}.", self.classes));
        line
    }
}

/// Total weight in pounds
pub fn total_weight(items: &[EquipmentItem]) -> f64 {
    items.iter().map(|i| i.weight).sum()
}

/// Total value in gold pieces, widened so large selections cannot overflow
pub fn total_value(items: &[EquipmentItem]) -> u64 {
    items.iter().map(|i| u64::from(i.value)).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    Weapon,
    Armor,
    Potion,
    Scroll,
    Wand,
    Ring,
    Miscellaneous,
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
            Self::Potion => "Potion",
            Self::Scroll => "Scroll",
            Self::Wand => "Wand",
            Self::Ring => "Ring",
            Self::Miscellaneous => "Miscellaneous",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentRarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Very Rare")]
    VeryRare,
    Legendary,
}

impl fmt::Display for EquipmentRarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::VeryRare => "Very Rare",
            Self::Legendary => "Legendary",
        };
        f.write_str(name)
    }
}

/// Which classes may use an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassRestriction {
    All,
    Classes(BTreeSet<CharacterClass>),
}

impl ClassRestriction {
    pub fn allows(&self, class: CharacterClass) -> bool {
        match self {
            Self::All => true,
            Self::Classes(classes) => classes.contains(&class),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for ClassRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Classes(classes) => {
                let names: Vec<_> = classes.iter().map(|c| c.name()).collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}
