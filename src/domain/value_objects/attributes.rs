//! The six attribute scores and the bonus maps applied on top of them

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lowest score purchasable with point-buy
pub const POINT_BUY_MIN: i32 = 8;
/// Highest score purchasable with point-buy
pub const POINT_BUY_MAX: i32 = 15;
/// Lowest final score a finished character may have
pub const FINAL_SCORE_MIN: i32 = 3;
/// Highest final score a finished character may have
pub const FINAL_SCORE_MAX: i32 = 18;

/// One of the six named attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Strength => "Measures physical power and carrying capacity",
            Self::Dexterity => "Measures agility, reflexes, and balance",
            Self::Constitution => "Measures endurance, stamina, and health",
            Self::Intelligence => "Measures reasoning and memory",
            Self::Wisdom => "Measures perception and insight",
            Self::Charisma => "Measures force of personality and leadership",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "constitution" | "con" => Ok(Self::Constitution),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "wisdom" | "wis" => Ok(Self::Wisdom),
            "charisma" | "cha" => Ok(Self::Charisma),
            other => Err(format!("Unknown attribute: {}", other)),
        }
    }
}

/// A full set of six scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for Attributes {
    /// Every score starts at the point-buy floor
    fn default() -> Self {
        Self::uniform(POINT_BUY_MIN)
    }
}

impl Attributes {
    pub fn uniform(value: i32) -> Self {
        Self {
            strength: value,
            dexterity: value,
            constitution: value,
            intelligence: value,
            wisdom: value,
            charisma: value,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = value;
    }

    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Iterate scores in canonical attribute order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Scores with a bonus map added on top
    pub fn with_bonus(&self, bonus: &AttributeBonus) -> Self {
        let mut result = *self;
        for (attribute, delta) in bonus.iter() {
            result.set(attribute, result.get(attribute) + delta);
        }
        result
    }
}

/// Standard ability modifier for a score: floor((score - 10) / 2)
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Partial map of attribute deltas (racial bonuses)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBonus(BTreeMap<Attribute, i32>);

impl AttributeBonus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: Attribute, delta: i32) -> Self {
        self.0.insert(attribute, delta);
        self
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        self.0.get(&attribute).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.0.iter().map(|(a, d)| (*a, *d))
    }
}

impl FromIterator<(Attribute, i32)> for AttributeBonus {
    fn from_iter<T: IntoIterator<Item = (Attribute, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
