//! Playable classes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Fighter,
    Wizard,
    Rogue,
    Cleric,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Fighter,
        CharacterClass::Wizard,
        CharacterClass::Rogue,
        CharacterClass::Cleric,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fighter => "Fighter",
            Self::Wizard => "Wizard",
            Self::Rogue => "Rogue",
            Self::Cleric => "Cleric",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Fighter => {
                "Masters of martial combat, skilled with a variety of weapons and armor."
            }
            Self::Wizard => {
                "Scholarly magic-users capable of manipulating the structures of reality."
            }
            Self::Rogue => "Skilled tricksters and stealthy operators, masters of subterfuge.",
            Self::Cleric => {
                "Priestly champions who wield divine magic in service of a higher power."
            }
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown class: {}", s))
    }
}
