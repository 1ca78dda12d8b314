//! Playable races

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Halfling,
}

impl Race {
    pub const ALL: [Race; 4] = [Race::Human, Race::Elf, Race::Dwarf, Race::Halfling];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Dwarf => "Dwarf",
            Self::Halfling => "Halfling",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Human => {
                "Versatile and adaptable, humans are the most common race in many worlds."
            }
            Self::Elf => {
                "Graceful and long-lived, elves are known for their magic and connection to nature."
            }
            Self::Dwarf => {
                "Stout and hardy, dwarves are skilled craftsmen and formidable warriors."
            }
            Self::Halfling => "Small but brave, halflings are known for their luck and stealth.",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Race {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::ALL
            .into_iter()
            .find(|race| race.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown race: {}", s))
    }
}
