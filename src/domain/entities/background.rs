//! Character background - name plus the four roleplaying trait lists

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub name: String,
    pub personality_traits: Vec<String>,
    pub ideals: Vec<String>,
    pub bonds: Vec<String>,
    pub flaws: Vec<String>,
}

impl Background {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_personality_trait(mut self, value: impl Into<String>) -> Self {
        self.personality_traits.push(value.into());
        self
    }

    pub fn with_ideal(mut self, value: impl Into<String>) -> Self {
        self.ideals.push(value.into());
        self
    }

    pub fn with_bond(mut self, value: impl Into<String>) -> Self {
        self.bonds.push(value.into());
        self
    }

    pub fn with_flaw(mut self, value: impl Into<String>) -> Self {
        self.flaws.push(value.into());
        self
    }

    /// Replace one field. List entries are trimmed and blank entries dropped.
    pub fn apply(&mut self, update: BackgroundUpdate) {
        match update {
            BackgroundUpdate::Name(name) => self.name = name.trim().to_string(),
            BackgroundUpdate::PersonalityTraits(values) => {
                self.personality_traits = normalize(values)
            }
            BackgroundUpdate::Ideals(values) => self.ideals = normalize(values),
            BackgroundUpdate::Bonds(values) => self.bonds = normalize(values),
            BackgroundUpdate::Flaws(values) => self.flaws = normalize(values),
        }
    }
}

fn normalize(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// A replacement value for a single background field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum BackgroundUpdate {
    Name(String),
    PersonalityTraits(Vec<String>),
    Ideals(Vec<String>),
    Bonds(Vec<String>),
    Flaws(Vec<String>),
}

impl BackgroundUpdate {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::PersonalityTraits(_) => "personality_traits",
            Self::Ideals(_) => "ideals",
            Self::Bonds(_) => "bonds",
            Self::Flaws(_) => "flaws",
        }
    }
}
