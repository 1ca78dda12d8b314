//! Named background presets offered by the wizard
//!
//! A background name does not have to match a preset; custom backgrounds are
//! allowed.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundPreset {
    pub name: &'static str,
    pub description: &'static str,
}

static PRESETS: [BackgroundPreset; 13] = [
    BackgroundPreset {
        name: "Acolyte",
        description: "You have spent your life in service to a temple.",
    },
    BackgroundPreset {
        name: "Charlatan",
        description: "You have always had a way with people, and made your living by swindling them.",
    },
    BackgroundPreset {
        name: "Criminal",
        description: "You are an experienced criminal with a history of breaking the law.",
    },
    BackgroundPreset {
        name: "Entertainer",
        description: "You thrive in front of an audience, and know how to captivate them.",
    },
    BackgroundPreset {
        name: "Folk Hero",
        description: "You come from a humble background, but are destined for so much more.",
    },
    BackgroundPreset {
        name: "Guild Artisan",
        description: "You are a member of an artisan's guild, skilled in a particular field.",
    },
    BackgroundPreset {
        name: "Hermit",
        description: "You lived in seclusion for a formative part of your life.",
    },
    BackgroundPreset {
        name: "Noble",
        description: "You understand wealth, power, and privilege.",
    },
    BackgroundPreset {
        name: "Outlander",
        description: "You grew up in the wilds, far from civilization.",
    },
    BackgroundPreset {
        name: "Sage",
        description: "You spent years learning the lore of the multiverse.",
    },
    BackgroundPreset {
        name: "Sailor",
        description: "You sailed on a seagoing vessel for years.",
    },
    BackgroundPreset {
        name: "Soldier",
        description: "You were a soldier in an army, militia, or mercenary company.",
    },
    BackgroundPreset {
        name: "Urchin",
        description: "You grew up on the streets alone, orphaned and poor.",
    },
];

pub fn background_presets() -> &'static [BackgroundPreset] {
    &PRESETS
}

/// Description for a background name, falling back to "Custom background"
pub fn describe_background(name: &str) -> &'static str {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.description)
        .unwrap_or("Custom background")
}
