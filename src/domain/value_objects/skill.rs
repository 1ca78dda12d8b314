//! Skill catalog - the fixed list of skills a character can be trained in

use serde::Serialize;

use super::attributes::Attribute;

/// A skill and the attribute that governs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub attribute: Attribute,
    pub description: &'static str,
}

const fn skill(
    name: &'static str,
    attribute: Attribute,
    description: &'static str,
) -> SkillDefinition {
    SkillDefinition {
        name,
        attribute,
        description,
    }
}

static SKILLS: [SkillDefinition; 18] = [
    skill(
        "Acrobatics",
        Attribute::Dexterity,
        "Your ability to stay on your feet in tricky situations.",
    ),
    skill(
        "Animal Handling",
        Attribute::Wisdom,
        "Your ability to calm down a domesticated animal or intuit an animal's intentions.",
    ),
    skill(
        "Arcana",
        Attribute::Intelligence,
        "Your ability to recall lore about spells, magic items, eldritch symbols, magical traditions, the planes of existence, and the inhabitants of those planes.",
    ),
    skill(
        "Athletics",
        Attribute::Strength,
        "Your ability in difficult situations while climbing, jumping, or swimming.",
    ),
    skill(
        "Deception",
        Attribute::Charisma,
        "Your ability to convincingly hide the truth, either verbally or through your actions.",
    ),
    skill(
        "History",
        Attribute::Intelligence,
        "Your ability to recall lore about historical events, legendary people, ancient kingdoms, past disputes, recent wars, and lost civilizations.",
    ),
    skill(
        "Insight",
        Attribute::Wisdom,
        "Your ability to determine the true intentions of a creature.",
    ),
    skill(
        "Intimidation",
        Attribute::Charisma,
        "Your ability to influence someone through overt threats, hostile actions, and physical violence.",
    ),
    skill(
        "Investigation",
        Attribute::Intelligence,
        "Your ability to look around for clues and make deductions based on those clues.",
    ),
    skill(
        "Medicine",
        Attribute::Wisdom,
        "Your ability to stabilize a dying companion or diagnose an illness.",
    ),
    skill(
        "Nature",
        Attribute::Intelligence,
        "Your ability to recall lore about terrain, plants and animals, the weather, and natural cycles.",
    ),
    skill(
        "Perception",
        Attribute::Wisdom,
        "Your ability to spot, hear, or otherwise detect the presence of something.",
    ),
    skill(
        "Performance",
        Attribute::Charisma,
        "Your ability to delight an audience with music, dance, acting, storytelling, or some other form of entertainment.",
    ),
    skill(
        "Persuasion",
        Attribute::Charisma,
        "Your ability to influence someone or a group of people with tact, social graces, or good nature.",
    ),
    skill(
        "Religion",
        Attribute::Intelligence,
        "Your ability to recall lore about deities, rites and prayers, religious hierarchies, holy symbols, and the practices of secret cults.",
    ),
    skill(
        "Sleight of Hand",
        Attribute::Dexterity,
        "Your ability to perform acts of legerdemain or manual trickery, such as planting something on someone else or concealing an object on your person.",
    ),
    skill(
        "Stealth",
        Attribute::Dexterity,
        "Your ability to conceal yourself from enemies, slink past guards, slip away without being noticed, or sneak up on someone without being seen or heard.",
    ),
    skill(
        "Survival",
        Attribute::Wisdom,
        "Your ability to follow tracks, hunt wild game, guide your group through frozen wastelands, identify signs that owlbears live nearby, predict the weather, or avoid quicksand and other natural hazards.",
    ),
];

/// All skills a character may choose from
pub fn default_skills() -> &'static [SkillDefinition] {
    &SKILLS
}

/// Look up a skill by its exact name
pub fn find_skill(name: &str) -> Option<&'static SkillDefinition> {
    SKILLS.iter().find(|s| s.name == name)
}
