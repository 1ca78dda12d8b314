//! The ordered steps of the creation wizard

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of the strictly linear creation wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Attributes,
    Skills,
    Background,
    Equipment,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::BasicInfo,
        WizardStep::Attributes,
        WizardStep::Skills,
        WizardStep::Background,
        WizardStep::Equipment,
    ];

    pub fn first() -> Self {
        Self::BasicInfo
    }

    pub fn last() -> Self {
        Self::Equipment
    }

    /// 1-based position in the wizard
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Attributes => 2,
            Self::Skills => 3,
            Self::Background => 4,
            Self::Equipment => 5,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ordinal() == ordinal)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Attributes => "Attributes",
            Self::Skills => "Skills",
            Self::Background => "Background",
            Self::Equipment => "Equipment",
        }
    }

    /// Steps strictly before this one
    pub fn predecessors(&self) -> impl Iterator<Item = WizardStep> {
        let ordinal = self.ordinal();
        Self::ALL.into_iter().filter(move |s| s.ordinal() < ordinal)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ordering() {
        assert_eq!(WizardStep::BasicInfo.next(), Some(WizardStep::Attributes));
        assert_eq!(WizardStep::Equipment.next(), None);
        assert_eq!(WizardStep::BasicInfo.previous(), None);
        assert_eq!(WizardStep::Skills.previous(), Some(WizardStep::Attributes));
        assert!(WizardStep::BasicInfo < WizardStep::Equipment);
    }

    #[test]
    fn test_predecessors() {
        let before: Vec<_> = WizardStep::Skills.predecessors().collect();
        assert_eq!(before, vec![WizardStep::BasicInfo, WizardStep::Attributes]);
        assert_eq!(WizardStep::BasicInfo.predecessors().count(), 0);
    }
}
