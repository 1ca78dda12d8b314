//! Creation Wizard - one session's character draft and its position in the wizard
//!
//! All changes to the draft go through the rule engine, and all step changes go
//! through the navigation methods here, so the wizard can never stand on a step
//! whose predecessors are incomplete.

use chrono::{DateTime, Utc};

use crate::domain::entities::CharacterDraft;
use crate::domain::events::CreationEffect;
use crate::domain::services::rule_engine::{apply_intent, RejectedMutation};
use crate::domain::services::step_validator::{step_errors, submission_errors};
use crate::domain::value_objects::{CharacterIntent, SessionId, WizardStep};

#[derive(Debug, Clone)]
pub struct CreationWizard {
    session_id: SessionId,
    character: CharacterDraft,
    current_step: WizardStep,
    started_at: DateTime<Utc>,
}

impl CreationWizard {
    /// Start a wizard on the first step with a fresh draft
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            character: CharacterDraft::new(),
            current_step: WizardStep::first(),
            started_at: Utc::now(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn character(&self) -> &CharacterDraft {
        &self.character
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Errors blocking the step the wizard is on
    pub fn current_errors(&self) -> Vec<String> {
        step_errors(self.current_step, &self.character)
    }

    /// Errors blocking submission of the whole character
    pub fn submission_errors(&self) -> Vec<String> {
        submission_errors(&self.character)
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Run an intent through the rule engine.
    ///
    /// The draft is replaced only when the intent is accepted.
    pub fn apply(
        &mut self,
        intent: CharacterIntent,
    ) -> Result<Vec<CreationEffect>, RejectedMutation> {
        let transition = apply_intent(&self.character, intent)?;
        self.character = transition.character;
        Ok(transition.effects)
    }

    /// Move forward one step.
    ///
    /// The current step and every step before it must be complete, since an
    /// intent applied later may have undone an earlier step. At the last step
    /// the wizard stays where it is.
    pub fn advance(&mut self) -> Result<WizardStep, NavigationError> {
        let current = self.current_step;
        self.require_complete(current.predecessors().chain(std::iter::once(current)))?;
        if let Some(next) = current.next() {
            self.current_step = next;
        }
        Ok(self.current_step)
    }

    /// Move back one step; a no-op on the first step
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.current_step.previous() {
            self.current_step = previous;
        }
        self.current_step
    }

    /// Jump to a step.
    ///
    /// Backward jumps always succeed. Forward jumps require every step before
    /// the target to be complete; the first incomplete one is reported.
    pub fn go_to(&mut self, target: WizardStep) -> Result<WizardStep, NavigationError> {
        if target > self.current_step {
            self.require_complete(target.predecessors())?;
        }
        self.current_step = target;
        Ok(self.current_step)
    }

    /// Report the first of `steps` that still has errors
    fn require_complete(
        &self,
        steps: impl IntoIterator<Item = WizardStep>,
    ) -> Result<(), NavigationError> {
        for step in steps {
            let errors = step_errors(step, &self.character);
            if !errors.is_empty() {
                return Err(NavigationError::Incomplete { step, errors });
            }
        }
        Ok(())
    }
}

/// Why the wizard refused to move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Step {step} is incomplete: {}", errors.join("; "))]
    Incomplete {
        step: WizardStep,
        errors: Vec<String>,
    },
}
