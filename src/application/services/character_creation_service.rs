//! Character Creation Service - Application service for wizard sessions
//!
//! Owns the live creation sessions, runs intents through the rule engine,
//! performs the effects each transition returns, and hands finished characters
//! to the repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::application::dto::{
    IntentOutcome, NavigationOutcome, SavedCharacterDto, SessionView, SubmissionOutcome,
};
use crate::application::ports::outbound::{
    CharacterRepositoryPort, EquipmentCatalogPort, RepositoryError,
};
use crate::domain::aggregates::{CreationWizard, NavigationError};
use crate::domain::entities::EquipmentItem;
use crate::domain::events::CreationEffect;
use crate::domain::services::RejectedMutation;
use crate::domain::value_objects::{CharacterId, CharacterIntent, SessionId, WizardStep};

#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    #[error("Creation session not found: {0}")]
    SessionNotFound(SessionId),
    #[error("Failed to persist character: {0}")]
    Persistence(#[from] RepositoryError),
}

/// Character creation use cases
#[async_trait]
pub trait CharacterCreationService: Send + Sync {
    /// Open a session with a fresh draft on the first step
    async fn start_session(&self) -> SessionView;

    async fn get_session(&self, id: SessionId) -> Option<SessionView>;

    /// Apply one intent and re-validate the current step
    async fn apply_intent(
        &self,
        id: SessionId,
        intent: CharacterIntent,
    ) -> Result<IntentOutcome, CreationError>;

    /// Advance if the current step is complete
    async fn next_step(&self, id: SessionId) -> Result<NavigationOutcome, CreationError>;

    async fn previous_step(&self, id: SessionId) -> Result<NavigationOutcome, CreationError>;

    async fn go_to_step(
        &self,
        id: SessionId,
        step: WizardStep,
    ) -> Result<NavigationOutcome, CreationError>;

    /// Catalog items the session's class can use
    async fn available_equipment(&self, id: SessionId)
        -> Result<Vec<EquipmentItem>, CreationError>;

    /// Validate the whole character and store it if complete
    async fn submit(&self, id: SessionId) -> Result<SubmissionOutcome, CreationError>;

    /// Discard a session without saving
    async fn abandon(&self, id: SessionId) -> Result<(), CreationError>;

    async fn get_character(
        &self,
        id: CharacterId,
    ) -> Result<Option<SavedCharacterDto>, CreationError>;

    async fn list_characters(&self) -> Result<Vec<SavedCharacterDto>, CreationError>;
}

/// Default implementation holding sessions in memory
pub struct CharacterCreationServiceImpl {
    sessions: RwLock<HashMap<SessionId, CreationWizard>>,
    catalog: Arc<dyn EquipmentCatalogPort>,
    repository: Arc<dyn CharacterRepositoryPort>,
}

impl CharacterCreationServiceImpl {
    pub fn new(
        catalog: Arc<dyn EquipmentCatalogPort>,
        repository: Arc<dyn CharacterRepositoryPort>,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            catalog,
            repository,
        }
    }

    /// Perform the effects of an accepted transition
    fn perform_effects(session_id: SessionId, effects: &[CreationEffect]) {
        for effect in effects {
            match effect {
                CreationEffect::RacialModifiersApplied { race, .. } => {
                    info!(session_id = %session_id, race = %race, "Applied racial modifiers");
                }
                CreationEffect::RacialModifiersReverted { race } => {
                    info!(session_id = %session_id, race = %race, "Reverted racial modifiers");
                }
                CreationEffect::ClassSkillsGranted { class, skills } => {
                    info!(
                        session_id = %session_id,
                        class = %class,
                        "Granted class skills: {}",
                        skills.join(", ")
                    );
                }
                other => {
                    debug!(session_id = %session_id, effect = other.kind(), "{:?}", other);
                }
            }
        }
    }

    /// Replace equipment carried by an intent with the catalog's records.
    ///
    /// Items are matched by id, so client-supplied names, values or class
    /// restrictions never reach the draft. Unknown ids are refused, and so is
    /// every equipment intent while the catalog is unreachable.
    async fn resolve_equipment(&self, intent: CharacterIntent) -> Result<CharacterIntent, String> {
        if !matches!(
            intent,
            CharacterIntent::SetEquipment { .. } | CharacterIntent::AddEquipment { .. }
        ) {
            return Ok(intent);
        }

        let catalog = self.catalog.all_items().await.map_err(|e| {
            warn!("Cannot resolve equipment: {}", e);
            e.to_string()
        })?;
        let lookup = |item: EquipmentItem| {
            catalog
                .iter()
                .find(|known| known.id == item.id)
                .cloned()
                .ok_or_else(|| RejectedMutation::UnknownEquipment(item.id).to_string())
        };

        Ok(match intent {
            CharacterIntent::SetEquipment { items } => CharacterIntent::SetEquipment {
                items: items.into_iter().map(lookup).collect::<Result<_, _>>()?,
            },
            CharacterIntent::AddEquipment { item } => CharacterIntent::AddEquipment {
                item: lookup(item)?,
            },
            other => other,
        })
    }

    fn navigation_outcome(
        wizard: &CreationWizard,
        result: Result<WizardStep, NavigationError>,
    ) -> NavigationOutcome {
        match result {
            Ok(_) => NavigationOutcome {
                moved: true,
                blocked_by: None,
                errors: Vec::new(),
                session: SessionView::from(wizard),
            },
            Err(NavigationError::Incomplete { step, errors }) => NavigationOutcome {
                moved: false,
                blocked_by: Some(step),
                errors,
                session: SessionView::from(wizard),
            },
        }
    }
}

#[async_trait]
impl CharacterCreationService for CharacterCreationServiceImpl {
    #[instrument(skip(self))]
    async fn start_session(&self) -> SessionView {
        let wizard = CreationWizard::new(SessionId::new());
        let view = SessionView::from(&wizard);
        self.sessions.write().await.insert(wizard.session_id(), wizard);

        info!(session_id = %view.session_id, "Started character creation session");
        view
    }

    #[instrument(skip(self))]
    async fn get_session(&self, id: SessionId) -> Option<SessionView> {
        self.sessions.read().await.get(&id).map(SessionView::from)
    }

    #[instrument(skip(self, intent), fields(intent = intent.name()))]
    async fn apply_intent(
        &self,
        id: SessionId,
        intent: CharacterIntent,
    ) -> Result<IntentOutcome, CreationError> {
        if !self.sessions.read().await.contains_key(&id) {
            return Err(CreationError::SessionNotFound(id));
        }
        let resolved = self.resolve_equipment(intent).await;

        let mut sessions = self.sessions.write().await;
        let wizard = sessions
            .get_mut(&id)
            .ok_or(CreationError::SessionNotFound(id))?;

        let applied = resolved.and_then(|intent| wizard.apply(intent).map_err(|r| r.to_string()));
        let (effects, rejection) = match applied {
            Ok(effects) => {
                Self::perform_effects(id, &effects);
                (effects, None)
            }
            Err(rejection) => {
                debug!(session_id = %id, "Intent rejected: {}", rejection);
                (Vec::new(), Some(rejection))
            }
        };

        Ok(IntentOutcome {
            accepted: rejection.is_none(),
            rejection,
            effects,
            errors: wizard.current_errors(),
            session: SessionView::from(&*wizard),
        })
    }

    #[instrument(skip(self))]
    async fn next_step(&self, id: SessionId) -> Result<NavigationOutcome, CreationError> {
        let mut sessions = self.sessions.write().await;
        let wizard = sessions
            .get_mut(&id)
            .ok_or(CreationError::SessionNotFound(id))?;

        let result = wizard.advance();
        debug!(session_id = %id, step = %wizard.current_step(), "Next step requested");
        Ok(Self::navigation_outcome(wizard, result))
    }

    #[instrument(skip(self))]
    async fn previous_step(&self, id: SessionId) -> Result<NavigationOutcome, CreationError> {
        let mut sessions = self.sessions.write().await;
        let wizard = sessions
            .get_mut(&id)
            .ok_or(CreationError::SessionNotFound(id))?;

        let step = wizard.retreat();
        Ok(Self::navigation_outcome(wizard, Ok(step)))
    }

    #[instrument(skip(self))]
    async fn go_to_step(
        &self,
        id: SessionId,
        step: WizardStep,
    ) -> Result<NavigationOutcome, CreationError> {
        let mut sessions = self.sessions.write().await;
        let wizard = sessions
            .get_mut(&id)
            .ok_or(CreationError::SessionNotFound(id))?;

        let result = wizard.go_to(step);
        Ok(Self::navigation_outcome(wizard, result))
    }

    #[instrument(skip(self))]
    async fn available_equipment(
        &self,
        id: SessionId,
    ) -> Result<Vec<EquipmentItem>, CreationError> {
        let class = self
            .sessions
            .read()
            .await
            .get(&id)
            .ok_or(CreationError::SessionNotFound(id))?
            .character()
            .class();

        let Some(class) = class else {
            warn!(session_id = %id, "No class selected, no equipment available");
            return Ok(Vec::new());
        };

        match self.catalog.items_for_class(class).await {
            Ok(items) => {
                debug!(session_id = %id, class = %class, count = items.len(), "Loaded equipment");
                Ok(items)
            }
            Err(e) => {
                warn!(session_id = %id, class = %class, "Failed to load equipment: {}", e);
                Ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self))]
    async fn submit(&self, id: SessionId) -> Result<SubmissionOutcome, CreationError> {
        // Snapshot the draft so the sessions lock is not held across the save
        let character = {
            let sessions = self.sessions.read().await;
            let wizard = sessions
                .get(&id)
                .ok_or(CreationError::SessionNotFound(id))?;

            let errors = wizard.submission_errors();
            if !errors.is_empty() {
                debug!(session_id = %id, count = errors.len(), "Submission incomplete");
                return Ok(SubmissionOutcome::Incomplete { errors });
            }
            wizard.character().clone()
        };

        let saved = self.repository.save_character(&character).await?;
        self.sessions.write().await.remove(&id);

        info!(
            session_id = %id,
            character_id = %saved.id,
            "Saved character: {}",
            saved.character.summary()
        );
        Ok(SubmissionOutcome::Saved {
            character_id: saved.id,
        })
    }

    #[instrument(skip(self))]
    async fn abandon(&self, id: SessionId) -> Result<(), CreationError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or(CreationError::SessionNotFound(id))?;
        info!(session_id = %id, "Abandoned character creation session");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_character(
        &self,
        id: CharacterId,
    ) -> Result<Option<SavedCharacterDto>, CreationError> {
        debug!(character_id = %id, "Fetching character");
        let saved = self.repository.get_character(id).await?;
        Ok(saved.as_ref().map(SavedCharacterDto::from))
    }

    #[instrument(skip(self))]
    async fn list_characters(&self) -> Result<Vec<SavedCharacterDto>, CreationError> {
        let saved = self.repository.list_characters().await?;
        Ok(saved.iter().map(SavedCharacterDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::Utc;
    use crate::application::ports::outbound::{
        CatalogError, MockCharacterRepositoryPort, MockEquipmentCatalogPort,
    };
    use crate::domain::entities::{
        BackgroundUpdate, CharacterDraft, EquipmentRarity, EquipmentType, SavedCharacter,
    };
    use crate::domain::value_objects::{Attribute, CharacterClass, Race};

    fn staff() -> EquipmentItem {
        EquipmentItem::new("2", "Staff", EquipmentType::Weapon, EquipmentRarity::Common)
            .usable_by_classes([CharacterClass::Wizard])
    }

    /// A catalog that only knows the staff
    fn staff_catalog() -> MockEquipmentCatalogPort {
        let mut catalog = MockEquipmentCatalogPort::new();
        catalog.expect_all_items().returning(|| Ok(vec![staff()]));
        catalog
    }

    fn service(
        catalog: MockEquipmentCatalogPort,
        repository: MockCharacterRepositoryPort,
    ) -> CharacterCreationServiceImpl {
        CharacterCreationServiceImpl::new(Arc::new(catalog), Arc::new(repository))
    }

    fn idle_service() -> CharacterCreationServiceImpl {
        service(MockEquipmentCatalogPort::new(), MockCharacterRepositoryPort::new())
    }

    fn saving_repository() -> MockCharacterRepositoryPort {
        let mut repository = MockCharacterRepositoryPort::new();
        repository.expect_save_character().times(1).returning(|character| {
            Ok(SavedCharacter {
                id: CharacterId::new(),
                character: character.clone(),
                created_at: Utc::now(),
            })
        });
        repository
    }

    /// Drive a session through every step to a submittable Elf Wizard
    async fn complete_session(service: &CharacterCreationServiceImpl) -> SessionId {
        let id = service.start_session().await.session_id;
        let mut intents = vec![CharacterIntent::SetBasicInfo {
            name: Some("Aria".to_string()),
            race: Some(Race::Elf),
            class: Some(CharacterClass::Wizard),
        }];
        for (attribute, value) in [
            (Attribute::Intelligence, 15),
            (Attribute::Dexterity, 14),
            (Attribute::Constitution, 13),
            (Attribute::Wisdom, 12),
            (Attribute::Charisma, 10),
        ] {
            intents.push(CharacterIntent::SetAttribute { attribute, value });
        }
        intents.push(CharacterIntent::SetBackgroundField {
            update: BackgroundUpdate::Name("Sage".to_string()),
        });
        intents.push(CharacterIntent::SetBackgroundField {
            update: BackgroundUpdate::PersonalityTraits(vec!["Curious".to_string()]),
        });
        intents.push(CharacterIntent::SetBackgroundField {
            update: BackgroundUpdate::Ideals(vec!["Knowledge".to_string()]),
        });
        intents.push(CharacterIntent::SetBackgroundField {
            update: BackgroundUpdate::Bonds(vec!["My library".to_string()]),
        });
        intents.push(CharacterIntent::SetBackgroundField {
            update: BackgroundUpdate::Flaws(vec!["Arrogant".to_string()]),
        });
        intents.push(CharacterIntent::AddEquipment { item: staff() });

        for intent in intents {
            let outcome = service.apply_intent(id, intent).await.unwrap();
            assert!(outcome.accepted, "{:?}", outcome.rejection);
        }
        id
    }

    #[tokio::test]
    async fn test_start_session() {
        let service = idle_service();
        let view = service.start_session().await;

        assert_eq!(view.current_step, WizardStep::BasicInfo);
        assert_eq!(view.character.attribute_points, 27);
        assert!(service.get_session(view.session_id).await.is_some());
    }

    #[tokio::test]
    async fn test_apply_intent_reports_effects_and_errors() {
        let service = idle_service();
        let id = service.start_session().await.session_id;

        let outcome = service
            .apply_intent(
                id,
                CharacterIntent::SetBasicInfo {
                    name: Some("Aria".to_string()),
                    race: Some(Race::Elf),
                    class: None,
                },
            )
            .await
            .unwrap();

        assert!(outcome.accepted);
        assert_eq!(outcome.effects.len(), 2);
        assert_eq!(outcome.errors, vec!["Class is required"]);
        assert_eq!(outcome.session.character.final_attributes.dexterity, 10);
    }

    #[tokio::test]
    async fn test_rejected_intent_is_reported() {
        let service = idle_service();
        let id = service.start_session().await.session_id;

        let outcome = service
            .apply_intent(
                id,
                CharacterIntent::AdjustAttribute {
                    attribute: Attribute::Strength,
                    delta: -1,
                },
            )
            .await
            .unwrap();

        assert!(!outcome.accepted);
        assert!(outcome.rejection.is_some());
        assert!(outcome.effects.is_empty());
        assert_eq!(outcome.session.character.base_attributes.strength, 8);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let service = idle_service();
        let result = service.next_step(SessionId::new()).await;
        assert!(matches!(result, Err(CreationError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_navigation() {
        let service = idle_service();
        let id = service.start_session().await.session_id;

        let blocked = service.next_step(id).await.unwrap();
        assert!(!blocked.moved);
        assert_eq!(blocked.blocked_by, Some(WizardStep::BasicInfo));
        assert_eq!(blocked.errors.len(), 3);

        let back = service.previous_step(id).await.unwrap();
        assert!(back.moved);
        assert_eq!(back.session.current_step, WizardStep::BasicInfo);

        let jump = service.go_to_step(id, WizardStep::Equipment).await.unwrap();
        assert!(!jump.moved);
        assert_eq!(jump.session.current_step, WizardStep::BasicInfo);
    }

    #[tokio::test]
    async fn test_available_equipment_filters_by_class() {
        let mut catalog = MockEquipmentCatalogPort::new();
        catalog
            .expect_items_for_class()
            .withf(|class| *class == CharacterClass::Wizard)
            .times(1)
            .returning(|_| Ok(vec![staff()]));
        let service = service(catalog, MockCharacterRepositoryPort::new());
        let id = service.start_session().await.session_id;

        // No class yet: nothing offered and the catalog is not consulted
        assert!(service.available_equipment(id).await.unwrap().is_empty());

        service
            .apply_intent(
                id,
                CharacterIntent::SetBasicInfo {
                    name: None,
                    race: None,
                    class: Some(CharacterClass::Wizard),
                },
            )
            .await
            .unwrap();
        let items = service.available_equipment(id).await.unwrap();
        assert_eq!(items, vec![staff()]);
    }

    #[tokio::test]
    async fn test_catalog_failure_yields_empty_list() {
        let mut catalog = MockEquipmentCatalogPort::new();
        catalog
            .expect_items_for_class()
            .returning(|_| Err(CatalogError::Unavailable("timeout".to_string())));
        let service = service(catalog, MockCharacterRepositoryPort::new());
        let id = service.start_session().await.session_id;
        service
            .apply_intent(
                id,
                CharacterIntent::SetBasicInfo {
                    name: None,
                    race: None,
                    class: Some(CharacterClass::Rogue),
                },
            )
            .await
            .unwrap();

        assert!(service.available_equipment(id).await.unwrap().is_empty());
    }

    async fn start_wizard_session(service: &CharacterCreationServiceImpl) -> SessionId {
        let id = service.start_session().await.session_id;
        service
            .apply_intent(
                id,
                CharacterIntent::SetBasicInfo {
                    name: None,
                    race: None,
                    class: Some(CharacterClass::Wizard),
                },
            )
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_equipment_resolved_from_catalog() {
        let service = service(staff_catalog(), MockCharacterRepositoryPort::new());
        let id = start_wizard_session(&service).await;

        // Same id as the catalog staff, but with a forged value
        let forged = staff().with_value(u32::MAX).with_description("Priceless");
        let outcome = service
            .apply_intent(id, CharacterIntent::AddEquipment { item: forged })
            .await
            .unwrap();

        assert!(outcome.accepted);
        assert_eq!(outcome.session.character.equipment, vec![staff()]);
        assert_eq!(outcome.session.character.total_value, 0);
    }

    #[tokio::test]
    async fn test_unknown_equipment_rejected() {
        let service = service(staff_catalog(), MockCharacterRepositoryPort::new());
        let id = start_wizard_session(&service).await;

        let gem = |id: &str| {
            EquipmentItem::new(id, "Gem", EquipmentType::Miscellaneous, EquipmentRarity::Rare)
                .with_value(u32::MAX)
        };
        let outcome = service
            .apply_intent(
                id,
                CharacterIntent::SetEquipment {
                    items: vec![gem("90"), gem("91")],
                },
            )
            .await
            .unwrap();

        assert!(!outcome.accepted);
        assert_eq!(
            outcome.rejection.as_deref(),
            Some("Equipment 90 is not in the catalog")
        );
        assert!(outcome.session.character.equipment.is_empty());
        assert!(service.get_session(id).await.is_some());
    }

    #[tokio::test]
    async fn test_equipment_rejected_while_catalog_unavailable() {
        let mut catalog = MockEquipmentCatalogPort::new();
        catalog
            .expect_all_items()
            .returning(|| Err(CatalogError::Unavailable("timeout".to_string())));
        let service = service(catalog, MockCharacterRepositoryPort::new());
        let id = start_wizard_session(&service).await;

        let outcome = service
            .apply_intent(id, CharacterIntent::AddEquipment { item: staff() })
            .await
            .unwrap();

        assert!(!outcome.accepted);
        assert!(outcome.rejection.unwrap().contains("timeout"));
    }

    #[tokio::test]
    async fn test_submit_incomplete_keeps_session() {
        let service = idle_service();
        let id = service.start_session().await.session_id;

        let outcome = service.submit(id).await.unwrap();
        match outcome {
            SubmissionOutcome::Incomplete { errors } => {
                assert!(errors.contains(&"Name is required".to_string()));
                assert!(errors
                    .contains(&"You must select at least one piece of equipment".to_string()));
            }
            other => panic!("Expected Incomplete, got {:?}", other),
        }
        assert!(service.get_session(id).await.is_some());
    }

    #[tokio::test]
    async fn test_submit_complete_character() {
        let service = service(staff_catalog(), saving_repository());
        let id = complete_session(&service).await;

        let outcome = service.submit(id).await.unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Saved { .. }));
        assert!(service.get_session(id).await.is_none());
    }

    /// Repository whose save blocks until the test releases it
    struct GatedRepository {
        entered: Arc<tokio::sync::Notify>,
        release: Arc<tokio::sync::Notify>,
    }

    #[async_trait]
    impl CharacterRepositoryPort for GatedRepository {
        async fn save_character(
            &self,
            character: &CharacterDraft,
        ) -> Result<SavedCharacter, RepositoryError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(SavedCharacter {
                id: CharacterId::new(),
                character: character.clone(),
                created_at: Utc::now(),
            })
        }

        async fn get_character(
            &self,
            _id: CharacterId,
        ) -> Result<Option<SavedCharacter>, RepositoryError> {
            Ok(None)
        }

        async fn list_characters(&self) -> Result<Vec<SavedCharacter>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_sessions_usable_while_saving() {
        let entered = Arc::new(tokio::sync::Notify::new());
        let release = Arc::new(tokio::sync::Notify::new());
        let repository = GatedRepository {
            entered: entered.clone(),
            release: release.clone(),
        };
        let service = Arc::new(CharacterCreationServiceImpl::new(
            Arc::new(staff_catalog()),
            Arc::new(repository),
        ));
        let id = complete_session(&service).await;

        let submitting = tokio::spawn({
            let service = service.clone();
            async move { service.submit(id).await }
        });
        entered.notified().await;

        // Starting a session needs the write lock
        let other = tokio::time::timeout(Duration::from_secs(1), service.start_session())
            .await
            .expect("sessions lock held during save");
        assert!(service.get_session(other.session_id).await.is_some());

        release.notify_one();
        let outcome = submitting.await.unwrap().unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Saved { .. }));
        assert!(service.get_session(id).await.is_none());
    }

    #[tokio::test]
    async fn test_persistence_failure_keeps_session() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository
            .expect_save_character()
            .returning(|_| Err(RepositoryError::Database("disk full".to_string())));
        let service = service(staff_catalog(), repository);
        let id = complete_session(&service).await;

        let result = service.submit(id).await;
        assert!(matches!(result, Err(CreationError::Persistence(_))));

        let session = service.get_session(id).await.unwrap();
        assert_eq!(session.character.name, "Aria");
    }

    #[tokio::test]
    async fn test_abandon() {
        let service = idle_service();
        let id = service.start_session().await.session_id;

        service.abandon(id).await.unwrap();
        assert!(service.get_session(id).await.is_none());
        assert!(matches!(
            service.abandon(id).await,
            Err(CreationError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_characters() {
        let mut repository = MockCharacterRepositoryPort::new();
        repository.expect_list_characters().returning(|| {
            Ok(vec![SavedCharacter {
                id: CharacterId::new(),
                character: Default::default(),
                created_at: Utc::now(),
            }])
        });
        let service = service(MockEquipmentCatalogPort::new(), repository);

        let characters = service.list_characters().await.unwrap();
        assert_eq!(characters.len(), 1);
        assert_eq!(characters[0].summary, "Unnamed");
    }
}
