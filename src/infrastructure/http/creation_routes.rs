//! Character creation API routes
//!
//! Thin wrappers over `CharacterCreationService`. Rejected intents and blocked
//! navigation are normal outcomes and come back as 200 with details in the
//! body; only unknown sessions and storage failures are HTTP errors.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{
    GoToStepRequest, IntentOutcome, NavigationOutcome, SavedCharacterDto, SessionView,
    SubmissionOutcome,
};
use crate::application::services::CreationError;
use crate::domain::entities::EquipmentItem;
use crate::domain::value_objects::{CharacterId, CharacterIntent, SessionId};
use crate::infrastructure::state::AppState;

fn parse_session_id(id: &str) -> Result<SessionId, (StatusCode, String)> {
    Uuid::parse_str(id)
        .map(SessionId::from_uuid)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid session ID".to_string()))
}

fn creation_error(error: CreationError) -> (StatusCode, String) {
    match error {
        CreationError::SessionNotFound(_) => (StatusCode::NOT_FOUND, error.to_string()),
        CreationError::Persistence(_) => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

/// Start a creation session
pub async fn start_session(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.creation_service.start_session().await;
    (StatusCode::CREATED, Json(session))
}

/// Get a creation session
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    state
        .creation_service
        .get_session(id)
        .await
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Session not found".to_string()))
}

/// Abandon a creation session
pub async fn abandon_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    state
        .creation_service
        .abandon(id)
        .await
        .map_err(creation_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apply an intent to the session's character
pub async fn apply_intent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(intent): Json<CharacterIntent>,
) -> Result<Json<IntentOutcome>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let outcome = state
        .creation_service
        .apply_intent(id, intent)
        .await
        .map_err(creation_error)?;
    Ok(Json(outcome))
}

pub async fn next_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NavigationOutcome>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let outcome = state
        .creation_service
        .next_step(id)
        .await
        .map_err(creation_error)?;
    Ok(Json(outcome))
}

pub async fn previous_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NavigationOutcome>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let outcome = state
        .creation_service
        .previous_step(id)
        .await
        .map_err(creation_error)?;
    Ok(Json(outcome))
}

pub async fn go_to_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<GoToStepRequest>,
) -> Result<Json<NavigationOutcome>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let outcome = state
        .creation_service
        .go_to_step(id, req.step)
        .await
        .map_err(creation_error)?;
    Ok(Json(outcome))
}

/// Equipment the session's class can choose from
pub async fn available_equipment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<EquipmentItem>>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let items = state
        .creation_service
        .available_equipment(id)
        .await
        .map_err(creation_error)?;
    Ok(Json(items))
}

/// Submit the session's character
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<SubmissionOutcome>), (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let outcome = state
        .creation_service
        .submit(id)
        .await
        .map_err(creation_error)?;

    let status = match outcome {
        SubmissionOutcome::Saved { .. } => StatusCode::CREATED,
        SubmissionOutcome::Incomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    Ok((status, Json(outcome)))
}

/// List saved characters
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SavedCharacterDto>>, (StatusCode, String)> {
    let characters = state
        .creation_service
        .list_characters()
        .await
        .map_err(creation_error)?;
    Ok(Json(characters))
}

/// Get a saved character by ID
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SavedCharacterDto>, (StatusCode, String)> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid character ID".to_string()))?;

    let character = state
        .creation_service
        .get_character(CharacterId::from_uuid(uuid))
        .await
        .map_err(creation_error)?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Character not found".to_string()))?;

    Ok(Json(character))
}
