//! Reference data API routes
//!
//! Static lists the wizard renders next to each step.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::application::dto::{ClassDto, RaceDto, StepDto};
use crate::domain::entities::EquipmentItem;
use crate::domain::value_objects::{
    background_presets, default_skills, Attribute, BackgroundPreset, CharacterClass, Race,
    SkillDefinition, WizardStep,
};
use crate::infrastructure::state::AppState;

/// Summary of an attribute
#[derive(Debug, Serialize)]
pub struct AttributeSummary {
    attribute: Attribute,
    name: &'static str,
    abbreviation: &'static str,
    description: &'static str,
}

pub async fn list_attributes() -> Json<Vec<AttributeSummary>> {
    Json(
        Attribute::ALL
            .into_iter()
            .map(|attribute| AttributeSummary {
                attribute,
                name: attribute.name(),
                abbreviation: attribute.abbreviation(),
                description: attribute.description(),
            })
            .collect(),
    )
}

pub async fn list_races() -> Json<Vec<RaceDto>> {
    Json(Race::ALL.into_iter().map(RaceDto::from).collect())
}

pub async fn list_classes() -> Json<Vec<ClassDto>> {
    Json(CharacterClass::ALL.into_iter().map(ClassDto::from).collect())
}

pub async fn list_skills() -> Json<&'static [SkillDefinition]> {
    Json(default_skills())
}

pub async fn list_backgrounds() -> Json<&'static [BackgroundPreset]> {
    Json(background_presets())
}

pub async fn list_steps() -> Json<Vec<StepDto>> {
    Json(WizardStep::ALL.into_iter().map(StepDto::from).collect())
}

/// Every item in the equipment catalog
pub async fn list_equipment(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EquipmentItem>>, (StatusCode, String)> {
    let items = state
        .equipment_catalog
        .all_items()
        .await
        .map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;
    Ok(Json(items))
}

/// Look up a catalog item by name
pub async fn find_equipment(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<EquipmentItem>, (StatusCode, String)> {
    state
        .equipment_catalog
        .find_by_name(&name)
        .await
        .map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("No equipment named {}", name)))
}
