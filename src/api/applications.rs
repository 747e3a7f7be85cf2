//! Application endpoints

use super::{
    AppState,
    extract::{ApiJson, ApiPath},
};
use crate::{
    core::application,
    entities::ApplicationModel,
    errors::Result,
    models::{ApplicationCreate, ApplicationUpdate},
};
use axum::{Json, extract::State};

/// POST /api/applications
pub async fn create_application(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ApplicationCreate>,
) -> Result<Json<ApplicationModel>> {
    application::create_application(&state.db, input)
        .await
        .map(Json)
}

/// GET /api/applications/business/{owner_id}
pub async fn list_applications_for_business(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<Vec<ApplicationModel>>> {
    application::get_applications_for_business(&state.db, &owner_id)
        .await
        .map(Json)
}

/// GET /api/applications/{application_id}
pub async fn get_application(
    State(state): State<AppState>,
    ApiPath(application_id): ApiPath<String>,
) -> Result<Json<ApplicationModel>> {
    application::get_application(&state.db, &application_id)
        .await
        .map(Json)
}

/// PUT /api/applications/{application_id}
pub async fn update_application(
    State(state): State<AppState>,
    ApiPath(application_id): ApiPath<String>,
    ApiJson(patch): ApiJson<ApplicationUpdate>,
) -> Result<Json<ApplicationModel>> {
    application::update_application(&state.db, &application_id, patch)
        .await
        .map(Json)
}
