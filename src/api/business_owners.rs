//! Business owner endpoints

use super::{
    AppState,
    extract::{ApiJson, ApiPath},
};
use crate::{
    core::business_owner, entities::BusinessOwnerModel, errors::Result, models::BusinessOwnerCreate,
};
use axum::{Json, extract::State};

/// POST /api/business-owners
pub async fn create_business_owner(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BusinessOwnerCreate>,
) -> Result<Json<BusinessOwnerModel>> {
    business_owner::create_business_owner(&state.db, input)
        .await
        .map(Json)
}

/// GET /api/business-owners/{owner_id}
pub async fn get_business_owner(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<BusinessOwnerModel>> {
    business_owner::get_business_owner(&state.db, &owner_id)
        .await
        .map(Json)
}

/// GET /api/business-owners
pub async fn list_business_owners(
    State(state): State<AppState>,
) -> Result<Json<Vec<BusinessOwnerModel>>> {
    business_owner::get_all_business_owners(&state.db)
        .await
        .map(Json)
}
