//! FICA calculation endpoints

use super::{AppState, extract::ApiPath};
use crate::{core::fica, entities::FicaCalculationModel, errors::Result};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

/// Optional plan selections for a calculation
#[derive(Debug, Default, Deserialize)]
pub struct CalculationParams {
    pub health_plan_id: Option<String>,
    pub life_plan_id: Option<String>,
}

/// POST /api/fica-calculation/{owner_id}?health_plan_id=&life_plan_id=
pub async fn calculate(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
    Query(params): Query<CalculationParams>,
) -> Result<Json<FicaCalculationModel>> {
    fica::calculate_fica_savings(
        &state.db,
        &owner_id,
        params.health_plan_id.as_deref().filter(|id| !id.is_empty()),
        params.life_plan_id.as_deref().filter(|id| !id.is_empty()),
    )
    .await
    .map(Json)
}

/// GET /api/fica-calculation/history/{owner_id}
pub async fn history(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<Vec<FicaCalculationModel>>> {
    fica::get_calculation_history(&state.db, &owner_id)
        .await
        .map(Json)
}
