//! Benefit plan catalog endpoints

use super::{
    AppState,
    extract::{ApiJson, ApiPath},
};
use crate::{
    core::benefit_plan,
    entities::{BenefitPlanModel, PlanType},
    errors::Result,
    models::BenefitPlanCreate,
};
use axum::{Json, extract::State};

/// POST /api/benefit-plans
pub async fn create_benefit_plan(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BenefitPlanCreate>,
) -> Result<Json<BenefitPlanModel>> {
    benefit_plan::create_benefit_plan(&state.db, input)
        .await
        .map(Json)
}

/// GET /api/benefit-plans
pub async fn list_benefit_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<BenefitPlanModel>>> {
    benefit_plan::get_active_benefit_plans(&state.db)
        .await
        .map(Json)
}

/// GET /api/benefit-plans/{plan_type}
pub async fn list_benefit_plans_by_type(
    State(state): State<AppState>,
    ApiPath(plan_type): ApiPath<PlanType>,
) -> Result<Json<Vec<BenefitPlanModel>>> {
    benefit_plan::get_active_benefit_plans_by_type(&state.db, plan_type)
        .await
        .map(Json)
}
