//! Eligibility and dashboard endpoints

use super::{AppState, extract::ApiPath};
use crate::{
    core::{
        dashboard::{self, DashboardSummary},
        eligibility::{self, EligibilityReport},
    },
    errors::Result,
};
use axum::{Json, extract::State};

/// GET /api/eligibility-check/{owner_id}
pub async fn eligibility_check(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<EligibilityReport>> {
    eligibility::check_eligibility(&state.db, &owner_id)
        .await
        .map(Json)
}

/// GET /api/dashboard/{owner_id}
pub async fn dashboard_summary(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<DashboardSummary>> {
    dashboard::get_dashboard_summary(&state.db, &owner_id)
        .await
        .map(Json)
}
