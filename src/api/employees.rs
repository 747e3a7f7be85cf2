//! Employee endpoints

use super::{
    AppState,
    extract::{ApiJson, ApiPath},
};
use crate::{core::employee, entities::EmployeeModel, errors::Result, models::EmployeeCreate};
use axum::{Json, extract::State};
use serde::Serialize;

/// Body returned after a successful delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<EmployeeCreate>,
) -> Result<Json<EmployeeModel>> {
    employee::create_employee(&state.db, input).await.map(Json)
}

/// GET /api/employees/business/{owner_id}
pub async fn list_employees_for_business(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<String>,
) -> Result<Json<Vec<EmployeeModel>>> {
    employee::get_employees_for_business(&state.db, &owner_id)
        .await
        .map(Json)
}

/// GET /api/employees/{employee_id}
pub async fn get_employee(
    State(state): State<AppState>,
    ApiPath(employee_id): ApiPath<String>,
) -> Result<Json<EmployeeModel>> {
    employee::get_employee(&state.db, &employee_id).await.map(Json)
}

/// DELETE /api/employees/{employee_id}
pub async fn delete_employee(
    State(state): State<AppState>,
    ApiPath(employee_id): ApiPath<String>,
) -> Result<Json<MessageResponse>> {
    employee::delete_employee(&state.db, &employee_id).await?;
    Ok(Json(MessageResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}
