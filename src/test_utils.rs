//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{application, benefit_plan, business_owner, employee},
    entities::{self, BusinessType, Industry, PlanType},
    errors::Result,
    models::{ApplicationCreate, BenefitPlanCreate, BusinessOwnerCreate, EmployeeCreate},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a valid owner payload.
///
/// # Defaults
/// * `business_type`: llc
/// * `industry`: technology
/// * `years_in_business`: 5
#[must_use]
pub fn owner_input(business_name: &str) -> BusinessOwnerCreate {
    BusinessOwnerCreate {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@testbusiness.com".to_string(),
        phone: "555-123-4567".to_string(),
        business_name: business_name.to_string(),
        business_type: BusinessType::Llc,
        industry: Industry::Technology,
        tax_id: "12-3456789".to_string(),
        years_in_business: 5,
        address: "123 Business St".to_string(),
        city: "Business City".to_string(),
        state: "CA".to_string(),
        zip_code: "90210".to_string(),
    }
}

/// Builds a valid employee payload with the given salary.
#[must_use]
pub fn employee_input(owner_id: &str, annual_salary: f64) -> EmployeeCreate {
    EmployeeCreate {
        business_owner_id: owner_id.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        email: "jane.smith@testbusiness.com".to_string(),
        phone: "555-987-6543".to_string(),
        job_title: "Software Engineer".to_string(),
        annual_salary,
        hire_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap_or_default(),
        has_current_health_insurance: false,
        has_current_life_insurance: false,
        current_health_premium: None,
        current_life_premium: None,
    }
}

/// Creates a test owner with [`owner_input`] defaults.
pub async fn create_test_owner(
    db: &DatabaseConnection,
    business_name: &str,
) -> Result<entities::business_owner::Model> {
    business_owner::create_business_owner(db, owner_input(business_name)).await
}

/// Creates a test employee for `owner_id` with the given salary.
pub async fn create_test_employee(
    db: &DatabaseConnection,
    owner_id: &str,
    annual_salary: f64,
) -> Result<entities::employee::Model> {
    employee::create_employee(db, employee_input(owner_id, annual_salary)).await
}

/// Creates an active test plan with a single feature.
pub async fn create_test_plan(
    db: &DatabaseConnection,
    plan_type: PlanType,
    monthly_premium: f64,
) -> Result<entities::benefit_plan::Model> {
    benefit_plan::create_benefit_plan(
        db,
        BenefitPlanCreate {
            name: format!("Test {plan_type:?} Plan"),
            plan_type,
            description: "Plan for tests".to_string(),
            monthly_premium_per_employee: monthly_premium,
            coverage_amount: Some(10000.0),
            deductible: None,
            features: vec!["Test feature".to_string()],
        },
    )
    .await
}

/// Creates a draft application with no plan selections.
pub async fn create_test_application(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entities::application::Model> {
    application::create_application(
        db,
        ApplicationCreate {
            business_owner_id: owner_id.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Sets up a complete test environment with one owner.
/// Returns (db, owner) for common test scenarios.
pub async fn setup_with_owner() -> Result<(DatabaseConnection, entities::business_owner::Model)> {
    let db = setup_test_db().await?;
    let owner = create_test_owner(&db, "Test Business LLC").await?;
    Ok((db, owner))
}

/// Asserts two money amounts agree to within a millionth of a cent.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
