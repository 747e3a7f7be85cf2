//! FICA savings estimation.
//!
//! Payroll tax is taken at a flat combined 7.65% and projected savings at a
//! flat 30% of yearly benefit cost.
//! Every calculation is stored as an append-only record.

use crate::{
    core::{
        benefit_plan::get_benefit_plan_by_id, business_owner::get_business_owner,
        employee::get_employees_for_business,
    },
    entities::{FicaCalculation, fica_calculation},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::info;
use uuid::Uuid;

/// Combined Social Security (6.2%) and Medicare (1.45%) rate.
pub const FICA_RATE: f64 = 0.0765;
/// Share of yearly benefit cost counted as FICA savings.
pub const SAVINGS_RATE: f64 = 0.30;
/// Premiums are quoted monthly.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Maximum number of records returned by [`get_calculation_history`].
pub const HISTORY_LIMIT: u64 = 100;

/// Result of the savings formula, before it is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsBreakdown {
    pub total_employee_salaries: f64,
    pub current_fica_tax: f64,
    pub health_benefit_cost: f64,
    pub life_insurance_cost: f64,
    pub projected_fica_savings: f64,
    pub annual_savings: f64,
    pub net_savings: f64,
}

/// Yearly employer cost of a plan for `employee_count` employees.
#[allow(clippy::cast_precision_loss)] // Headcounts are far below 2^52
#[must_use]
pub fn yearly_plan_cost(monthly_premium: f64, employee_count: usize) -> f64 {
    monthly_premium * employee_count as f64 * MONTHS_PER_YEAR
}

/// Applies the savings formula.
///
/// A missing premium means no plan of that kind was selected, so its cost is zero.
#[must_use]
pub fn compute_savings(
    salaries: &[f64],
    health_premium: Option<f64>,
    life_premium: Option<f64>,
) -> SavingsBreakdown {
    let employee_count = salaries.len();
    let total_employee_salaries: f64 = salaries.iter().sum();
    let current_fica_tax = total_employee_salaries * FICA_RATE;

    let health_benefit_cost =
        health_premium.map_or(0.0, |premium| yearly_plan_cost(premium, employee_count));
    let life_insurance_cost =
        life_premium.map_or(0.0, |premium| yearly_plan_cost(premium, employee_count));
    let total_benefit_cost = health_benefit_cost + life_insurance_cost;

    let projected_fica_savings = total_benefit_cost * SAVINGS_RATE;
    let annual_savings = projected_fica_savings;
    let net_savings = annual_savings - total_benefit_cost;

    SavingsBreakdown {
        total_employee_salaries,
        current_fica_tax,
        health_benefit_cost,
        life_insurance_cost,
        projected_fica_savings,
        annual_savings,
        net_savings,
    }
}

/// Looks up a plan's monthly premium; unknown ids and `None` yield `None`.
async fn premium_for(db: &DatabaseConnection, plan_id: Option<&str>) -> Result<Option<f64>> {
    let Some(plan_id) = plan_id else {
        return Ok(None);
    };
    Ok(get_benefit_plan_by_id(db, plan_id)
        .await?
        .map(|plan| plan.monthly_premium_per_employee))
}

/// Runs the savings estimate for an owner and stores the result.
///
/// Plan ids that do not resolve are ignored rather than rejected.
///
/// # Errors
/// - [`Error::NotFound`] if the owner does not exist
/// - [`Error::InvalidRequest`] if the owner has no employees
pub async fn calculate_fica_savings(
    db: &DatabaseConnection,
    owner_id: &str,
    health_plan_id: Option<&str>,
    life_plan_id: Option<&str>,
) -> Result<fica_calculation::Model> {
    get_business_owner(db, owner_id).await?;

    let employees = get_employees_for_business(db, owner_id).await?;
    if employees.is_empty() {
        return Err(Error::InvalidRequest {
            message: "No employees found for this business".to_string(),
        });
    }

    let salaries: Vec<f64> = employees.iter().map(|e| e.annual_salary).collect();
    let health_premium = premium_for(db, health_plan_id).await?;
    let life_premium = premium_for(db, life_plan_id).await?;
    let breakdown = compute_savings(&salaries, health_premium, life_premium);

    let calculation = fica_calculation::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        business_owner_id: Set(owner_id.to_string()),
        total_employee_salaries: Set(breakdown.total_employee_salaries),
        current_fica_tax: Set(breakdown.current_fica_tax),
        projected_fica_savings: Set(breakdown.projected_fica_savings),
        annual_savings: Set(breakdown.annual_savings),
        health_benefit_cost: Set(breakdown.health_benefit_cost),
        life_insurance_cost: Set(breakdown.life_insurance_cost),
        net_savings: Set(breakdown.net_savings),
        calculation_date: Set(Utc::now()),
    };

    let calculation = calculation.insert(db).await?;
    info!(
        owner_id,
        employees = employees.len(),
        net_savings = calculation.net_savings,
        "Stored FICA calculation"
    );
    Ok(calculation)
}

/// Lists an owner's calculations, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_calculation_history(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<fica_calculation::Model>> {
    FicaCalculation::find()
        .filter(fica_calculation::Column::BusinessOwnerId.eq(owner_id))
        .order_by_desc(fica_calculation::Column::CalculationDate)
        .limit(HISTORY_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Most recent calculation for an owner, if any.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_latest_calculation(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Option<fica_calculation::Model>> {
    FicaCalculation::find()
        .filter(fica_calculation::Column::BusinessOwnerId.eq(owner_id))
        .order_by_desc(fica_calculation::Column::CalculationDate)
        .one(db)
        .await
        .map_err(Into::into)
}
