//! Employee business logic - payroll records attached to a business owner.

use crate::{
    core::business_owner::get_business_owner,
    entities::{Employee, employee},
    errors::{Error, Result},
    models::EmployeeCreate,
};
use chrono::Utc;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Maximum number of employees returned for one business.
pub const EMPLOYEE_LIST_LIMIT: u64 = 1000;

/// Adds an employee to an existing business.
///
/// # Errors
/// Returns [`Error::Validation`] for malformed input and [`Error::NotFound`]
/// when `business_owner_id` does not resolve. Nothing is stored in either case.
pub async fn create_employee(
    db: &DatabaseConnection,
    input: EmployeeCreate,
) -> Result<employee::Model> {
    input.validate()?;
    get_business_owner(db, &input.business_owner_id).await?;

    let employee = employee::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        business_owner_id: Set(input.business_owner_id),
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        email: Set(input.email),
        phone: Set(input.phone),
        job_title: Set(input.job_title),
        annual_salary: Set(input.annual_salary),
        hire_date: Set(input.hire_date),
        birth_date: Set(input.birth_date),
        has_current_health_insurance: Set(input.has_current_health_insurance),
        has_current_life_insurance: Set(input.has_current_life_insurance),
        current_health_premium: Set(input.current_health_premium),
        current_life_premium: Set(input.current_life_premium),
        created_at: Set(Utc::now()),
    };

    let employee = employee.insert(db).await?;
    info!(employee_id = %employee.id, owner_id = %employee.business_owner_id, "Added employee");
    Ok(employee)
}

/// Lists a business's employees in the order they were added.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_employees_for_business(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<employee::Model>> {
    Employee::find()
        .filter(employee::Column::BusinessOwnerId.eq(owner_id))
        .order_by_asc(employee::Column::CreatedAt)
        .limit(EMPLOYEE_LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts a business's employees without loading them.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_employees_for_business(db: &DatabaseConnection, owner_id: &str) -> Result<u64> {
    Employee::find()
        .filter(employee::Column::BusinessOwnerId.eq(owner_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by id.
///
/// # Errors
/// Returns [`Error::NotFound`] when no employee has this id.
pub async fn get_employee(db: &DatabaseConnection, employee_id: &str) -> Result<employee::Model> {
    Employee::find_by_id(employee_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Employee", employee_id))
}

/// Permanently removes an employee.
///
/// # Errors
/// Returns [`Error::NotFound`] when no row was deleted.
pub async fn delete_employee(db: &DatabaseConnection, employee_id: &str) -> Result<()> {
    let result = Employee::delete_by_id(employee_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("Employee", employee_id));
    }
    info!(employee_id, "Deleted employee");
    Ok(())
}
