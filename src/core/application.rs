//! Application business logic - the enrollment request workflow.
//!
//! Status may move between any two values. The only automatic side effect is
//! that setting the status to `submitted` stamps `submitted_at` with the current
//! time, including on repeated submissions.

use crate::{
    core::{business_owner::get_business_owner, employee::count_employees_for_business},
    entities::{Application, ApplicationStatus, application},
    errors::{Error, Result},
    models::{ApplicationCreate, ApplicationUpdate},
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{debug, info};
use uuid::Uuid;

/// Maximum number of applications returned for one business.
pub const APPLICATION_LIST_LIMIT: u64 = 100;

/// Opens a draft application for an existing business.
///
/// `total_employees` is a snapshot of the headcount at this moment and
/// `estimated_annual_savings` starts at zero.
///
/// # Errors
/// Returns [`Error::NotFound`] if the owner does not exist.
pub async fn create_application(
    db: &DatabaseConnection,
    input: ApplicationCreate,
) -> Result<application::Model> {
    get_business_owner(db, &input.business_owner_id).await?;
    let employee_count = count_employees_for_business(db, &input.business_owner_id).await?;

    let now = Utc::now();
    let application = application::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        business_owner_id: Set(input.business_owner_id),
        status: Set(ApplicationStatus::Draft),
        selected_health_plan_id: Set(input.selected_health_plan_id),
        selected_life_plan_id: Set(input.selected_life_plan_id),
        total_employees: Set(i64::try_from(employee_count).unwrap_or(i64::MAX)),
        estimated_annual_savings: Set(0.0),
        notes: Set(input.notes),
        submitted_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let application = application.insert(db).await?;
    info!(
        application_id = %application.id,
        owner_id = %application.business_owner_id,
        "Created application"
    );
    Ok(application)
}

/// Lists a business's most recent applications, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_recent_applications(
    db: &DatabaseConnection,
    owner_id: &str,
    limit: u64,
) -> Result<Vec<application::Model>> {
    Application::find()
        .filter(application::Column::BusinessOwnerId.eq(owner_id))
        .order_by_desc(application::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists up to [`APPLICATION_LIST_LIMIT`] applications, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_applications_for_business(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<application::Model>> {
    get_recent_applications(db, owner_id, APPLICATION_LIST_LIMIT).await
}

/// Finds an application by id.
///
/// # Errors
/// Returns [`Error::NotFound`] when no application has this id.
pub async fn get_application(
    db: &DatabaseConnection,
    application_id: &str,
) -> Result<application::Model> {
    Application::find_by_id(application_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Application", application_id))
}

/// Applies a partial update and returns the stored result.
///
/// Only fields present in `patch` are written; `updated_at` is always refreshed.
/// The returned record is re-read from the store.
///
/// # Errors
/// Returns [`Error::NotFound`] when no application has this id.
pub async fn update_application(
    db: &DatabaseConnection,
    application_id: &str,
    patch: ApplicationUpdate,
) -> Result<application::Model> {
    let mut application: application::ActiveModel = get_application(db, application_id)
        .await?
        .into();

    let now = Utc::now();
    if let Some(status) = patch.status {
        application.status = Set(status);
        if status == ApplicationStatus::Submitted {
            application.submitted_at = Set(Some(now));
        }
    }
    if let Some(plan_id) = patch.selected_health_plan_id {
        application.selected_health_plan_id = Set(Some(plan_id));
    }
    if let Some(plan_id) = patch.selected_life_plan_id {
        application.selected_life_plan_id = Set(Some(plan_id));
    }
    if let Some(notes) = patch.notes {
        application.notes = Set(Some(notes));
    }
    application.updated_at = Set(now);

    application.update(db).await?;
    debug!(application_id, status = ?patch.status, "Updated application");

    get_application(db, application_id).await
}
