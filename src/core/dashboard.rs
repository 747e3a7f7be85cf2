//! Dashboard summary for a single business.

use crate::{
    core::{
        application::get_recent_applications, business_owner::get_business_owner,
        employee::count_employees_for_business, fica::get_latest_calculation,
    },
    entities::{application, fica_calculation},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// How many applications the dashboard fetches (and therefore counts).
pub const DASHBOARD_APPLICATION_LIMIT: u64 = 10;
/// How many of those are shown as recent.
pub const RECENT_APPLICATIONS_SHOWN: usize = 3;

/// Aggregated view shown on a business's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub business_name: String,
    pub employee_count: u64,
    /// Number of applications fetched, capped at [`DASHBOARD_APPLICATION_LIMIT`]
    pub applications_count: usize,
    pub latest_calculation: Option<fica_calculation::Model>,
    pub recent_applications: Vec<application::Model>,
}

/// Builds the dashboard summary for an owner.
///
/// # Errors
/// Returns [`crate::errors::Error::NotFound`] if the owner does not exist.
pub async fn get_dashboard_summary(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<DashboardSummary> {
    let owner = get_business_owner(db, owner_id).await?;
    let employee_count = count_employees_for_business(db, owner_id).await?;
    let mut applications =
        get_recent_applications(db, owner_id, DASHBOARD_APPLICATION_LIMIT).await?;
    let latest_calculation = get_latest_calculation(db, owner_id).await?;

    let applications_count = applications.len();
    applications.truncate(RECENT_APPLICATIONS_SHOWN);

    Ok(DashboardSummary {
        business_name: owner.business_name,
        employee_count,
        applications_count,
        latest_calculation,
        recent_applications: applications,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fica::calculate_fica_savings;
    use crate::errors::Error;
    use crate::test_utils::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_dashboard() -> Result<()> {
        let (db, owner) = setup_with_owner().await?;

        let summary = get_dashboard_summary(&db, &owner.id).await?;
        assert_eq!(summary.business_name, owner.business_name);
        assert_eq!(summary.employee_count, 0);
        assert_eq!(summary.applications_count, 0);
        assert!(summary.latest_calculation.is_none());
        assert!(summary.recent_applications.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_aggregates() -> Result<()> {
        let (db, owner) = setup_with_owner().await?;
        create_test_employee(&db, &owner.id, 75000.0).await?;
        create_test_employee(&db, &owner.id, 65000.0).await?;

        let mut created = Vec::new();
        for _ in 0..4 {
            created.push(create_test_application(&db, &owner.id).await?);
            tokio::time::sleep(Duration::from_millis(3)).await;
        }
        let calculation = calculate_fica_savings(&db, &owner.id, None, None).await?;

        let summary = get_dashboard_summary(&db, &owner.id).await?;
        assert_eq!(summary.employee_count, 2);
        assert_eq!(summary.applications_count, 4);
        assert_eq!(summary.latest_calculation, Some(calculation));
        assert_eq!(summary.recent_applications.len(), 3);
        assert_eq!(summary.recent_applications[0].id, created[3].id);
        assert_eq!(summary.recent_applications[2].id, created[1].id);

        Ok(())
    }

    #[tokio::test]
    async fn test_application_count_is_capped() -> Result<()> {
        let (db, owner) = setup_with_owner().await?;
        for _ in 0..12 {
            create_test_application(&db, &owner.id).await?;
        }

        let summary = get_dashboard_summary(&db, &owner.id).await?;
        assert_eq!(summary.applications_count, 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_unknown_owner() -> Result<()> {
        let db = setup_test_db().await?;
        let result = get_dashboard_summary(&db, "ghost").await;
        assert!(matches!(result, Err(Error::NotFound { .. })));
        Ok(())
    }
}
