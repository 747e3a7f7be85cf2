//! Benefit plan business logic - the shared catalog of health and life plans.
//!
//! Besides creating and listing plans, this module seeds the four canonical
//! plans into an empty catalog at startup.

use crate::{
    entities::{BenefitPlan, PlanType, benefit_plan},
    errors::Result,
    models::BenefitPlanCreate,
};
use chrono::Utc;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

/// Maximum number of plans returned by a listing.
pub const PLAN_LIST_LIMIT: u64 = 1000;

/// Validates and stores a new, active plan.
///
/// # Errors
/// Returns a validation error for a negative premium, or a database error if
/// the insert fails.
pub async fn create_benefit_plan(
    db: &DatabaseConnection,
    input: BenefitPlanCreate,
) -> Result<benefit_plan::Model> {
    input.validate()?;

    let plan = benefit_plan::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(input.name),
        plan_type: Set(input.plan_type),
        description: Set(input.description),
        monthly_premium_per_employee: Set(input.monthly_premium_per_employee),
        coverage_amount: Set(input.coverage_amount),
        deductible: Set(input.deductible),
        features: Set(input.features.into_iter().collect()),
        is_active: Set(true),
        created_at: Set(Utc::now()),
    };

    let plan = plan.insert(db).await?;
    debug!(plan_id = %plan.id, name = %plan.name, "Created benefit plan");
    Ok(plan)
}

/// Lists every active plan.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_active_benefit_plans(db: &DatabaseConnection) -> Result<Vec<benefit_plan::Model>> {
    BenefitPlan::find()
        .filter(benefit_plan::Column::IsActive.eq(true))
        .order_by_asc(benefit_plan::Column::CreatedAt)
        .limit(PLAN_LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists active plans of a single type.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_active_benefit_plans_by_type(
    db: &DatabaseConnection,
    plan_type: PlanType,
) -> Result<Vec<benefit_plan::Model>> {
    BenefitPlan::find()
        .filter(benefit_plan::Column::IsActive.eq(true))
        .filter(benefit_plan::Column::PlanType.eq(plan_type))
        .order_by_asc(benefit_plan::Column::CreatedAt)
        .limit(PLAN_LIST_LIMIT)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a plan by id regardless of whether it is active.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_benefit_plan_by_id(
    db: &DatabaseConnection,
    plan_id: &str,
) -> Result<Option<benefit_plan::Model>> {
    BenefitPlan::find_by_id(plan_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// The four plans every fresh catalog starts with.
#[must_use]
pub fn default_plans() -> Vec<BenefitPlanCreate> {
    vec![
        BenefitPlanCreate {
            name: "Basic Health Plan".to_string(),
            plan_type: PlanType::HealthBasic,
            description: "Essential health coverage with major medical benefits".to_string(),
            monthly_premium_per_employee: 250.0,
            coverage_amount: Some(50000.0),
            deductible: Some(2500.0),
            features: to_strings(&[
                "Doctor visits",
                "Emergency care",
                "Prescription coverage",
                "Preventive care",
            ]),
        },
        BenefitPlanCreate {
            name: "Premium Health Plan".to_string(),
            plan_type: PlanType::HealthPremium,
            description: "Comprehensive health coverage with low deductibles".to_string(),
            monthly_premium_per_employee: 450.0,
            coverage_amount: Some(100_000.0),
            deductible: Some(500.0),
            features: to_strings(&[
                "All Basic features",
                "Specialist care",
                "Mental health",
                "Dental",
                "Vision",
            ]),
        },
        BenefitPlanCreate {
            name: "Basic Life Insurance".to_string(),
            plan_type: PlanType::LifeBasic,
            description: "Term life insurance coverage".to_string(),
            monthly_premium_per_employee: 25.0,
            coverage_amount: Some(50000.0),
            deductible: None,
            features: to_strings(&["Term life coverage", "Accidental death benefit"]),
        },
        BenefitPlanCreate {
            name: "Premium Life Insurance".to_string(),
            plan_type: PlanType::LifePremium,
            description: "Permanent life insurance with cash value".to_string(),
            monthly_premium_per_employee: 75.0,
            coverage_amount: Some(100_000.0),
            deductible: None,
            features: to_strings(&[
                "Permanent life coverage",
                "Cash value accumulation",
                "Loan option",
                "Disability waiver",
            ]),
        },
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Inserts [`default_plans`] when the catalog holds no plans at all.
///
/// The check is a plain row count: any existing plan, active or not and
/// whatever its content, makes this a no-op. Returns how many plans were added.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn seed_default_plans(db: &DatabaseConnection) -> Result<usize> {
    let existing = BenefitPlan::find().count(db).await?;
    if existing > 0 {
        debug!("Benefit plan catalog already has {} plans, skipping seed", existing);
        return Ok(0);
    }

    let plans = default_plans();
    let count = plans.len();
    for plan in plans {
        create_benefit_plan(db, plan).await?;
    }
    info!("Seeded {} default benefit plans", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::Features;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_plan_defaults_to_active() -> Result<()> {
        let db = setup_test_db().await?;

        let plan = create_test_plan(&db, PlanType::HealthBasic, 250.0).await?;
        assert!(plan.is_active);
        assert_eq!(plan.monthly_premium_per_employee, 250.0);

        let stored = get_benefit_plan_by_id(&db, &plan.id).await?.unwrap();
        assert_eq!(stored.features, plan.features);

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_premium_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let mut input = default_plans().remove(0);
        input.monthly_premium_per_employee = -5.0;

        let result = create_benefit_plan(&db, input).await;
        assert!(matches!(result, Err(Error::Validation { .. })));
        assert_eq!(BenefitPlan::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_listing_skips_inactive_plans() -> Result<()> {
        let db = setup_test_db().await?;
        let active = create_test_plan(&db, PlanType::HealthBasic, 250.0).await?;
        let retired = create_test_plan(&db, PlanType::HealthBasic, 300.0).await?;

        let mut retired: benefit_plan::ActiveModel = retired.into();
        retired.is_active = Set(false);
        retired.update(&db).await?;

        let plans = get_active_benefit_plans(&db).await?;
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, active.id);
        assert!(plans.iter().all(|p| p.is_active));

        let by_type = get_active_benefit_plans_by_type(&db, PlanType::HealthBasic).await?;
        assert_eq!(by_type.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_by_type_filters() -> Result<()> {
        let db = setup_test_db().await?;
        seed_default_plans(&db).await?;

        let life = get_active_benefit_plans_by_type(&db, PlanType::LifePremium).await?;
        assert_eq!(life.len(), 1);
        assert_eq!(life[0].name, "Premium Life Insurance");
        assert_eq!(life[0].deductible, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_inserts_four_canonical_plans() -> Result<()> {
        let db = setup_test_db().await?;

        assert_eq!(seed_default_plans(&db).await?, 4);

        let plans = get_active_benefit_plans(&db).await?;
        assert_eq!(plans.len(), 4);

        let basic = plans.iter().find(|p| p.name == "Basic Health Plan").unwrap();
        assert_eq!(basic.plan_type, PlanType::HealthBasic);
        assert_eq!(basic.monthly_premium_per_employee, 250.0);
        assert_eq!(basic.coverage_amount, Some(50000.0));
        assert_eq!(basic.deductible, Some(2500.0));
        assert_eq!(
            basic.features,
            Features::from_iter([
                "Doctor visits",
                "Emergency care",
                "Prescription coverage",
                "Preventive care",
            ])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_is_noop_when_catalog_not_empty() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_plan(&db, PlanType::LifeBasic, 10.0).await?;

        assert_eq!(seed_default_plans(&db).await?, 0);
        assert_eq!(BenefitPlan::find().count(&db).await?, 1);

        // A second seed on a seeded catalog adds nothing either
        let fresh = setup_test_db().await?;
        seed_default_plans(&fresh).await?;
        assert_eq!(seed_default_plans(&fresh).await?, 0);
        assert_eq!(BenefitPlan::find().count(&fresh).await?, 4);

        Ok(())
    }
}
