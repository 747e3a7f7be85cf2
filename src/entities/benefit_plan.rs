//! Benefit plan entity - Shared reference data for health and life cover.
//!
//! Plans are not owned by any business. Inactive plans stay in the table but are
//! never returned by the listing operations.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of cover a plan provides
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    #[sea_orm(string_value = "health_basic")]
    HealthBasic,
    #[sea_orm(string_value = "health_premium")]
    HealthPremium,
    #[sea_orm(string_value = "life_basic")]
    LifeBasic,
    #[sea_orm(string_value = "life_premium")]
    LifePremium,
}

/// Ordered list of marketing features, stored as a JSON array
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Features(pub Vec<String>);

impl<S: Into<String>> FromIterator<S> for Features {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Benefit plan database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "benefit_plans")]
pub struct Model {
    /// UUID string assigned at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name (e.g., "Basic Health Plan")
    pub name: String,
    /// Kind of cover, fixed at creation
    pub plan_type: PlanType,
    pub description: String,
    /// Employer cost per enrolled employee per month
    pub monthly_premium_per_employee: f64,
    /// Maximum benefit paid out, if the plan has one
    pub coverage_amount: Option<f64>,
    /// Annual deductible, if the plan has one
    pub deductible: Option<f64>,
    #[sea_orm(column_type = "Json")]
    pub features: Features,
    /// Only active plans are listed
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

/// Benefit plans are standalone reference data
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
